/// Integer tf-idf score:
/// `floor(freq / doc_tokens * (1 + log10(total_docs / term_docs)) * 1_000_000)`.
///
/// Returns 0 when any denominator would be zero.
pub fn tf_idf_weight(freq: u32, doc_tokens: u32, total_docs: u32, term_docs: u32) -> u64 {
    if doc_tokens == 0 || total_docs == 0 || term_docs == 0 {
        return 0;
    }
    let tf = f64::from(freq) / f64::from(doc_tokens);
    let idf = 1.0 + (f64::from(total_docs) / f64::from(term_docs)).log10();
    (tf * idf * 1_000_000.0).floor() as u64
}
