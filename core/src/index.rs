use serde::{Deserialize, Serialize};

pub type DocId = u32;

/// Per-document metadata kept for the map file and for weighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    pub doc_id: DocId,
    /// Original file name; truncated only when written to the map file.
    pub name: String,
    /// Tokens accepted into the document table (length > 1, not a stopword).
    pub token_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub freq: u32,
}

/// One live slot of the global index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub term: String,
    /// Ascending by doc id, one posting per document.
    pub postings: Vec<Posting>,
}

impl TermEntry {
    pub fn new(term: String) -> Self {
        Self { term, postings: Vec::new() }
    }

    /// Number of distinct documents containing the term.
    pub fn num_docs(&self) -> usize {
        self.postings.len()
    }

    /// A term seen once in a single document carries no ranking signal.
    pub fn is_prunable(&self) -> bool {
        matches!(self.postings.as_slice(), [only] if only.freq == 1)
    }
}
