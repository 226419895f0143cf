//! Latin-1 (ISO-8859-1) conversion. Every byte maps to the code point of the
//! same value, so decoding never fails.

pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Chars above U+00FF become `?`.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars().map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?')).collect()
}
