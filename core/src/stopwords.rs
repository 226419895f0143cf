use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::latin1;

/// Terms excluded from indexing. Read-only once loaded.
#[derive(Debug, Default, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// One stopword per line. Line terminators are stripped, nothing else is.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|l| l.as_ref().trim_end_matches(['\n', '\r']).to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Latin-1 reader, matching how documents are decoded.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = latin1::decode(&bytes);
        Ok(Self::from_lines(text.lines()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let set = Self::from_reader(BufReader::new(File::open(path)?))?;
        tracing::debug!(stopwords = set.len(), "loaded stopwords");
        Ok(set)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
