use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};
use crate::slot::ProbePolicy;

/// Slots in the per-document table. Sized well above a single page's vocabulary.
pub const DEFAULT_DOC_CAPACITY: usize = 50_000;
/// Slots in the global table, and therefore lines in the dictionary file.
pub const DEFAULT_GLOBAL_CAPACITY: usize = 350_000;

/// What the second field of a posting record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingValue {
    /// Raw in-document term frequency.
    #[default]
    RawFrequency,
    /// Integer tf-idf weight from [`crate::weight::tf_idf_weight`]. Saturates the
    /// 4-digit field for almost every posting.
    Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    pub doc_capacity: usize,
    pub global_capacity: usize,
    pub probe: ProbePolicy,
    pub postings: PostingValue,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            doc_capacity: DEFAULT_DOC_CAPACITY,
            global_capacity: DEFAULT_GLOBAL_CAPACITY,
            probe: ProbePolicy::default(),
            postings: PostingValue::default(),
        }
    }
}

impl IndexConfig {
    pub fn validate(&self) -> Result<()> {
        if self.doc_capacity == 0 {
            return Err(IndexError::InvalidCapacity { table: "document term table", capacity: 0 });
        }
        if self.global_capacity == 0 {
            return Err(IndexError::InvalidCapacity { table: "global term index", capacity: 0 });
        }
        Ok(())
    }
}
