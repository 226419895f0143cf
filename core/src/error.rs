use thiserror::Error;

use crate::DocId;

/// Errors raised while building or writing a slot-addressed index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("{table} is full: no free slot among {capacity} positions")]
    TableFull { table: &'static str, capacity: usize },

    #[error("term {term:?} flushed for doc {doc_id} after doc {last}; flushes must use ascending doc ids")]
    OutOfOrderFlush { term: String, doc_id: DocId, last: DocId },

    #[error("invalid capacity for {table}: {capacity}")]
    InvalidCapacity { table: &'static str, capacity: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
