pub mod builder;
pub mod config;
pub mod doc_table;
pub mod error;
pub mod global_index;
pub mod index;
pub mod latin1;
pub mod persist;
pub mod records;
pub mod serializer;
pub mod slot;
pub mod stopwords;
pub mod tokenizer;
pub mod weight;

pub use builder::IndexBuilder;
pub use config::{IndexConfig, PostingValue};
pub use doc_table::DocumentTermTable;
pub use error::{IndexError, Result};
pub use global_index::GlobalTermIndex;
pub use index::{DocId, DocMeta, Posting, TermEntry};
pub use serializer::{IndexSerializer, SerializeStats};
pub use slot::ProbePolicy;
pub use stopwords::StopwordSet;
