use std::fmt::Display;

use crate::config::IndexConfig;
use crate::doc_table::DocumentTermTable;
use crate::error::Result;
use crate::global_index::GlobalTermIndex;
use crate::index::{DocId, DocMeta};
use crate::serializer::IndexSerializer;
use crate::stopwords::StopwordSet;

/// Runs documents through the per-document table into the global index.
///
/// Doc ids are handed out in call order starting at 0. A skipped document does
/// not take an id and gets no map record.
pub struct IndexBuilder {
    config: IndexConfig,
    stopwords: StopwordSet,
    doc_table: DocumentTermTable,
    index: GlobalTermIndex,
    docs: Vec<DocMeta>,
    skipped: usize,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig, stopwords: StopwordSet) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            doc_table: DocumentTermTable::new(config.doc_capacity, config.probe),
            index: GlobalTermIndex::new(config.global_capacity, config.probe),
            docs: Vec::new(),
            skipped: 0,
            config,
            stopwords,
        })
    }

    /// Counts the accepted tokens of one document and merges them into the
    /// global index. Tokens of one character or in the stopword set are dropped.
    pub fn add_document<N, I, S>(&mut self, name: N, tokens: I) -> Result<DocId>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doc_id = self.docs.len() as DocId;
        let counted = self.count_tokens(tokens);
        let flushed = counted.and_then(|token_count| {
            self.index.flush(doc_id, self.doc_table.entries())?;
            Ok(token_count)
        });
        self.doc_table.reset();
        let token_count = flushed?;

        let name = name.into();
        tracing::debug!(doc_id, name = %name, tokens = token_count, "indexed document");
        self.docs.push(DocMeta { doc_id, name, token_count });
        Ok(doc_id)
    }

    fn count_tokens<I, S>(&mut self, tokens: I) -> Result<u32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = 0u32;
        for token in tokens {
            let term = token.as_ref();
            if term.chars().count() <= 1 || self.stopwords.contains(term) {
                continue;
            }
            self.doc_table.increment(term)?;
            accepted += 1;
        }
        Ok(accepted)
    }

    pub fn skip_document(&mut self, name: &str, reason: &dyn Display) {
        self.skipped += 1;
        tracing::warn!(name, error = %reason, "skipping unreadable document");
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn index(&self) -> &GlobalTermIndex {
        &self.index
    }

    pub fn documents(&self) -> &[DocMeta] {
        &self.docs
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn serializer(&self) -> IndexSerializer<'_> {
        IndexSerializer::new(&self.index, &self.docs, self.config.postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use crate::index::Posting;

    fn small_config() -> IndexConfig {
        IndexConfig { doc_capacity: 64, global_capacity: 128, ..IndexConfig::default() }
    }

    #[test]
    fn short_tokens_and_stopwords_are_not_counted() {
        let mut builder = IndexBuilder::new(small_config(), StopwordSet::from_lines(["the"])).unwrap();
        builder.add_document("a.html", ["the", "a", "cat", "x", "cat", "mat"]).unwrap();
        let doc = &builder.documents()[0];
        assert_eq!(doc.token_count, 3);
        let (_, cat) = builder.index().lookup("cat").unwrap();
        assert_eq!(cat.postings, vec![Posting { doc_id: 0, freq: 2 }]);
        assert!(builder.index().lookup("the").is_none());
        assert!(builder.index().lookup("a").is_none());
    }

    #[test]
    fn doc_ids_are_sequential_and_skips_do_not_consume_them() {
        let mut builder = IndexBuilder::new(small_config(), StopwordSet::empty()).unwrap();
        assert_eq!(builder.add_document("a", ["alpha"]).unwrap(), 0);
        builder.skip_document("b", &"permission denied");
        assert_eq!(builder.add_document("c", ["alpha"]).unwrap(), 1);
        assert_eq!(builder.skipped(), 1);
        let names: Vec<&str> = builder.documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn empty_document_still_gets_a_map_entry() {
        let mut builder = IndexBuilder::new(small_config(), StopwordSet::empty()).unwrap();
        builder.add_document("blank", Vec::<String>::new()).unwrap();
        assert_eq!(builder.documents()[0].token_count, 0);
        assert!(builder.index().is_empty());
    }

    #[test]
    fn document_table_overflow_is_fatal_and_leaves_table_clean() {
        let config = IndexConfig { doc_capacity: 2, ..small_config() };
        let mut builder = IndexBuilder::new(config, StopwordSet::empty()).unwrap();
        let err = builder.add_document("big", ["aa", "bb", "cc"]).unwrap_err();
        assert!(matches!(err, IndexError::TableFull { capacity: 2, .. }));
        assert!(builder.documents().is_empty());
        assert_eq!(builder.add_document("ok", ["aa"]).unwrap(), 0);
    }

    #[test]
    fn global_overflow_rolls_back_the_whole_document() {
        let config = IndexConfig { global_capacity: 2, ..small_config() };
        let mut builder = IndexBuilder::new(config, StopwordSet::empty()).unwrap();
        builder.add_document("a", ["aa"]).unwrap();
        let err = builder.add_document("b", ["bb", "cc", "dd"]).unwrap_err();
        assert!(matches!(err, IndexError::TableFull { capacity: 2, .. }));

        assert_eq!(builder.documents().len(), 1);
        assert_eq!(builder.index().len(), 1);
        for term in ["bb", "cc", "dd"] {
            assert!(builder.index().lookup(term).is_none());
        }
        assert_eq!(builder.add_document("c", ["aa", "bb"]).unwrap(), 1);
        let (_, bb) = builder.index().lookup("bb").unwrap();
        assert_eq!(bb.postings, vec![Posting { doc_id: 1, freq: 1 }]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = IndexConfig { doc_capacity: 0, ..IndexConfig::default() };
        assert!(IndexBuilder::new(config, StopwordSet::empty()).is_err());
    }
}
