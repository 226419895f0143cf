use std::io::{BufWriter, Write};

use crate::config::PostingValue;
use crate::error::Result;
use crate::global_index::GlobalTermIndex;
use crate::index::{DocMeta, TermEntry};
use crate::persist::{create_record_files, IndexPaths};
use crate::records::{dict_record, map_record, post_record, sentinel_record, write_record, NULL, REMOVED};
use crate::weight::tf_idf_weight;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SerializeStats {
    pub live_terms: usize,
    pub removed_terms: usize,
    pub empty_slots: usize,
    pub postings_records: usize,
    pub documents: usize,
}

/// Writes a finished index as dictionary, postings and document map records.
///
/// Dictionary lines follow slot order, one per slot. Pruned terms and empty
/// slots keep their line as a sentinel but emit no postings, so each live
/// term's `start` is the postings line where its block begins.
pub struct IndexSerializer<'a> {
    index: &'a GlobalTermIndex,
    docs: &'a [DocMeta],
    postings: PostingValue,
}

impl<'a> IndexSerializer<'a> {
    pub fn new(index: &'a GlobalTermIndex, docs: &'a [DocMeta], postings: PostingValue) -> Self {
        Self { index, docs, postings }
    }

    pub fn write<D: Write, P: Write, M: Write>(&self, mut dict: D, mut post: P, mut map: M) -> Result<SerializeStats> {
        let mut stats = SerializeStats::default();
        let mut post_line: i64 = 0;

        for (_, slot) in self.index.slots() {
            match slot {
                None => {
                    write_record(&mut dict, &sentinel_record(NULL))?;
                    stats.empty_slots += 1;
                }
                Some(entry) if entry.is_prunable() => {
                    write_record(&mut dict, &sentinel_record(REMOVED))?;
                    stats.removed_terms += 1;
                }
                Some(entry) => {
                    write_record(&mut dict, &dict_record(&entry.term, entry.num_docs() as i64, post_line))?;
                    for posting in &entry.postings {
                        let value = self.posting_value(entry, posting.doc_id, posting.freq);
                        write_record(&mut post, &post_record(i64::from(posting.doc_id), value))?;
                        post_line += 1;
                    }
                    stats.live_terms += 1;
                }
            }
        }
        stats.postings_records = post_line as usize;

        for doc in self.docs {
            write_record(&mut map, &map_record(&doc.name))?;
        }
        stats.documents = self.docs.len();

        dict.flush()?;
        post.flush()?;
        map.flush()?;
        Ok(stats)
    }

    pub fn write_files(&self, paths: &IndexPaths) -> Result<SerializeStats> {
        let files = create_record_files(paths)?;
        let stats = self.write(BufWriter::new(files.dict), BufWriter::new(files.post), BufWriter::new(files.map))?;
        tracing::info!(
            live = stats.live_terms,
            removed = stats.removed_terms,
            postings = stats.postings_records,
            root = %paths.root.display(),
            "wrote index records"
        );
        Ok(stats)
    }

    fn posting_value(&self, entry: &TermEntry, doc_id: u32, freq: u32) -> i64 {
        match self.postings {
            PostingValue::RawFrequency => i64::from(freq),
            PostingValue::Weight => {
                let doc_tokens = self.docs.get(doc_id as usize).map_or(0, |d| d.token_count);
                let weight = tf_idf_weight(freq, doc_tokens, self.docs.len() as u32, entry.num_docs() as u32);
                i64::try_from(weight).unwrap_or(i64::MAX)
            }
        }
    }
}
