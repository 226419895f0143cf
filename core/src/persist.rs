use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::IndexConfig;
use crate::error::Result;
use crate::slot::ProbeSequence;

pub const META_VERSION: u32 = 1;

/// Everything a reader needs to recompute slots and record offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaFile {
    pub version: u32,
    pub created_at: String,
    pub num_docs: u32,
    pub live_terms: usize,
    pub removed_terms: usize,
    pub postings_records: usize,
    pub hash: String,
    pub dict_record_len: usize,
    pub post_record_len: usize,
    pub map_record_len: usize,
    pub config: IndexConfig,
}

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn dict(&self) -> PathBuf { self.root.join("dict") }
    pub fn post(&self) -> PathBuf { self.root.join("post") }
    pub fn map(&self) -> PathBuf { self.root.join("map") }
    pub fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

/// The three record files, created (truncated) together.
pub struct RecordFiles {
    pub dict: File,
    pub post: File,
    pub map: File,
}

pub fn create_record_files(paths: &IndexPaths) -> Result<RecordFiles> {
    create_dir_all(&paths.root)?;
    Ok(RecordFiles {
        dict: File::create(paths.dict())?,
        post: File::create(paths.post())?,
        map: File::create(paths.map())?,
    })
}

impl MetaFile {
    pub fn save(&self, paths: &IndexPaths) -> Result<()> {
        create_dir_all(&paths.root)?;
        let mut w = BufWriter::new(File::create(paths.meta())?);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush()?;
        Ok(())
    }

    /// Entry point for a reader: everything else is derived from this file.
    pub fn load(paths: &IndexPaths) -> Result<Self> {
        let r = BufReader::new(File::open(paths.meta())?);
        Ok(serde_json::from_reader(r)?)
    }

    /// Dictionary lines to try for `term`, as byte offsets into `dict`.
    pub fn dict_offsets<'a>(&self, term: &'a str) -> impl Iterator<Item = u64> + 'a {
        let len = self.dict_record_len as u64;
        ProbeSequence::new(term, self.config.global_capacity, self.config.probe).map(move |slot| slot as u64 * len)
    }

    /// Byte offset of postings line `start` (the dictionary record's third field).
    pub fn post_offset(&self, start: u64) -> u64 {
        start * self.post_record_len as u64
    }

    pub fn map_offset(&self, doc_id: u64) -> u64 {
        doc_id * self.map_record_len as u64
    }
}
