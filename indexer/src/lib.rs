use anyhow::{bail, Context, Result};
use slotdex_core::latin1;
use slotdex_core::persist::{IndexPaths, MetaFile, META_VERSION};
use slotdex_core::records::{DICT_RECORD_LEN, MAP_RECORD_LEN, POST_RECORD_LEN};
use slotdex_core::slot::HASH_NAME;
use slotdex_core::tokenizer::HtmlLexer;
use slotdex_core::{IndexBuilder, IndexConfig, StopwordSet};
use serde::Serialize;
use walkdir::WalkDir;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub config: IndexConfig,
    /// Defaults to `<output>/stopwords.txt`.
    pub stopwords: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub documents: usize,
    pub skipped: usize,
    pub live_terms: usize,
    pub removed_terms: usize,
    pub postings_records: usize,
}

pub fn build_index(input: &Path, output: &Path, options: &BuildOptions) -> Result<BuildSummary> {
    if !input.is_dir() {
        bail!("invalid input path: {}", input.display());
    }
    if !output.is_dir() {
        bail!("invalid output path: {}", output.display());
    }
    let stop_path = options.stopwords.clone().unwrap_or_else(|| output.join("stopwords.txt"));
    let stopwords = StopwordSet::load(&stop_path)
        .with_context(|| format!("reading stopwords from {}", stop_path.display()))?;
    let mut builder = IndexBuilder::new(options.config.clone(), stopwords)?;

    let lexer = HtmlLexer::new();
    for entry in WalkDir::new(input).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let name = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                builder.skip_document(&name, &e);
                continue;
            }
        };
        // follows symlinks; a dangling link falls through to the read and is skipped there
        if entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let bytes = match fs::read(entry.path()) {
            Ok(b) => b,
            Err(e) => {
                builder.skip_document(&name, &e);
                continue;
            }
        };
        let text = latin1::decode(&bytes);
        builder.add_document(name, lexer.tokens(&text))?;
    }
    tracing::info!(
        num_docs = builder.documents().len(),
        skipped = builder.skipped(),
        num_terms = builder.index().len(),
        "ingested documents"
    );

    let paths = IndexPaths::new(output);
    let stats = builder.serializer().write_files(&paths).context("writing index records")?;

    let meta = MetaFile {
        version: META_VERSION,
        created_at: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into()),
        num_docs: builder.documents().len() as u32,
        live_terms: stats.live_terms,
        removed_terms: stats.removed_terms,
        postings_records: stats.postings_records,
        hash: HASH_NAME.to_string(),
        dict_record_len: DICT_RECORD_LEN,
        post_record_len: POST_RECORD_LEN,
        map_record_len: MAP_RECORD_LEN,
        config: builder.config().clone(),
    };
    meta.save(&paths)?;

    Ok(BuildSummary {
        documents: stats.documents,
        skipped: builder.skipped(),
        live_terms: stats.live_terms,
        removed_terms: stats.removed_terms,
        postings_records: stats.postings_records,
    })
}
