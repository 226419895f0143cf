use anyhow::Result;
use clap::{Parser, ValueEnum};
use indexer::{build_index, BuildOptions};
use slotdex_core::config::{DEFAULT_DOC_CAPACITY, DEFAULT_GLOBAL_CAPACITY};
use slotdex_core::{IndexConfig, PostingValue, ProbePolicy};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum ProbeArg {
    Linear,
    Quadratic,
}

#[derive(Clone, Copy, ValueEnum)]
enum PostingsArg {
    /// Raw in-document frequency
    Raw,
    /// Integer tf-idf weight
    Weight,
}

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a fixed-width, slot-addressed inverted index from a directory of HTML files", long_about = None)]
struct Cli {
    /// Directory of documents to index
    input: PathBuf,
    /// Directory receiving dict, post, map and meta.json
    output: PathBuf,
    /// Stopword list, one per line (default: OUTPUT/stopwords.txt)
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Slots in the per-document term table
    #[arg(long, default_value_t = DEFAULT_DOC_CAPACITY)]
    doc_capacity: usize,
    /// Slots in the global index; also the number of dictionary lines
    #[arg(long, default_value_t = DEFAULT_GLOBAL_CAPACITY)]
    global_capacity: usize,
    /// Collision probe sequence
    #[arg(long, value_enum, default_value_t = ProbeArg::Linear)]
    probe: ProbeArg,
    /// Value written in the second posting field
    #[arg(long, value_enum, default_value_t = PostingsArg::Raw)]
    postings: PostingsArg,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = IndexConfig {
        doc_capacity: cli.doc_capacity,
        global_capacity: cli.global_capacity,
        probe: match cli.probe {
            ProbeArg::Linear => ProbePolicy::Linear,
            ProbeArg::Quadratic => ProbePolicy::Quadratic,
        },
        postings: match cli.postings {
            PostingsArg::Raw => PostingValue::RawFrequency,
            PostingsArg::Weight => PostingValue::Weight,
        },
    };
    if config.postings == PostingValue::Weight {
        tracing::warn!("weighted postings exceed the 4-digit field and will mostly saturate at 9999");
    }
    let options = BuildOptions { config, stopwords: cli.stopwords };
    let summary = build_index(&cli.input, &cli.output, &options)?;
    tracing::info!(summary = %serde_json::to_string(&summary)?, "index build complete");
    Ok(())
}
