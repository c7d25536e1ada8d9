//! ragchunk — split a text file into overlapping chunks for embedding.
//!
//! Reads a file, runs the selected chunking strategy over it, and prints
//! one JSON object per chunk to stdout. Defaults for size and overlap come
//! from `CHUNK_SIZE` / `CHUNK_OVERLAP` (see `.env`), overridable per run.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use ragchunk_chunker::{Chunker, SizeChunker, WordChunker};
use ragchunk_core::{load_dotenv, ChunkingConfig, File};

// ── CLI ─────────────────────────────────────────────────────────────

/// Split a text file into overlapping chunks for embedding.
#[derive(Parser, Debug)]
#[command(name = "ragchunk", version, about)]
struct Cli {
    /// Path to the text file to chunk.
    path: PathBuf,

    /// Chunking strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Size)]
    strategy: Strategy,

    /// Target units per chunk (characters for size, words for word).
    /// Falls back to CHUNK_SIZE from the environment.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Overlap units between adjacent chunks. Falls back to CHUNK_OVERLAP.
    #[arg(long)]
    overlap: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Character count with word-boundary snapping.
    Size,
    /// Whitespace-delimited word count.
    Word,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    load_dotenv();
    let cli = Cli::parse();

    let mut config = ChunkingConfig::from_env();
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(overlap) = cli.overlap {
        config.overlap = overlap;
    }

    let chunker: Box<dyn Chunker> = match cli.strategy {
        Strategy::Size => Box::new(SizeChunker::from_config(&config)?),
        Strategy::Word => Box::new(WordChunker::from_config(&config)?),
    };

    let bytes = std::fs::read(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let name = cli
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.path.display().to_string());
    let file = File::new(name, String::from_utf8_lossy(&bytes).into_owned());

    let chunks = chunker.chunk_text(&file);
    info!(
        file = %file.name,
        chunks = chunks.len(),
        chunk_size = config.chunk_size,
        overlap = config.overlap,
        "chunked document"
    );

    for chunk in &chunks {
        println!("{}", serde_json::to_string(chunk)?);
    }

    Ok(())
}
