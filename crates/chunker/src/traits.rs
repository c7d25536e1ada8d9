use ragchunk_core::{Chunk, File};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChunkerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Trait for chunking strategies (size-based, word-based, etc.)
///
/// A chunker's only state is its immutable size/overlap pair, so instances
/// are reusable across calls and safe to share between threads.
pub trait Chunker: Send + Sync {
    /// Split a file's content into overlapping chunks, in index order.
    fn chunk_text(&self, file: &File) -> Vec<Chunk>;
}

/// Construction-time validation shared by every strategy. Parameters are
/// `usize`, so non-negativity is carried by the type; the two remaining
/// preconditions get distinct messages.
pub(crate) fn validate_config(chunk_size: usize, overlap: usize) -> Result<(), ChunkerError> {
    if chunk_size == 0 {
        return Err(ChunkerError::InvalidConfiguration(
            "chunk_size must be positive".to_string(),
        ));
    }
    if overlap >= chunk_size {
        return Err(ChunkerError::InvalidConfiguration(
            "overlap must be less than chunk_size".to_string(),
        ));
    }
    Ok(())
}
