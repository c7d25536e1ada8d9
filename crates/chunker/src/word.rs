//! Word-count chunking over whitespace-delimited tokens.

use ragchunk_core::{Chunk, ChunkingConfig, File};

use crate::traits::{validate_config, Chunker, ChunkerError};

/// Splits text into overlapping chunks of at most `chunk_size` words,
/// joined with single spaces (runs of whitespace collapse).
#[derive(Debug, Clone)]
pub struct WordChunker {
    chunk_size: usize,
    overlap: usize,
}

impl WordChunker {
    /// Create a chunker. Both parameters are in words; `overlap` must be
    /// smaller than `chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ChunkerError> {
        validate_config(chunk_size, overlap)?;
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a chunker from the process-wide defaults.
    pub fn from_config(config: &ChunkingConfig) -> Result<Self, ChunkerError> {
        Self::new(config.chunk_size, config.overlap)
    }
}

impl Chunker for WordChunker {
    fn chunk_text(&self, file: &File) -> Vec<Chunk> {
        let Some(content) = file.content.as_deref() else {
            return Vec::new();
        };

        let words: Vec<&str> = content.split_whitespace().collect();
        if words.is_empty() {
            // Content present but blank: one chunk carrying the original
            // text, not an empty list.
            return vec![Chunk {
                target_size: self.chunk_size,
                content: content.to_string(),
                index: 0,
            }];
        }

        let mut chunks = Vec::new();
        let mut start = 0usize;
        let mut chunk_index = 0usize;

        while start < words.len() {
            let end = usize::min(start + self.chunk_size, words.len());
            chunks.push(Chunk {
                target_size: self.chunk_size,
                content: words[start..end].join(" "),
                index: chunk_index,
            });

            if end == words.len() {
                break;
            }

            // `overlap < chunk_size` keeps the cursor strictly advancing.
            start = end - self.overlap;
            chunk_index += 1;
        }

        chunks
    }
}
