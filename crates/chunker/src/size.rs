//! Character-count chunking with word-boundary snapping.

use ragchunk_core::{Chunk, ChunkingConfig, File};

use crate::traits::{validate_config, Chunker, ChunkerError};

/// Splits text into overlapping chunks of at most `chunk_size` characters,
/// snapping each cut back to the nearest preceding space when possible.
///
/// Characters are Unicode scalar values, not bytes, so multi-byte input
/// never splits mid-scalar.
#[derive(Debug, Clone)]
pub struct SizeChunker {
    chunk_size: usize,
    overlap: usize,
}

impl SizeChunker {
    /// Create a chunker. Both parameters are in characters; `overlap` must
    /// be smaller than `chunk_size`.
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

impl Chunker for SizeChunker {
    fn chunk_text(&self, file: &File) -> Vec<Chunk> {
        let content = file.content.as_deref().unwrap_or("");
        // Nothing to chunk: absent or whitespace-only content.
        if content.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = content.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0usize;
        let mut chunk_index = 0usize;

        while start < chars.len() {
            let mut end = usize::min(start + self.chunk_size, chars.len());

            // More text remains: snap the cut back to the last space in
            // [start, end), if one exists strictly after start.
            if end < chars.len() {
                if let Some(pos) = chars[start..end].iter().rposition(|&c| c == ' ') {
                    if pos > 0 {
                        end = start + pos;
                    }
                }
            }

            let piece: String = chars[start..end].iter().collect();
            chunks.push(Chunk {
                target_size: self.chunk_size,
                content: piece.trim_end_matches(['\n', '\r']).to_string(),
                index: chunk_index,
            });

            if end >= chars.len() {
                break;
            }

            // Guardrail: boundary snapping can pull `end` far enough back
            // that subtracting the overlap would rewind the cursor. Stop
            // rather than loop without advancing.
            let new_start = end.saturating_sub(self.overlap);
            if new_start <= start {
                break;
            }

            start = new_start;
            chunk_index += 1;
        }

        chunks
    }
}
