//! Overlapping text chunking for embedding pipelines.
//!
//! Two interchangeable strategies behind one [`Chunker`] trait:
//! [`SizeChunker`] splits by character count and snaps cut points back to
//! the nearest preceding space; [`WordChunker`] splits by whitespace-delimited
//! word count. Both emit [`ragchunk_core::Chunk`]s in production order.

mod size;
mod traits;
mod word;

pub use size::SizeChunker;
pub use traits::{Chunker, ChunkerError};
pub use word::WordChunker;
