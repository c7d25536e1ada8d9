//! Environment-driven chunking defaults.

use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Default chunk size when `CHUNK_SIZE` is unset (characters or words,
/// depending on strategy).
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap when `CHUNK_OVERLAP` is unset.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Process-wide chunking defaults, read from the environment.
///
/// The config carries no validation — a chunker validates its own
/// parameters at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target units per chunk.
    pub chunk_size: usize,
    /// Trailing units repeated at the start of the next chunk.
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ChunkingConfig {
    /// Build config from `CHUNK_SIZE` / `CHUNK_OVERLAP` env vars (call
    /// `load_dotenv()` first). Missing or unparseable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self {
            chunk_size: env_usize("CHUNK_SIZE", DEFAULT_CHUNK_SIZE),
            overlap: env_usize("CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP),
        }
    }
}
