pub mod config;
pub mod model;

pub use config::{load_dotenv, ChunkingConfig};
pub use model::{Chunk, File};
