//! Shared model types at the chunking boundary.

use serde::{Deserialize, Serialize};

/// A document handed to a chunker.
///
/// Loader collaborators populate this; the chunkers only read `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// Original filename, kept for downstream attribution.
    pub name: String,
    /// Extracted text. `None` means no text was produced — distinct from
    /// an empty string.
    pub content: Option<String>,
}

impl File {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
        }
    }

    /// A file whose loader produced no text at all.
    pub fn without_content(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }
}

/// A bounded slice of a document's text, tagged with its production order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The configured size parameter in effect when this chunk was produced
    /// (characters for size chunking, words for word chunking). Records
    /// configuration, not measured length.
    pub target_size: usize,
    /// The extracted text.
    pub content: String,
    /// 0-based index within the document, in production order.
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_without_content_has_none() {
        let file = File::without_content("scan.pdf");
        assert_eq!(file.name, "scan.pdf");
        assert!(file.content.is_none());
    }

    #[test]
    fn chunk_serializes_public_fields() {
        let chunk = Chunk {
            target_size: 500,
            content: "hello world".to_string(),
            index: 3,
        };
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["target_size"], 500);
        assert_eq!(json["content"], "hello world");
        assert_eq!(json["index"], 3);
    }
}
