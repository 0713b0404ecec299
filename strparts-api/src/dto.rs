//! Data Transfer Objects for API

/// Whether a chunk carries content or is a retained delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChunkKind {
    /// Input text between boundaries
    Content,
    /// A delimiter emitted in retain mode
    Delimiter,
}

/// An owned chunk with its position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// The chunk text
    pub text: String,
    /// Character offset in the input
    pub char_offset: usize,
    /// Byte offset in the input
    pub byte_offset: usize,
    /// Content or delimiter
    pub kind: ChunkKind,
}

/// Summary of a chunking run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes in the input
    pub total_bytes: usize,
    /// Total characters in the input
    pub total_chars: usize,
    /// Number of chunks produced
    pub chunk_count: usize,
    /// Name of the policy used
    pub policy: String,
}

/// Complete output with chunks and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Chunks in input order
    pub chunks: Vec<Chunk>,
    /// Run summary
    pub metadata: Metadata,
}

impl Output {
    /// Chunk texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunks were produced
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
