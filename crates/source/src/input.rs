use serde::{Deserialize, Serialize};

/// Leaf-source format that the size resolver can expand with glob patterns.
pub const FILES_FORMAT: &str = "files";

/// One physical input location addressed by a path pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeafSource {
    /// Glob-style path pattern for the objects backing this source.
    pub pattern: String,
    /// Source format tag; only [`FILES_FORMAT`] is glob-addressable.
    pub format: String,
}

impl LeafSource {
    pub fn is_files(&self) -> bool {
        self.format.eq_ignore_ascii_case(FILES_FORMAT)
    }
}

/// A job step's input: a single pattern-addressed source or an arbitrarily
/// nested union of sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputSource {
    Leaf(LeafSource),
    Composite(Vec<InputSource>),
}

impl InputSource {
    /// Glob-addressable leaf over `pattern`.
    pub fn files(pattern: impl Into<String>) -> Self {
        InputSource::Leaf(LeafSource {
            pattern: pattern.into(),
            format: FILES_FORMAT.to_string(),
        })
    }

    /// Leaf with an explicit format tag.
    pub fn leaf(pattern: impl Into<String>, format: impl Into<String>) -> Self {
        InputSource::Leaf(LeafSource {
            pattern: pattern.into(),
            format: format.into(),
        })
    }

    /// Ordered union of child sources.
    pub fn composite(children: Vec<InputSource>) -> Self {
        InputSource::Composite(children)
    }
}
