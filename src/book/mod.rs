use serde::{Deserialize, Serialize};

/// The entity every strategy operates on.
///
/// Fields are fixed at construction; serialization emits them in
/// declaration order (`title`, then `content`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    content: String,
}

impl Book {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The book used by the command-line driver when none is given.
    pub fn sample() -> Self {
        Self::new("Sample Book", "This is some sample content.")
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
