//! Library reader identity.

use std::fmt;

use serde::Serialize;

/// A registered reader, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reader {
    name: String,
}

impl Reader {
    /// Creates a reader with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the reader's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
