//! Book value type and its lookup key.
//!
//! Books are compared by `(title, author)` wherever the catalog needs to
//! find or remove one; the page count is carried along but never used as
//! part of identity.

use std::fmt;

use serde::Serialize;

/// A single book in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    page_count: u32,
}

impl Book {
    /// Creates a new book.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, page_count: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            page_count,
        }
    }

    /// Returns the book title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the book author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the number of pages.
    #[must_use]
    pub const fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Returns the `(title, author)` key used for lookups.
    #[must_use]
    pub fn key(&self) -> BookKey {
        BookKey::new(&self.title, &self.author)
    }

    /// Returns `true` if this book has the same title and author as `key`.
    #[must_use]
    pub fn matches(&self, key: &BookKey) -> bool {
        self.title == key.title && self.author == key.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({} pages)",
            self.title, self.author, self.page_count
        )
    }
}

/// Identity of a book for lookup purposes: title plus author.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookKey {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
}

impl BookKey {
    /// Creates a key from a title and author.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}
