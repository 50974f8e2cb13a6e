//! Named, ordered container of books.

use serde::Serialize;

use super::book::{Book, BookKey};

/// A shelf holding books in placement order.
///
/// Shelves are identified by title alone: two shelves with the same title
/// are equal regardless of their contents.
#[derive(Debug, Clone, Serialize)]
pub struct Shelf {
    title: String,
    books: Vec<Book>,
}

impl Shelf {
    /// Creates an empty shelf.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            books: Vec::new(),
        }
    }

    /// Returns the shelf title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the books on this shelf in placement order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Appends a book to the end of the shelf.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes the first book matching `key` and returns it.
    pub fn remove_book(&mut self, key: &BookKey) -> Option<Book> {
        let idx = self.books.iter().position(|b| b.matches(key))?;
        Some(self.books.remove(idx))
    }

    /// Returns the first book whose title equals `title`.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title() == title)
    }

    /// Returns the number of books on the shelf.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the shelf holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Empties the shelf, handing back every book it held.
    pub fn take_books(&mut self) -> Vec<Book> {
        std::mem::take(&mut self.books)
    }
}

impl PartialEq for Shelf {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Shelf {}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_title() {
        let mut a = Shelf::new("Fiction");
        a.add_book(Book::new("Dune", "Herbert", 412));
        let b = Shelf::new("Fiction");
        assert_eq!(a, b);
        assert_ne!(a, Shelf::new("History"));
    }

    #[test]
    fn remove_matches_title_and_author() {
        let mut shelf = Shelf::new("Fiction");
        shelf.add_book(Book::new("Dune", "Anderson", 300));
        shelf.add_book(Book::new("Dune", "Herbert", 412));

        let Some(removed) = shelf.remove_book(&BookKey::new("Dune", "Herbert")) else {
            panic!("expected a removed book");
        };
        assert_eq!(removed.author(), "Herbert");
        assert_eq!(shelf.len(), 1);
        assert_eq!(shelf.books().first().map(Book::author), Some("Anderson"));
    }

    #[test]
    fn remove_missing_is_none() {
        let mut shelf = Shelf::new("Fiction");
        assert!(shelf.remove_book(&BookKey::new("Dune", "Herbert")).is_none());
    }

    #[test]
    fn find_by_title_returns_first_match() {
        let mut shelf = Shelf::new("Fiction");
        shelf.add_book(Book::new("Dune", "Anderson", 300));
        shelf.add_book(Book::new("Dune", "Herbert", 412));
        let found = shelf.find_by_title("Dune").map(Book::author);
        assert_eq!(found, Some("Anderson"));
    }

    #[test]
    fn take_books_empties_shelf() {
        let mut shelf = Shelf::new("Fiction");
        shelf.add_book(Book::new("Dune", "Herbert", 412));
        let books = shelf.take_books();
        assert_eq!(books.len(), 1);
        assert!(shelf.is_empty());
    }
}
