//! Holding area for books that have not been placed on any shelf.
//!
//! The pool is insertion-ordered. Two retrieval paths exist:
//! [`BookPool::take_by_title`] removes the match directly, while
//! [`BookPool::take_by_title_requeue`] cycles books through the front of
//! the queue until the match surfaces. Which one the service uses is
//! selected by [`crate::config::PoolRetrieval`].

use std::collections::VecDeque;

use super::book::Book;
use crate::error::LibraryError;

/// Queue of unplaced books.
#[derive(Debug, Default)]
pub struct BookPool {
    books: VecDeque<Book>,
}

impl BookPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if some book in the pool has this title.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.books.iter().any(|b| b.title() == title)
    }

    /// Removes and returns the next book in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::PoolEmpty`] if the pool holds no books.
    pub fn get_book(&mut self) -> Result<Book, LibraryError> {
        self.books.pop_front().ok_or(LibraryError::PoolEmpty)
    }

    /// Appends a book to the back of the pool.
    pub fn return_book(&mut self, book: Book) {
        self.books.push_back(book);
    }

    /// Removes the first book (in insertion order) with this title.
    ///
    /// The remaining books keep their relative order.
    pub fn take_by_title(&mut self, title: &str) -> Option<Book> {
        let idx = self.books.iter().position(|b| b.title() == title)?;
        self.books.remove(idx)
    }

    /// Dequeues books, re-enqueueing the ones that don't match, until a
    /// book with this title comes off the front.
    ///
    /// Books scanned before the match end up behind the books that were
    /// never visited. At most one full rotation is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::PoolEmpty`] if the pool runs dry or a full
    /// rotation passes without a match.
    pub fn take_by_title_requeue(&mut self, title: &str) -> Result<Book, LibraryError> {
        for _ in 0..self.books.len() {
            let book = self.get_book()?;
            if book.title() == title {
                return Ok(book);
            }
            self.return_book(book);
        }
        Err(LibraryError::PoolEmpty)
    }

    /// Iterates over pooled books in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Returns the number of pooled books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
