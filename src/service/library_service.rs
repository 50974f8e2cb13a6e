//! Library service: orchestrates catalog operations and emits events.

use std::fmt::Write as _;

use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{LibraryOptions, PoolRetrieval, ShelfDeletePolicy};
use crate::domain::{
    Book, BookPool, Catalog, EventBus, LibraryEvent, NotificationHub, OrphanedBooks, Reader,
    Shelf, Transfer, TransferKind,
};
use crate::error::LibraryError;

/// Result of a successful placement or move.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransferOutcome {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Shelf the book now sits on.
    pub shelf: String,
    /// Transfer variant that ran.
    pub transfer: TransferKind,
    /// Notification text sent to subscribers.
    pub message: String,
    /// Number of readers the notification reached.
    pub notified: usize,
}

/// Orchestration layer for all catalog operations.
///
/// Owns the [`Catalog`], the unplaced-book [`BookPool`] and the reader
/// [`NotificationHub`], and holds a handle to the [`EventBus`]. Every
/// mutation method follows the pattern: resolve names → mutate → notify
/// subscribers → publish event → return result. All resolution happens
/// before the first mutation, so a failed call leaves state untouched.
#[derive(Debug)]
pub struct LibraryService {
    catalog: Catalog,
    pool: BookPool,
    hub: NotificationHub,
    event_bus: EventBus,
    options: LibraryOptions,
}

impl LibraryService {
    /// Creates a new `LibraryService` from its collaborators.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        pool: BookPool,
        hub: NotificationHub,
        event_bus: EventBus,
        options: LibraryOptions,
    ) -> Self {
        Self {
            catalog,
            pool,
            hub,
            event_bus,
            options,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a reference to the unplaced-book pool.
    #[must_use]
    pub fn pool(&self) -> &BookPool {
        &self.pool
    }

    // ── Shelves ─────────────────────────────────────────────────────────

    /// Creates an empty shelf and announces it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidRequest`] for a blank title or
    /// [`LibraryError::ShelfExists`] if the title is taken.
    pub fn create_shelf(&mut self, title: &str) -> Result<(), LibraryError> {
        require_non_blank("shelf title", title)?;
        self.catalog.add_shelf(Shelf::new(title))?;

        self.emit(LibraryEvent::ShelfCreated {
            shelf: title.to_string(),
            timestamp: Utc::now(),
        });

        tracing::info!(shelf = title, "shelf created");
        Ok(())
    }

    /// Returns every shelf in creation order.
    #[must_use]
    pub fn shelves(&self) -> &[Shelf] {
        self.catalog.shelves()
    }

    /// Returns the shelf with this title.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfNotFound`] if no shelf has this title.
    pub fn shelf(&self, title: &str) -> Result<&Shelf, LibraryError> {
        self.catalog.shelf(title)
    }

    /// Renders every shelf and its books as text, one shelf per block.
    #[must_use]
    pub fn display_shelves(&self) -> String {
        let mut out = String::new();
        for shelf in self.catalog.shelves() {
            render_shelf(&mut out, shelf);
        }
        out
    }

    /// Renders a single shelf and its books as text.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfNotFound`] if no shelf has this title.
    pub fn display_shelf(&self, title: &str) -> Result<String, LibraryError> {
        let shelf = self.catalog.shelf(title)?;
        let mut out = String::new();
        render_shelf(&mut out, shelf);
        Ok(out)
    }

    /// Deletes a shelf. Its books are returned to the pool or discarded
    /// according to the configured [`ShelfDeletePolicy`].
    ///
    /// Returns the number of books that were on the shelf.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfNotFound`] if no shelf has this title.
    pub fn delete_shelf(&mut self, title: &str) -> Result<usize, LibraryError> {
        let mut shelf = self.catalog.remove_shelf(title)?;
        let books = shelf.take_books();
        let book_count = books.len();

        let fate = match self.options.shelf_delete_policy {
            ShelfDeletePolicy::ReturnToPool => {
                for book in books {
                    self.pool.return_book(book);
                }
                OrphanedBooks::ReturnedToPool
            }
            ShelfDeletePolicy::Discard => OrphanedBooks::Discarded,
        };

        self.emit(LibraryEvent::ShelfDeleted {
            shelf: title.to_string(),
            book_count,
            books: fate,
            timestamp: Utc::now(),
        });

        tracing::info!(shelf = title, book_count, books = ?fate, "shelf deleted");
        Ok(book_count)
    }

    // ── Books ───────────────────────────────────────────────────────────

    /// Creates a book and puts it in the unplaced-book pool.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidRequest`] for a blank title or author.
    pub fn create_book(
        &mut self,
        title: &str,
        author: &str,
        page_count: u32,
    ) -> Result<(), LibraryError> {
        require_non_blank("book title", title)?;
        require_non_blank("book author", author)?;
        self.pool.return_book(Book::new(title, author, page_count));

        self.emit(LibraryEvent::BookCreated {
            title: title.to_string(),
            author: author.to_string(),
            page_count,
            timestamp: Utc::now(),
        });

        tracing::info!(title, author, page_count, "book created");
        Ok(())
    }

    /// Returns pooled books in queue order.
    pub fn pool_books(&self) -> impl Iterator<Item = &Book> {
        self.pool.iter()
    }

    /// Takes the book titled `book_title` out of the pool and places it on
    /// the shelf titled `shelf_title`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfNotFound`] if the shelf does not exist,
    /// [`LibraryError::BookNotFound`] if no pooled book has the title, or
    /// [`LibraryError::PoolEmpty`] if retrieval exhausts the pool.
    pub fn place_book(
        &mut self,
        book_title: &str,
        shelf_title: &str,
    ) -> Result<TransferOutcome, LibraryError> {
        let destination = self.catalog.shelf_index(shelf_title)?;
        if !self.pool.contains(book_title) {
            return Err(LibraryError::BookNotFound(book_title.to_string()));
        }

        let book = match self.options.pool_retrieval {
            PoolRetrieval::Direct => self
                .pool
                .take_by_title(book_title)
                .ok_or(LibraryError::PoolEmpty)?,
            PoolRetrieval::Requeue => self.pool.take_by_title_requeue(book_title)?,
        };

        let transfer = Transfer::FromPool(book);
        let kind = transfer.kind();
        let placed = transfer.execute(self.catalog.shelves_mut(), destination)?;

        let mut outcome = TransferOutcome {
            title: placed.title().to_string(),
            author: placed.author().to_string(),
            shelf: shelf_title.to_string(),
            transfer: kind,
            message: String::new(),
            notified: 0,
        };
        let event = LibraryEvent::BookPlaced {
            title: outcome.title.clone(),
            author: outcome.author.clone(),
            shelf: outcome.shelf.clone(),
            transfer: kind,
            timestamp: Utc::now(),
        };
        let (message, notified) = self.emit(event);
        outcome.message = message.unwrap_or_default();
        outcome.notified = notified;

        tracing::info!(
            title = book_title,
            shelf = shelf_title,
            transfer = ?kind,
            notified = outcome.notified,
            "book placed"
        );
        Ok(outcome)
    }

    /// Moves the first book titled `book_title` from the source shelf to
    /// the destination shelf.
    ///
    /// Source and destination may be the same shelf, in which case the
    /// book is moved to the end of that shelf.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelvesNotFound`] if either shelf is missing
    /// or [`LibraryError::BookNotFound`] if the source shelf has no book
    /// with that title.
    pub fn move_book(
        &mut self,
        book_title: &str,
        source_title: &str,
        destination_title: &str,
    ) -> Result<TransferOutcome, LibraryError> {
        let (source, destination) = self
            .catalog
            .resolve_pair(source_title, destination_title)?;

        let key = self
            .catalog
            .shelves()
            .get(source)
            .and_then(|shelf| shelf.find_by_title(book_title))
            .map(Book::key)
            .ok_or_else(|| LibraryError::BookNotFound(book_title.to_string()))?;

        let transfer = Transfer::ShelfToShelf { key, source };
        let kind = transfer.kind();
        let moved = transfer.execute(self.catalog.shelves_mut(), destination)?;

        let mut outcome = TransferOutcome {
            title: moved.title().to_string(),
            author: moved.author().to_string(),
            shelf: destination_title.to_string(),
            transfer: kind,
            message: String::new(),
            notified: 0,
        };
        let event = LibraryEvent::BookMoved {
            title: outcome.title.clone(),
            author: outcome.author.clone(),
            source: source_title.to_string(),
            destination: outcome.shelf.clone(),
            transfer: kind,
            timestamp: Utc::now(),
        };
        let (message, notified) = self.emit(event);
        outcome.message = message.unwrap_or_default();
        outcome.notified = notified;

        tracing::info!(
            title = book_title,
            source = source_title,
            destination = destination_title,
            transfer = ?kind,
            notified = outcome.notified,
            "book moved"
        );
        Ok(outcome)
    }

    // ── Readers ─────────────────────────────────────────────────────────

    /// Registers a reader. Reader creation is not announced to subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidRequest`] for a blank name or
    /// [`LibraryError::ReaderExists`] if the name is taken.
    pub fn create_reader(&mut self, name: &str) -> Result<(), LibraryError> {
        require_non_blank("reader name", name)?;
        self.catalog.add_reader(Reader::new(name))?;

        self.emit(LibraryEvent::ReaderCreated {
            reader: name.to_string(),
            timestamp: Utc::now(),
        });

        tracing::info!(reader = name, "reader created");
        Ok(())
    }

    /// Returns every reader in registration order.
    #[must_use]
    pub fn readers(&self) -> &[Reader] {
        self.catalog.readers()
    }

    /// Returns the reader with this name.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn reader(&self, name: &str) -> Result<&Reader, LibraryError> {
        self.catalog.reader(name)
    }

    /// Returns the most recent messages delivered to a reader, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn inbox(&self, name: &str) -> Result<Vec<String>, LibraryError> {
        let reader = self.catalog.reader(name)?;
        Ok(self.hub.inbox(reader.name()))
    }

    /// Returns `true` if the reader is currently subscribed.
    #[must_use]
    pub fn is_subscribed(&self, name: &str) -> bool {
        self.hub.is_subscribed(name)
    }

    /// Renders every reader as text, one per line.
    #[must_use]
    pub fn display_readers(&self) -> String {
        let mut out = String::new();
        for reader in self.catalog.readers() {
            self.render_reader(&mut out, reader);
        }
        out
    }

    /// Renders a single reader as text.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn display_reader(&self, name: &str) -> Result<String, LibraryError> {
        let reader = self.catalog.reader(name)?;
        let mut out = String::new();
        self.render_reader(&mut out, reader);
        Ok(out)
    }

    /// Deletes a reader, dropping their subscription and inbox.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn delete_reader(&mut self, name: &str) -> Result<(), LibraryError> {
        let reader = self.catalog.remove_reader(name)?;
        self.hub.forget(reader.name());

        self.emit(LibraryEvent::ReaderDeleted {
            reader: name.to_string(),
            timestamp: Utc::now(),
        });

        tracing::info!(reader = name, "reader deleted");
        Ok(())
    }

    /// Subscribes a reader to notifications.
    ///
    /// Returns `false` if the reader was already subscribed.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn subscribe(&mut self, name: &str) -> Result<bool, LibraryError> {
        let reader = self.catalog.reader(name)?;
        let added = self.hub.subscribe(reader);

        if added {
            self.emit(LibraryEvent::ReaderSubscribed {
                reader: name.to_string(),
                timestamp: Utc::now(),
            });
            tracing::info!(reader = name, "reader subscribed");
        }
        Ok(added)
    }

    /// Unsubscribes a reader from notifications.
    ///
    /// Returns `false` if the reader was not subscribed.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn unsubscribe(&mut self, name: &str) -> Result<bool, LibraryError> {
        let reader = self.catalog.reader(name)?;
        let removed = self.hub.unsubscribe(reader);

        if removed {
            self.emit(LibraryEvent::ReaderUnsubscribed {
                reader: name.to_string(),
                timestamp: Utc::now(),
            });
            tracing::info!(reader = name, "reader unsubscribed");
        }
        Ok(removed)
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Delivers the event's message to subscribers (if it has one) and
    /// broadcasts the event on the bus. Returns the rendered message and the
    /// number of readers notified.
    fn emit(&mut self, event: LibraryEvent) -> (Option<String>, usize) {
        let message = event.message();
        let notified = message
            .as_deref()
            .map_or(0, |message| self.hub.notify(message));
        let _ = self.event_bus.publish(event);
        (message, notified)
    }

    fn render_reader(&self, out: &mut String, reader: &Reader) {
        let status = if self.hub.is_subscribed(reader.name()) {
            "subscribed"
        } else {
            "not subscribed"
        };
        let _ = writeln!(out, "{reader} ({status})");
    }
}

fn render_shelf(out: &mut String, shelf: &Shelf) {
    let _ = writeln!(out, "Shelf \"{}\":", shelf.title());
    if shelf.is_empty() {
        let _ = writeln!(out, "  (empty)");
    }
    for book in shelf.books() {
        let _ = writeln!(out, "  {book}");
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), LibraryError> {
    if value.trim().is_empty() {
        return Err(LibraryError::InvalidRequest(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
