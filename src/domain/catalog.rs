//! Owning registry of shelves and readers.
//!
//! [`Catalog`] keeps both collections in creation order so listings are
//! stable. Shelves are unique by title and readers by name; all lookups
//! are exact string matches.

use super::reader::Reader;
use super::shelf::Shelf;
use crate::error::LibraryError;

/// Registry owning every [`Shelf`] and [`Reader`].
#[derive(Debug, Default)]
pub struct Catalog {
    shelves: Vec<Shelf>,
    readers: Vec<Reader>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new shelf.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfExists`] if a shelf with the same title
    /// is already registered.
    pub fn add_shelf(&mut self, shelf: Shelf) -> Result<(), LibraryError> {
        if self.shelves.contains(&shelf) {
            return Err(LibraryError::ShelfExists(shelf.title().to_string()));
        }
        self.shelves.push(shelf);
        Ok(())
    }

    /// Returns all shelves in creation order.
    #[must_use]
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Mutable access to all shelves, for transfers addressed by index.
    pub fn shelves_mut(&mut self) -> &mut [Shelf] {
        &mut self.shelves
    }

    /// Looks up a shelf by title.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfNotFound`] if no shelf has this title.
    pub fn shelf(&self, title: &str) -> Result<&Shelf, LibraryError> {
        self.shelves
            .iter()
            .find(|s| s.title() == title)
            .ok_or_else(|| LibraryError::ShelfNotFound(title.to_string()))
    }

    /// Returns the position of the shelf with this title.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfNotFound`] if no shelf has this title.
    pub fn shelf_index(&self, title: &str) -> Result<usize, LibraryError> {
        self.shelves
            .iter()
            .position(|s| s.title() == title)
            .ok_or_else(|| LibraryError::ShelfNotFound(title.to_string()))
    }

    /// Resolves a source and destination shelf in a single pass, stopping
    /// as soon as both are found. Both titles may name the same shelf.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelvesNotFound`] if either title is unknown.
    pub fn resolve_pair(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<(usize, usize), LibraryError> {
        let mut source_idx = None;
        let mut destination_idx = None;
        for (idx, shelf) in self.shelves.iter().enumerate() {
            if shelf.title() == source {
                source_idx = Some(idx);
            }
            if shelf.title() == destination {
                destination_idx = Some(idx);
            }
            if source_idx.is_some() && destination_idx.is_some() {
                break;
            }
        }
        match (source_idx, destination_idx) {
            (Some(s), Some(d)) => Ok((s, d)),
            _ => Err(LibraryError::ShelvesNotFound {
                source_shelf: source.to_string(),
                destination_shelf: destination.to_string(),
            }),
        }
    }

    /// Removes a shelf, returning it with its books still on it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ShelfNotFound`] if no shelf has this title.
    pub fn remove_shelf(&mut self, title: &str) -> Result<Shelf, LibraryError> {
        let idx = self.shelf_index(title)?;
        Ok(self.shelves.remove(idx))
    }

    /// Registers a new reader.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderExists`] if the name is taken.
    pub fn add_reader(&mut self, reader: Reader) -> Result<(), LibraryError> {
        if self.readers.contains(&reader) {
            return Err(LibraryError::ReaderExists(reader.name().to_string()));
        }
        self.readers.push(reader);
        Ok(())
    }

    /// Returns all readers in registration order.
    #[must_use]
    pub fn readers(&self) -> &[Reader] {
        &self.readers
    }

    /// Looks up a reader by name.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn reader(&self, name: &str) -> Result<&Reader, LibraryError> {
        self.readers
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| LibraryError::ReaderNotFound(name.to_string()))
    }

    /// Removes a reader by name.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReaderNotFound`] if no reader has this name.
    pub fn remove_reader(&mut self, name: &str) -> Result<Reader, LibraryError> {
        let idx = self
            .readers
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| LibraryError::ReaderNotFound(name.to_string()))?;
        Ok(self.readers.remove(idx))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn catalog_with(shelves: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for title in shelves {
            let Ok(()) = catalog.add_shelf(Shelf::new(*title)) else {
                panic!("shelf {title} should be new");
            };
        }
        catalog
    }

    #[test]
    fn duplicate_shelf_rejected() {
        let mut catalog = catalog_with(&["A"]);
        let result = catalog.add_shelf(Shelf::new("A"));
        assert!(matches!(result, Err(LibraryError::ShelfExists(t)) if t == "A"));
        assert_eq!(catalog.shelves().len(), 1);
    }

    #[test]
    fn shelf_lookup_by_title() {
        let catalog = catalog_with(&["A", "B"]);
        assert!(catalog.shelf("B").is_ok());
        assert!(matches!(
            catalog.shelf("C"),
            Err(LibraryError::ShelfNotFound(t)) if t == "C"
        ));
    }

    #[test]
    fn resolve_pair_finds_both() {
        let catalog = catalog_with(&["A", "B", "C"]);
        let Ok((s, d)) = catalog.resolve_pair("C", "A") else {
            panic!("both shelves exist");
        };
        assert_eq!((s, d), (2, 0));
    }

    #[test]
    fn resolve_pair_same_shelf() {
        let catalog = catalog_with(&["A"]);
        let Ok((s, d)) = catalog.resolve_pair("A", "A") else {
            panic!("shelf exists");
        };
        assert_eq!(s, d);
    }

    #[test]
    fn resolve_pair_missing_either() {
        let catalog = catalog_with(&["A"]);
        assert!(matches!(
            catalog.resolve_pair("A", "Z"),
            Err(LibraryError::ShelvesNotFound { .. })
        ));
        assert!(matches!(
            catalog.resolve_pair("Z", "A"),
            Err(LibraryError::ShelvesNotFound { .. })
        ));
    }

    #[test]
    fn remove_shelf_by_title() {
        let mut catalog = catalog_with(&["A", "B"]);
        let Ok(removed) = catalog.remove_shelf("A") else {
            panic!("shelf A exists");
        };
        assert_eq!(removed.title(), "A");
        assert_eq!(catalog.shelves().len(), 1);
        assert!(catalog.remove_shelf("A").is_err());
    }

    #[test]
    fn readers_unique_by_name() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_reader(Reader::new("ann")).is_ok());
        assert!(matches!(
            catalog.add_reader(Reader::new("ann")),
            Err(LibraryError::ReaderExists(_))
        ));
        assert!(catalog.reader("ann").is_ok());
        assert!(catalog.remove_reader("ann").is_ok());
        assert!(matches!(
            catalog.reader("ann"),
            Err(LibraryError::ReaderNotFound(_))
        ));
    }
}
