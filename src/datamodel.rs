use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, Result, SeedError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

/// Initial contents of a [`Library`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Seed {
    pub fn builtin() -> Self {
        let author = |id, name: &str| Author {
            id,
            name: name.into(),
        };
        let book = |id, name: &str, author_id| Book {
            id,
            name: name.into(),
            author_id,
        };

        Self {
            authors: vec![author(1, "Hermann Hesse"), author(2, "Thomas Mann")],
            books: vec![
                book(1, "Siddhartha", 1),
                book(2, "Das Glasperlenspiel", 1),
                book(3, "Zauberberg", 2),
            ],
        }
    }

    /// Reads a seed from a JSON file shaped like
    /// `{ "authors": [{ "id", "name" }], "books": [{ "id", "name", "authorId" }] }`.
    pub fn from_file(path: &Path) -> std::result::Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

struct Collections {
    books: Vec<Book>,
    authors: Vec<Author>,
    /// `None` once the id space is used up.
    next_book_id: Option<i32>,
    next_author_id: Option<i32>,
}

/// First id after everything already taken, never below 1.
fn next_id(ids: impl Iterator<Item = i32>) -> Option<i32> {
    ids.max().unwrap_or(0).max(0).checked_add(1)
}

/// The shared in-memory store behind the schema.
///
/// Every operation takes the lock once and finishes its read-modify-write
/// before releasing it, so mutations never interleave. Records are handed out
/// as clones.
#[derive(Clone)]
pub struct Library {
    inner: Arc<Mutex<Collections>>,
}

impl Default for Library {
    fn default() -> Self {
        Self::new(Seed::builtin())
    }
}

impl Library {
    pub fn new(seed: Seed) -> Self {
        let inner = Collections {
            next_book_id: next_id(seed.books.iter().map(|b| b.id)),
            next_author_id: next_id(seed.authors.iter().map(|a| a.id)),
            books: seed.books,
            authors: seed.authors,
        };
        tracing::debug!(
            books = inner.books.len(),
            authors = inner.authors.len(),
            "seeded library"
        );
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // Only plain records live behind the lock, a panicking holder cannot
        // leave them half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn book(&self, id: i32) -> Option<Book> {
        self.lock().books.iter().find(|b| b.id == id).cloned()
    }

    pub fn books(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.lock()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        self.lock().authors.iter().find(|a| a.id == id).cloned()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.lock().authors.clone()
    }

    pub fn add_book(&self, name: String, author_id: i32) -> Result<Book> {
        let mut inner = self.lock();
        let Some(id) = inner.next_book_id else {
            tracing::warn!("Cannot add book, ids exhausted");
            return Err(LibraryError::IdsExhausted { collection: "book" });
        };
        inner.next_book_id = id.checked_add(1);

        let book = Book {
            id,
            name,
            author_id,
        };
        inner.books.push(book.clone());

        tracing::info!(id, name = %book.name, author_id, "Adding book");
        Ok(book)
    }

    pub fn update_book(&self, id: i32, name: String, author_id: i32) -> Result<Book> {
        let mut inner = self.lock();
        let Some(book) = inner.books.iter_mut().find(|b| b.id == id) else {
            tracing::warn!(id, "Cannot update missing book");
            return Err(LibraryError::BookNotFound { id });
        };
        book.name = name;
        book.author_id = author_id;

        tracing::info!(id, name = %book.name, author_id, "Updating book");
        Ok(book.clone())
    }

    /// Removes the book with `id`; nothing is touched when no book matches.
    pub fn delete_book(&self, id: i32) -> Option<Book> {
        let mut inner = self.lock();
        let pos = inner.books.iter().position(|b| b.id == id)?;

        tracing::info!(id, "Deleting book");
        Some(inner.books.remove(pos))
    }

    pub fn add_author(&self, name: String) -> Result<Author> {
        let mut inner = self.lock();
        let Some(id) = inner.next_author_id else {
            tracing::warn!("Cannot add author, ids exhausted");
            return Err(LibraryError::IdsExhausted {
                collection: "author",
            });
        };
        inner.next_author_id = id.checked_add(1);

        let author = Author { id, name };
        inner.authors.push(author.clone());

        tracing::info!(id, name = %author.name, "Adding author");
        Ok(author)
    }

    /// Removes the author with `id`. Their books stay behind with a dangling
    /// `author_id`.
    pub fn delete_author(&self, id: i32) -> Option<Author> {
        let mut inner = self.lock();
        let pos = inner.authors.iter().position(|a| a.id == id)?;

        tracing::info!(id, "Deleting author");
        Some(inner.authors.remove(pos))
    }
}
