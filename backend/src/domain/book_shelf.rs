//! Owner-scoped book CRUD service.
//!
//! Implements the [`BookShelf`] driving port over a [`BookRepository`],
//! turning `None` results into explicit `NotFound` errors and persistence
//! failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BookPersistenceError, BookRepository, BookShelf};
use crate::domain::{Book, BookDraft, BookId, BookPatch, Error, UserId};

#[derive(Clone)]
pub struct BookShelfService<R> {
    books: Arc<R>,
}

impl<R> BookShelfService<R> {
    pub fn new(books: Arc<R>) -> Self {
        Self { books }
    }
}

fn map_persistence_error(error: BookPersistenceError) -> Error {
    match error {
        BookPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("book repository unavailable: {message}"))
        }
        BookPersistenceError::Query { message } => {
            Error::internal(format!("book repository error: {message}"))
        }
    }
}

fn book_not_found(id: &BookId) -> Error {
    Error::not_found(format!("book {id} not found"))
}

#[async_trait]
impl<R> BookShelf for BookShelfService<R>
where
    R: BookRepository,
{
    async fn list(&self, owner: &UserId) -> Result<Vec<Book>, Error> {
        self.books.list(owner).await.map_err(map_persistence_error)
    }

    async fn get(&self, owner: &UserId, id: &BookId) -> Result<Book, Error> {
        self.books
            .find(owner, id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| book_not_found(id))
    }

    async fn create(&self, owner: &UserId, draft: BookDraft) -> Result<Book, Error> {
        let book = Book::from_draft(BookId::random(), &draft);
        self.books
            .append(owner, &book)
            .await
            .map_err(map_persistence_error)?;
        debug!(owner = %owner, book_id = %book.id(), "book appended");
        Ok(book)
    }

    async fn update(&self, owner: &UserId, id: &BookId, patch: BookPatch) -> Result<Book, Error> {
        self.books
            .update(owner, id, &patch)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| book_not_found(id))
    }

    async fn delete(&self, owner: &UserId, id: &BookId) -> Result<(), Error> {
        let removed = self
            .books
            .remove(owner, id)
            .await
            .map_err(map_persistence_error)?;
        if !removed {
            debug!(owner = %owner, book_id = %id, "delete of absent book ignored");
        }
        Ok(())
    }
}
