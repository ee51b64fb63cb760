//! Port for the per-owner book collection.
//!
//! Every operation is keyed by the owning [`UserId`]; adapters must never
//! match a book id outside that owner's collection.

use async_trait::async_trait;

use crate::domain::{Book, BookId, BookPatch, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by book repository adapters.
    pub enum BookPersistenceError {
        /// Repository connection could not be established.
        Connection => "book repository connection failed",
        /// Query or mutation failed during execution.
        Query => "book repository query failed",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Owner's books in insertion order.
    async fn list(&self, owner: &UserId) -> Result<Vec<Book>, BookPersistenceError>;

    async fn find(&self, owner: &UserId, id: &BookId)
    -> Result<Option<Book>, BookPersistenceError>;

    /// Append `book` to the end of the owner's collection in one atomic step.
    async fn append(&self, owner: &UserId, book: &Book) -> Result<(), BookPersistenceError>;

    /// Apply `patch` and return the stored result, or `None` when absent.
    async fn update(
        &self,
        owner: &UserId,
        id: &BookId,
        patch: &BookPatch,
    ) -> Result<Option<Book>, BookPersistenceError>;

    /// Remove the book, reporting whether anything was deleted.
    async fn remove(&self, owner: &UserId, id: &BookId) -> Result<bool, BookPersistenceError>;
}
