//! Driving port for the owner-scoped book CRUD use-cases.

use async_trait::async_trait;

use crate::domain::{Book, BookDraft, BookId, BookPatch, Error, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookShelf: Send + Sync {
    async fn list(&self, owner: &UserId) -> Result<Vec<Book>, Error>;

    /// Absent ids yield `NotFound`.
    async fn get(&self, owner: &UserId, id: &BookId) -> Result<Book, Error>;

    async fn create(&self, owner: &UserId, draft: BookDraft) -> Result<Book, Error>;

    /// Partial update. Absent ids yield `NotFound`.
    async fn update(&self, owner: &UserId, id: &BookId, patch: BookPatch)
    -> Result<Book, Error>;

    /// Idempotent: deleting an absent id succeeds.
    async fn delete(&self, owner: &UserId, id: &BookId) -> Result<(), Error>;
}
