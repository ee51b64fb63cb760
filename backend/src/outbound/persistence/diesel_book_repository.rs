//! PostgreSQL-backed `BookRepository`.
//!
//! Every statement filters on `owner_id` as well as `id`, so a book id from
//! another account never matches. Each mutation is a single statement, which
//! gives per-owner atomicity without explicit locking.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookPersistenceError, BookRepository};
use crate::domain::{Book, BookId, BookPatch, UserId};

use super::diesel_error_mapping::{DieselFailure, pool_error_message};
use super::models::{BookChangeset, BookRow, NewBookRow};
use super::pool::{DbPool, PoolError};
use super::schema::books;

#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookPersistenceError {
    BookPersistenceError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> BookPersistenceError {
    match DieselFailure::classify(&error) {
        DieselFailure::Connection => BookPersistenceError::connection("database connection error"),
        DieselFailure::UniqueViolation | DieselFailure::Query => {
            BookPersistenceError::query("database error")
        }
    }
}

fn row_to_book(row: BookRow) -> Book {
    Book::new(BookId::from_uuid(row.id), row.title, row.author, row.review)
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn list(&self, owner: &UserId) -> Result<Vec<Book>, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BookRow> = books::table
            .filter(books::owner_id.eq(owner.as_uuid()))
            .order(books::position.asc())
            .select(BookRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_book).collect())
    }

    async fn find(
        &self,
        owner: &UserId,
        id: &BookId,
    ) -> Result<Option<Book>, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<BookRow> = books::table
            .filter(books::owner_id.eq(owner.as_uuid()))
            .filter(books::id.eq(id.as_uuid()))
            .select(BookRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_book))
    }

    async fn append(&self, owner: &UserId, book: &Book) -> Result<(), BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewBookRow {
            id: *book.id().as_uuid(),
            owner_id: *owner.as_uuid(),
            title: book.title(),
            author: book.author(),
            review: book.review(),
        };
        diesel::insert_into(books::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        owner: &UserId,
        id: &BookId,
        patch: &BookPatch,
    ) -> Result<Option<Book>, BookPersistenceError> {
        // Diesel rejects an UPDATE with an empty SET clause.
        if patch.is_empty() {
            return self.find(owner, id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = BookChangeset {
            title: patch.title.as_deref(),
            author: patch.author.as_deref(),
            review: patch.review.as_deref(),
        };
        let row: Option<BookRow> = diesel::update(
            books::table
                .filter(books::owner_id.eq(owner.as_uuid()))
                .filter(books::id.eq(id.as_uuid())),
        )
        .set(&changes)
        .returning(BookRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;
        Ok(row.map(row_to_book))
    }

    async fn remove(&self, owner: &UserId, id: &BookId) -> Result<bool, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(
            books::table
                .filter(books::owner_id.eq(owner.as_uuid()))
                .filter(books::id.eq(id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
