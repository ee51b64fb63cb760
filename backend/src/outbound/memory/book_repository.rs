use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{BookPersistenceError, BookRepository};
use crate::domain::{Book, BookId, BookPatch, UserId};

/// Per-owner ordered book lists.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    shelves: Mutex<HashMap<UserId, Vec<Book>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self, owner: &UserId) -> Result<Vec<Book>, BookPersistenceError> {
        let shelves = self.shelves.lock().unwrap_or_else(|e| e.into_inner());
        Ok(shelves.get(owner).cloned().unwrap_or_default())
    }

    async fn find(
        &self,
        owner: &UserId,
        id: &BookId,
    ) -> Result<Option<Book>, BookPersistenceError> {
        let shelves = self.shelves.lock().unwrap_or_else(|e| e.into_inner());
        Ok(shelves
            .get(owner)
            .and_then(|books| books.iter().find(|book| book.id() == id))
            .cloned())
    }

    async fn append(&self, owner: &UserId, book: &Book) -> Result<(), BookPersistenceError> {
        let mut shelves = self.shelves.lock().unwrap_or_else(|e| e.into_inner());
        shelves.entry(*owner).or_default().push(book.clone());
        Ok(())
    }

    async fn update(
        &self,
        owner: &UserId,
        id: &BookId,
        patch: &BookPatch,
    ) -> Result<Option<Book>, BookPersistenceError> {
        let mut shelves = self.shelves.lock().unwrap_or_else(|e| e.into_inner());
        let Some(book) = shelves
            .get_mut(owner)
            .and_then(|books| books.iter_mut().find(|book| book.id() == id))
        else {
            return Ok(None);
        };
        book.apply(patch);
        Ok(Some(book.clone()))
    }

    async fn remove(&self, owner: &UserId, id: &BookId) -> Result<bool, BookPersistenceError> {
        let mut shelves = self.shelves.lock().unwrap_or_else(|e| e.into_inner());
        let Some(books) = shelves.get_mut(owner) else {
            return Ok(false);
        };
        let before = books.len();
        books.retain(|book| book.id() != id);
        Ok(books.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn book(title: &str) -> Book {
        Book::new(BookId::random(), title, "Herbert", "Great")
    }

    #[rstest]
    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = InMemoryBookRepository::new();
        let owner = UserId::random();
        let titles = ["Dune", "Children of Dune", "Dune Messiah"];
        for title in titles {
            repo.append(&owner, &book(title)).await.expect("append succeeds");
        }

        let listed = repo.list(&owner).await.expect("list succeeds");
        let listed_titles: Vec<&str> = listed.iter().map(Book::title).collect();
        assert_eq!(listed_titles, titles);
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_never_cross_owners() {
        let repo = InMemoryBookRepository::new();
        let alice = UserId::random();
        let bob = UserId::random();
        let dune = book("Dune");
        repo.append(&alice, &dune).await.expect("append succeeds");

        assert!(repo.find(&bob, dune.id()).await.expect("lookup").is_none());
        let patch = BookPatch {
            title: Some("Stolen".into()),
            ..BookPatch::default()
        };
        assert!(repo.update(&bob, dune.id(), &patch).await.expect("update").is_none());
        assert!(!repo.remove(&bob, dune.id()).await.expect("remove"));

        let kept = repo.find(&alice, dune.id()).await.expect("lookup");
        assert_eq!(kept, Some(dune));
    }

    #[rstest]
    #[tokio::test]
    async fn remove_twice_only_deletes_once() {
        let repo = InMemoryBookRepository::new();
        let owner = UserId::random();
        let dune = book("Dune");
        repo.append(&owner, &dune).await.expect("append succeeds");

        assert!(repo.remove(&owner, dune.id()).await.expect("first remove"));
        assert!(!repo.remove(&owner, dune.id()).await.expect("second remove"));
        assert!(repo.list(&owner).await.expect("list").is_empty());
    }
}
