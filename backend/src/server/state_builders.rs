//! Builders wiring driving ports to their outbound adapters.

use std::sync::Arc;

use crate::domain::ports::{Authenticator, BookRepository, BookShelf, UserRepository};
use crate::domain::{BookShelfService, PasswordAuthenticator};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryBookRepository, InMemoryUserRepository};
use crate::outbound::persistence::{DbPool, DieselBookRepository, DieselUserRepository};

fn wire<U, B>(users: U, books: B) -> HttpState
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let authenticator: Arc<dyn Authenticator> =
        Arc::new(PasswordAuthenticator::new(Arc::new(users)));
    let books: Arc<dyn BookShelf> = Arc::new(BookShelfService::new(Arc::new(books)));
    HttpState::new(authenticator, books)
}

/// Services backed by process-local stores. Data is lost on restart.
pub fn in_memory_http_state() -> HttpState {
    wire(InMemoryUserRepository::new(), InMemoryBookRepository::new())
}

/// Diesel-backed services when a pool is available, in-memory otherwise.
pub fn build_http_state(db_pool: Option<&DbPool>) -> HttpState {
    match db_pool {
        Some(pool) => wire(
            DieselUserRepository::new(pool.clone()),
            DieselBookRepository::new(pool.clone()),
        ),
        None => in_memory_http_state(),
    }
}
