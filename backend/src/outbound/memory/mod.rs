//! In-process adapters used when no database URL is configured.
//!
//! State lives behind a `std::sync::Mutex` and each port call takes the lock
//! exactly once, so every mutation is atomic per call. Data is lost on
//! restart.

mod book_repository;
mod user_repository;

pub use book_repository::InMemoryBookRepository;
pub use user_repository::InMemoryUserRepository;
