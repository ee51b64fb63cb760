//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed entities the HTTP adapter and the
//! persistence adapters exchange, plus the use-case services that enforce
//! ownership scoping. Nothing in this module depends on Actix or Diesel.
//!
//! Public surface:
//! - `Error`/`ErrorCode`: transport-agnostic failure payload.
//! - `User`, `UserId`, `Username`: account identity.
//! - `Book`, `BookId`, `BookDraft`, `BookPatch`: owned review records.
//! - `LoginCredentials`: validated username/password pair.
//! - `PasswordAuthenticator`, `BookShelfService`: driving port implementations.

pub mod auth;
pub mod authenticator;
pub mod book;
pub mod book_shelf;
pub mod error;
pub mod password;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::authenticator::PasswordAuthenticator;
pub use self::book::{Book, BookDraft, BookId, BookIdValidationError, BookPatch};
pub use self::book_shelf::BookShelfService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};
