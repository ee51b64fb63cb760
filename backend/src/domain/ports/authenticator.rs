//! Driving port for account registration and login.
//!
//! Inbound adapters call this to turn submitted credentials into a [`User`]
//! without knowing how accounts or hashes are stored.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Create an account. A taken username yields `Conflict`.
    async fn register(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Verify credentials. Unknown users and wrong passwords both yield
    /// `InvalidCredentials`.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Look up the account behind a session; `None` once it no longer exists.
    async fn resolve(&self, id: &UserId) -> Result<Option<User>, Error>;
}
