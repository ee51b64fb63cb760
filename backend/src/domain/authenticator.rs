//! Password-based implementation of the [`Authenticator`] driving port.

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use tokio::task;
use zeroize::Zeroizing;

use crate::domain::password::{hash_password, verify_password};
use crate::domain::ports::{Authenticator, UserPersistenceError, UserRecord, UserRepository};
use crate::domain::{Error, LoginCredentials, User, UserId};

/// Registers and verifies accounts against a [`UserRepository`].
#[derive(Clone)]
pub struct PasswordAuthenticator<R> {
    users: Arc<R>,
}

impl<R> PasswordAuthenticator<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> PasswordAuthenticator<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateUsername { .. } => {
                Error::conflict("username already registered")
            }
        }
    }
}

/// Verified against when the username is unknown so both login failures cost
/// one Argon2 run.
static ABSENT_USER_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("absent-user").unwrap_or_default());

async fn hash_off_thread(password: &str) -> Result<String, Error> {
    let password = Zeroizing::new(password.to_owned());
    task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
}

/// `None` verifies against [`ABSENT_USER_HASH`].
async fn verify_off_thread(password: &str, stored: Option<String>) -> Result<bool, Error> {
    let password = Zeroizing::new(password.to_owned());
    task::spawn_blocking(move || {
        let stored = stored.as_deref().unwrap_or(ABSENT_USER_HASH.as_str());
        verify_password(&password, stored)
    })
    .await
    .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
}

#[async_trait]
impl<R> Authenticator for PasswordAuthenticator<R>
where
    R: UserRepository,
{
    async fn register(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let password_hash = hash_off_thread(credentials.password()).await?;
        let user = User::new(UserId::random(), credentials.username().clone());
        let record = UserRecord {
            user: user.clone(),
            password_hash,
        };
        self.users
            .insert(&record)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(user)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let record = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_persistence_error)?;

        let stored = record.as_ref().map(|record| record.password_hash.clone());
        let matched = verify_off_thread(credentials.password(), stored).await?;
        match record {
            Some(record) if matched => Ok(record.user),
            _ => Err(Error::invalid_credentials("invalid username or password")),
        }
    }

    async fn resolve(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }
}
