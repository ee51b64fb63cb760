use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRecord, UserRepository};
use crate::domain::{User, UserId, Username};

#[derive(Debug, Default)]
struct Accounts {
    by_id: HashMap<UserId, UserRecord>,
    ids_by_name: HashMap<Username, UserId>,
}

/// Account store keyed by id with a username index.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    accounts: Mutex<Accounts>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, record: &UserRecord) -> Result<(), UserPersistenceError> {
        let mut accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());
        let username = record.user.username().clone();
        if accounts.ids_by_name.contains_key(&username) {
            return Err(UserPersistenceError::duplicate_username(username.to_string()));
        }
        let id = *record.user.id();
        accounts.ids_by_name.insert(username, id);
        accounts.by_id.insert(id, record.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserPersistenceError> {
        let accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());
        Ok(accounts
            .ids_by_name
            .get(username)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());
        Ok(accounts.by_id.get(id).map(|record| record.user.clone()))
    }
}
