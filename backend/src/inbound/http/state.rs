//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see the driving
//! ports, so tests can swap in doubles without touching I/O.

use std::sync::Arc;

use crate::domain::ports::{Authenticator, BookShelf};

#[derive(Clone)]
pub struct HttpState {
    pub authenticator: Arc<dyn Authenticator>,
    pub books: Arc<dyn BookShelf>,
}

impl HttpState {
    pub fn new(authenticator: Arc<dyn Authenticator>, books: Arc<dyn BookShelf>) -> Self {
        Self {
            authenticator,
            books,
        }
    }
}
