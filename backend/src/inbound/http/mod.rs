//! HTTP inbound adapter serving server-rendered pages.

pub mod accounts;
pub mod books;
pub mod error;
pub mod gate;
pub mod health;
pub mod pages;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::PageResult;
