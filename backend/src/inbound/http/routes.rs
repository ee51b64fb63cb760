//! Route table for the page handlers.
//!
//! ```text
//! GET       /                     home
//! GET       /about, /contact      static pages
//! GET/POST  /register, /login     account forms
//! GET       /logout               end the session
//! GET       /dashboard            list own reviews
//! GET/POST  /create               new review
//! GET       /books/{id}           single review
//! GET/POST  /update/{id}          edit review
//! GET/POST  /delete/{id}          confirm and delete review
//! ```

use actix_web::web;

use super::{accounts, books, pages};

/// Register every page handler. Session middleware and [`super::state::HttpState`]
/// must be supplied by the enclosing app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(pages::about)
        .service(pages::contact)
        .service(accounts::register_form)
        .service(accounts::register)
        .service(accounts::login_form)
        .service(accounts::login)
        .service(accounts::logout)
        .service(books::dashboard)
        .service(books::create_form)
        .service(books::create)
        .service(books::show)
        .service(books::update_form)
        .service(books::update)
        .service(books::delete_form)
        .service(books::delete);
}
