//! Askama view models for every rendered page.
//!
//! Each page carries a [`Nav`] built from the request's viewer so the layout
//! can show the right links without reaching into ambient state.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{ContentType, LOCATION};
use askama::Template;

use crate::domain::{Book, Error, User};

/// Navigation context for the shared layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nav {
    pub signed_in: bool,
    pub username: String,
}

impl Nav {
    pub fn for_viewer(viewer: Option<&User>) -> Self {
        viewer.map_or_else(Self::default, |user| Self {
            signed_in: true,
            username: user.username().to_string(),
        })
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub nav: Nav,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub nav: Nav,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub nav: Nav,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub nav: Nav,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub nav: Nav,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    pub nav: Nav,
    pub books: &'a [Book],
}

#[derive(Template)]
#[template(path = "create.html")]
pub struct CreatePage {
    pub nav: Nav,
}

#[derive(Template)]
#[template(path = "book.html")]
pub struct BookPage<'a> {
    pub nav: Nav,
    pub book: &'a Book,
}

#[derive(Template)]
#[template(path = "update.html")]
pub struct UpdatePage<'a> {
    pub nav: Nav,
    pub book: &'a Book,
}

#[derive(Template)]
#[template(path = "delete.html")]
pub struct DeletePage<'a> {
    pub nav: Nav,
    pub book: &'a Book,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub nav: Nav,
    pub status: u16,
    pub heading: &'a str,
    pub message: &'a str,
    pub trace_id: &'a str,
}

/// `302 Found` pointing at `location`.
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.to_owned()))
        .finish()
}

/// Render `page` as a `200 OK` HTML response.
pub fn render<T: Template>(page: &T) -> Result<HttpResponse, Error> {
    render_with_status(StatusCode::OK, page)
}

pub fn render_with_status<T: Template>(
    status: StatusCode,
    page: &T,
) -> Result<HttpResponse, Error> {
    let body = page
        .render()
        .map_err(|err| Error::internal(format!("template rendering failed: {err}")))?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}
