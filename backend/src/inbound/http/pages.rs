//! Public informational pages.

use actix_web::{HttpResponse, get};

use super::error::PageResult;
use super::gate::Viewer;
use super::views::{AboutPage, ContactPage, HomePage, render};

#[get("/")]
pub async fn home(viewer: Viewer) -> PageResult<HttpResponse> {
    render(&HomePage { nav: viewer.nav() })
}

#[get("/about")]
pub async fn about(viewer: Viewer) -> PageResult<HttpResponse> {
    render(&AboutPage { nav: viewer.nav() })
}

#[get("/contact")]
pub async fn contact(viewer: Viewer) -> PageResult<HttpResponse> {
    render(&ContactPage { nav: viewer.nav() })
}
