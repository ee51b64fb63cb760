//! Owner-scoped book review handlers.
//!
//! Every handler takes [`AuthenticatedUser`], so anonymous requests are
//! redirected before any store call. Book ids come from the path and are
//! always looked up inside the caller's own collection; ids that fail to
//! parse are reported the same way as ids that are absent.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{BookDraft, BookId, BookPatch, Error};

use super::error::PageResult;
use super::gate::AuthenticatedUser;
use super::state::HttpState;
use super::views::{
    BookPage, CreatePage, DashboardPage, DeletePage, UpdatePage, redirect_to, render,
};

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Book form body. Field names match the HTML inputs.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(rename = "bookTitle")]
    pub title: Option<String>,
    #[serde(rename = "authorName")]
    pub author: Option<String>,
    #[serde(rename = "reviewBody")]
    pub review: Option<String>,
}

impl BookForm {
    /// Missing fields become empty text.
    pub fn into_draft(self) -> BookDraft {
        BookDraft {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            review: self.review.unwrap_or_default(),
        }
    }

    /// Missing fields are left unchanged.
    pub fn into_patch(self) -> BookPatch {
        BookPatch {
            title: self.title,
            author: self.author,
            review: self.review,
        }
    }
}

fn book_id(raw: &str) -> Result<BookId, Error> {
    BookId::new(raw).map_err(|_| Error::not_found(format!("book {raw} not found")))
}

#[get("/dashboard")]
pub async fn dashboard(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> PageResult<HttpResponse> {
    let books = state.books.list(user.id()).await?;
    render(&DashboardPage {
        nav: user.nav(),
        books: &books,
    })
}

#[get("/create")]
pub async fn create_form(user: AuthenticatedUser) -> PageResult<HttpResponse> {
    render(&CreatePage { nav: user.nav() })
}

#[post("/create")]
pub async fn create(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    form: web::Form<BookForm>,
) -> PageResult<HttpResponse> {
    let book = state
        .books
        .create(user.id(), form.into_inner().into_draft())
        .await?;
    info!(owner = %user.id(), book_id = %book.id(), "review created");
    Ok(redirect_to(DASHBOARD_PATH))
}

#[get("/books/{book_id}")]
pub async fn show(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = book_id(&path)?;
    let book = state.books.get(user.id(), &id).await?;
    render(&BookPage {
        nav: user.nav(),
        book: &book,
    })
}

#[get("/update/{book_id}")]
pub async fn update_form(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = book_id(&path)?;
    let book = state.books.get(user.id(), &id).await?;
    render(&UpdatePage {
        nav: user.nav(),
        book: &book,
    })
}

#[post("/update/{book_id}")]
pub async fn update(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<BookForm>,
) -> PageResult<HttpResponse> {
    let id = book_id(&path)?;
    state
        .books
        .update(user.id(), &id, form.into_inner().into_patch())
        .await?;
    info!(owner = %user.id(), book_id = %id, "review updated");
    Ok(redirect_to(DASHBOARD_PATH))
}

#[get("/delete/{book_id}")]
pub async fn delete_form(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = book_id(&path)?;
    let book = state.books.get(user.id(), &id).await?;
    render(&DeletePage {
        nav: user.nav(),
        book: &book,
    })
}

/// Idempotent: deleting an absent or foreign id still redirects.
#[post("/delete/{book_id}")]
pub async fn delete(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = book_id(&path)?;
    state.books.delete(user.id(), &id).await?;
    info!(owner = %user.id(), book_id = %id, "review deleted");
    Ok(redirect_to(DASHBOARD_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn missing_fields_are_empty_in_drafts() {
        let form = BookForm {
            title: Some("Dune".into()),
            ..BookForm::default()
        };
        assert_eq!(
            form.into_draft(),
            BookDraft {
                title: "Dune".into(),
                author: String::new(),
                review: String::new(),
            }
        );
    }

    #[rstest]
    fn missing_fields_are_untouched_in_patches() {
        let form = BookForm {
            title: Some("Dune Messiah".into()),
            ..BookForm::default()
        };
        let patch = form.into_patch();
        assert_eq!(patch.title.as_deref(), Some("Dune Messiah"));
        assert!(patch.author.is_none());
        assert!(patch.review.is_none());
    }

    #[rstest]
    #[case("bookTitle=Dune&authorName=Herbert&reviewBody=Great", Some("Dune"), Some("Herbert"))]
    #[case("bookTitle=Dune+Messiah", Some("Dune Messiah"), None)]
    #[case("", None, None)]
    #[actix_web::test]
    async fn form_field_names_follow_html_inputs(
        #[case] body: &'static str,
        #[case] title: Option<&str>,
        #[case] author: Option<&str>,
    ) {
        use actix_web::FromRequest;
        use actix_web::http::header::ContentType;
        use actix_web::test::TestRequest;

        let (req, mut payload) = TestRequest::post()
            .insert_header(ContentType::form_url_encoded())
            .set_payload(body)
            .to_http_parts();
        let form = web::Form::<BookForm>::from_request(&req, &mut payload)
            .await
            .expect("form decodes")
            .into_inner();
        assert_eq!(form.title.as_deref(), title);
        assert_eq!(form.author.as_deref(), author);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    fn malformed_path_ids_are_not_found(#[case] raw: &str) {
        let err = book_id(raw).expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
