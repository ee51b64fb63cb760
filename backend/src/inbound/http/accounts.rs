//! Registration, login, and logout handlers.
//!
//! Credential problems send the browser back to the form it came from; store
//! outages fall through to the error page.

use std::future::Future;

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Error, ErrorCode, LoginCredentials, User};

use super::error::PageResult;
use super::gate::Viewer;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::{LoginPage, RegisterPage, redirect_to, render};

pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";
const AFTER_REGISTER: &str = "/create";
const AFTER_LOGIN: &str = "/dashboard";
const AFTER_LOGOUT: &str = "/";

/// `application/x-www-form-urlencoded` body of the register and login forms.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialsForm {
    fn credentials(&self) -> Result<LoginCredentials, Error> {
        LoginCredentials::try_from_parts(&self.username, &self.password)
            .map_err(|err| Error::invalid_request(err.to_string()))
    }
}

fn returns_to_form(error: &Error) -> bool {
    matches!(
        error.code(),
        ErrorCode::InvalidRequest | ErrorCode::InvalidCredentials | ErrorCode::Conflict
    )
}

/// Establish a session for the outcome of `attempt`, or bounce back to `form`.
async fn sign_in<F>(
    session: &SessionContext,
    form: &CredentialsForm,
    form_path: &str,
    success_path: &str,
    attempt: impl FnOnce(LoginCredentials) -> F,
) -> PageResult<HttpResponse>
where
    F: Future<Output = Result<User, Error>>,
{
    let outcome = match form.credentials() {
        Ok(credentials) => attempt(credentials).await,
        Err(error) => Err(error),
    };
    match outcome {
        Ok(user) => {
            session.establish(&user)?;
            info!(user_id = %user.id(), "session established");
            Ok(redirect_to(success_path))
        }
        Err(error) if returns_to_form(&error) => {
            warn!(code = %error.code(), message = error.message(), "sign-in rejected");
            Ok(redirect_to(form_path))
        }
        Err(error) => Err(error),
    }
}

#[get("/register")]
pub async fn register_form(viewer: Viewer) -> PageResult<HttpResponse> {
    render(&RegisterPage { nav: viewer.nav() })
}

#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<CredentialsForm>,
) -> PageResult<HttpResponse> {
    sign_in(&session, &form, REGISTER_PATH, AFTER_REGISTER, |credentials| async move {
        state.authenticator.register(&credentials).await
    })
    .await
}

#[get("/login")]
pub async fn login_form(viewer: Viewer) -> PageResult<HttpResponse> {
    render(&LoginPage { nav: viewer.nav() })
}

#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<CredentialsForm>,
) -> PageResult<HttpResponse> {
    sign_in(&session, &form, LOGIN_PATH, AFTER_LOGIN, |credentials| async move {
        state.authenticator.authenticate(&credentials).await
    })
    .await
}

/// Idempotent: logging out without a session still redirects home.
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.destroy();
    redirect_to(AFTER_LOGOUT)
}
