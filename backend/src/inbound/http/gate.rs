//! Request extractors that resolve who is calling.
//!
//! [`AuthenticatedUser`] is the authorization gate: a handler taking it never
//! runs for anonymous callers, who are redirected to the login form instead.
//! [`Viewer`] is the permissive variant for public pages.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, User, UserId};

use super::session::SessionContext;
use super::state::HttpState;
use super::views::Nav;

/// Reads only the session cookie; the body stays for later extractors.
async fn resolve_user(req: HttpRequest) -> Result<Option<User>, Error> {
    let session = SessionContext::extract(&req)
        .await
        .map_err(|err| Error::internal(format!("session unavailable: {err}")))?;
    let state = web::Data::<HttpState>::extract(&req)
        .await
        .map_err(|err| Error::internal(format!("http state missing: {err}")))?;
    session.resolve(state.authenticator.as_ref()).await
}

/// The signed-in account behind the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(User);

impl AuthenticatedUser {
    pub fn id(&self) -> &UserId {
        self.0.id()
    }

    pub fn nav(&self) -> Nav {
        Nav::for_viewer(Some(&self.0))
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve_user(req).await? {
                Some(user) => Ok(Self(user)),
                None => Err(Error::unauthorized("login required").into()),
            }
        })
    }
}

/// Optional caller identity. Lookup failures degrade to anonymous.
#[derive(Debug, Clone, Default)]
pub struct Viewer(Option<User>);

impl Viewer {
    fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn nav(&self) -> Nav {
        Nav::for_viewer(self.user())
    }
}

impl FromRequest for Viewer {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let user = resolve_user(req).await.unwrap_or_else(|error| {
                warn!(%error, "viewer lookup failed; treating request as anonymous");
                None
            });
            Ok(Self(user))
        })
    }
}
