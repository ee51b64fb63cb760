//! Session manager over Actix cookie sessions.
//!
//! The encrypted cookie carries only the user id. Handlers never touch the
//! raw `Session`; they establish, resolve, or destroy through
//! [`SessionContext`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, warn};

use crate::domain::ports::Authenticator;
use crate::domain::{Error, User, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the session to `user`, rotating the session cookie first.
    pub fn establish(&self, user: &User) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user.id().to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// User id stored in the cookie. Unreadable ids count as absent.
    pub fn user_id(&self) -> Option<UserId> {
        let raw = match self.0.get::<String>(USER_ID_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(%error, "unreadable session payload");
                return None;
            }
        };
        match UserId::new(&raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                None
            }
        }
    }

    /// Resolve the session to a live account.
    ///
    /// Sessions pointing at unknown or deleted accounts are purged.
    pub async fn resolve(&self, authenticator: &dyn Authenticator) -> Result<Option<User>, Error> {
        let Some(id) = self.user_id() else {
            return Ok(None);
        };
        let user = authenticator.resolve(&id).await?;
        if user.is_none() {
            debug!(user_id = %id, "session refers to missing account; clearing");
            self.destroy();
        }
        Ok(user)
    }

    /// Drop all session state. Safe to call when no session exists.
    pub fn destroy(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
