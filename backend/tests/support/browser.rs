//! Cookie-carrying client for driving the full application in tests.
//!
//! Each request builds a fresh service from the same [`AppDependencies`], so
//! stores and the session key persist across requests while the client keeps
//! the session cookie the way a browser would.

use actix_web::cookie::{Cookie, Key, SameSite, time::Duration};
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::web;

use book_reviews::domain::TRACE_ID_HEADER;
use book_reviews::inbound::http::health::HealthState;
use book_reviews::inbound::http::session_config::SessionSettings;
use book_reviews::server::{AppDependencies, SESSION_COOKIE, build_app, in_memory_http_state};

/// Observable parts of a single response.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub trace_id: Option<String>,
    pub body: String,
}

impl Page {
    pub fn redirects_to(&self, path: &str) -> bool {
        self.status == StatusCode::FOUND && self.location.as_deref() == Some(path)
    }

    /// Book ids linked from a dashboard, in display order.
    pub fn book_ids(&self) -> Vec<String> {
        const MARKER: &str = "href=\"/books/";
        self.body
            .match_indices(MARKER)
            .filter_map(|(at, _)| {
                let rest = &self.body[at + MARKER.len()..];
                rest.split('"').next().map(str::to_owned)
            })
            .collect()
    }
}

pub fn app_dependencies() -> AppDependencies {
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(in_memory_http_state()),
        session: SessionSettings {
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
            ttl: Duration::hours(2),
        },
    }
}

/// One browser. Clone the dependencies to give several browsers the same stores.
pub struct Browser {
    deps: AppDependencies,
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn new(deps: AppDependencies) -> Self {
        Self { deps, cookie: None }
    }

    pub fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    pub async fn get(&mut self, path: &str) -> Page {
        self.send(TestRequest::get().uri(path)).await
    }

    pub async fn post(&mut self, path: &str, form: &[(&str, &str)]) -> Page {
        self.send(TestRequest::post().uri(path).set_form(form)).await
    }

    pub async fn register(&mut self, username: &str, password: &str) -> Page {
        self.post("/register", &[("username", username), ("password", password)])
            .await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Page {
        self.post("/login", &[("username", username), ("password", password)])
            .await
    }

    pub async fn create_book(&mut self, title: &str, author: &str, review: &str) -> Page {
        self.post(
            "/create",
            &[
                ("bookTitle", title),
                ("authorName", author),
                ("reviewBody", review),
            ],
        )
        .await
    }

    async fn send(&mut self, mut request: TestRequest) -> Page {
        if let Some(cookie) = &self.cookie {
            request = request.cookie(cookie.clone());
        }
        let app = test::init_service(build_app(self.deps.clone())).await;
        let res = test::call_service(&app, request.to_request()).await;

        if let Some(cookie) = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
        {
            let removed = cookie.value().is_empty() || cookie.max_age() == Some(Duration::ZERO);
            self.cookie = (!removed).then(|| cookie.into_owned());
        }

        let header_text = |name: header::HeaderName| {
            res.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let status = res.status();
        let location = header_text(header::LOCATION);
        let trace_id = header_text(header::HeaderName::from_static(TRACE_ID_HEADER));
        let bytes = test::read_body(res).await;
        Page {
            status,
            location,
            trace_id,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
