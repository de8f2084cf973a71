//! Shared harness: the full router over an in-memory database, plus a client
//! that keeps its session cookie between requests.
#![allow(dead_code)]

use api::auth::password;
use api::{db, AppState, Settings};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sqlx::SqlitePool;
use store::{Note, NoteDraft, User};
use tower::ServiceExt;
use tower_sessions::MemoryStore;

pub const PASSWORD: &str = "notes-password-42";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = db::connect_in_memory().await.unwrap();
        let state = AppState::new(pool.clone(), Settings::default());
        let router = api::router(state, MemoryStore::default());
        Self { router, pool }
    }

    pub fn client(&self) -> Client {
        Client {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Create `username` with [`PASSWORD`] directly in the database.
    pub async fn user(&self, username: &str) -> User {
        let hash = password::hash_password(PASSWORD).unwrap();
        db::users::create(&self.pool, username, &hash)
            .await
            .unwrap()
            .to_info()
    }

    /// A client already logged in as a fresh `username`.
    pub async fn logged_in(&self, username: &str) -> (User, Client) {
        let user = self.user(username).await;
        let mut client = self.client();
        let response = client
            .post("/auth/login/", &[("username", username), ("password", PASSWORD)])
            .await;
        assert_eq!(response.status, StatusCode::FOUND, "login as {username} failed");
        (user, client)
    }

    pub async fn note(&self, author: &User, title: &str, text: &str, slug: &str) -> Note {
        let draft = NoteDraft {
            title: title.into(),
            text: text.into(),
            slug: slug.into(),
        };
        db::notes::insert(&self.pool, author.id, &draft).await.unwrap()
    }

    pub async fn note_count(&self) -> i64 {
        db::notes::count(&self.pool).await.unwrap()
    }

    pub async fn only_note(&self) -> Note {
        let notes: Vec<Note> = sqlx::query_as("SELECT id, title, text, slug, author_id FROM notes")
            .fetch_all(&self.pool)
            .await
            .unwrap();
        assert_eq!(notes.len(), 1, "expected exactly one note");
        notes.into_iter().next().unwrap()
    }

    pub async fn find_note(&self, slug: &str) -> Option<Note> {
        sqlx::query_as("SELECT id, title, text, slug, author_id FROM notes WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .unwrap()
    }
}

pub struct Client {
    router: Router,
    cookie: Option<String>,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn assert_redirects(&self, location: &str) {
        assert_eq!(self.status, StatusCode::FOUND, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(location));
    }
}

impl Client {
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(form).unwrap();
        self.send(Method::POST, uri, Some(("application/x-www-form-urlencoded", body)))
            .await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// Any method, with an optional body of the given content type.
    pub async fn request(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<(&str, &str)>,
    ) -> TestResponse {
        let body = body.map(|(content_type, body)| (content_type, body.to_string()));
        self.send(method, uri, body).await
    }

    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<(&str, String)>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some((content_type, body)) => {
                request = request.header(header::CONTENT_TYPE, content_type);
                Body::from(body)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().trim();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
