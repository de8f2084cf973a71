mod common;

use api::urls::{reverse, Route};
use axum::http::{Method, StatusCode};
use common::{TestApp, PASSWORD};
use store::slugify;

const TITLE: &str = "Заголовок";
const TEXT: &str = "Текст";
const SLUG: &str = "1";

const NEW_TITLE: &str = "Заголовок2";
const NEW_TEXT: &str = "Текст2";
const NEW_SLUG: &str = "2";

fn form<'a>(title: &'a str, text: &'a str, slug: &'a str) -> [(&'static str, &'a str); 3] {
    [("title", title), ("text", text), ("slug", slug)]
}

#[tokio::test]
async fn test_anonymous_user_cant_create_note() {
    let app = TestApp::new().await;
    let url = reverse("notes:add", &[]).unwrap();

    let response = app.client().post(&url, &form(TITLE, TEXT, SLUG)).await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(app.note_count().await, 0);
}

#[tokio::test]
async fn test_user_can_create_note() {
    let app = TestApp::new().await;
    let (user, mut client) = app.logged_in("Пользователь").await;

    let response = client.post("/add/", &form(TITLE, TEXT, SLUG)).await;
    response.assert_redirects(&Route::Success.path());

    assert_eq!(app.note_count().await, 1);
    let note = app.only_note().await;
    assert_eq!(note.title, TITLE);
    assert_eq!(note.text, TEXT);
    assert_eq!(note.slug, SLUG);
    assert_eq!(note.author_id, user.id);
}

#[tokio::test]
async fn test_cannot_create_note_with_duplicate_slug() {
    let app = TestApp::new().await;
    let (_, mut client) = app.logged_in("Пользователь").await;

    client.post("/add/", &form(TITLE, TEXT, SLUG)).await;
    assert_eq!(app.note_count().await, 1);

    let response = client.post("/add/", &form(TITLE, TEXT, SLUG)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("1 - this slug already exists, please choose a unique one!"));
    assert_eq!(app.note_count().await, 1);
}

#[tokio::test]
async fn test_duplicate_slug_of_another_author_is_rejected() {
    let app = TestApp::new().await;
    let other = app.user("Другой").await;
    app.note(&other, TITLE, TEXT, SLUG).await;
    let (_, mut client) = app.logged_in("Пользователь").await;

    let response = client.post("/add/", &form("Другое", TEXT, SLUG)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.note_count().await, 1);
}

#[tokio::test]
async fn test_slug_auto_generated_if_not_written() {
    let app = TestApp::new().await;
    let (_, mut client) = app.logged_in("Пользователь").await;

    let response = client
        .post("/add/", &[("title", TITLE), ("text", TEXT)])
        .await;
    response.assert_redirects("/done/");

    let note = app.only_note().await;
    assert_eq!(note.slug, slugify(TITLE));
    assert_eq!(note.slug, "zagolovok");
}

#[tokio::test]
async fn test_generated_slug_is_truncated() {
    let app = TestApp::new().await;
    let (_, mut client) = app.logged_in("Пользователь").await;
    let title = "щ".repeat(60);

    client.post("/add/", &form(&title, TEXT, "")).await;
    let note = app.only_note().await;
    assert_eq!(note.slug.len(), 100);
    assert!(note.slug.chars().all(|c| c.is_ascii_lowercase()));
}

#[tokio::test]
async fn test_invalid_note_form_is_rerendered() {
    let app = TestApp::new().await;
    let (_, mut client) = app.logged_in("Пользователь").await;

    let response = client.post("/add/", &form("", TEXT, "bad slug")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("class=\"errorlist\""));
    assert_eq!(app.note_count().await, 0);
}

struct EditDelete {
    app: TestApp,
    author: common::Client,
    reader: common::Client,
    edit_url: String,
    delete_url: String,
}

async fn edit_delete() -> EditDelete {
    let app = TestApp::new().await;
    let (author, author_client) = app.logged_in("Автор поста").await;
    let (_, reader_client) = app.logged_in("Читатель").await;
    let note = app.note(&author, TITLE, TEXT, SLUG).await;

    EditDelete {
        edit_url: reverse("notes:edit", &[note.slug.as_str()]).unwrap(),
        delete_url: reverse("notes:delete", &[note.slug.as_str()]).unwrap(),
        app,
        author: author_client,
        reader: reader_client,
    }
}

#[tokio::test]
async fn test_author_can_delete_note() {
    let mut t = edit_delete().await;
    let response = t.author.delete(&t.delete_url).await;
    response.assert_redirects(&reverse("notes:success", &[]).unwrap());
    assert_eq!(t.app.note_count().await, 0);
}

#[tokio::test]
async fn test_author_can_delete_note_with_form_post() {
    let mut t = edit_delete().await;
    let response = t.author.post(&t.delete_url, &[]).await;
    response.assert_redirects("/done/");
    assert_eq!(t.app.note_count().await, 0);
}

#[tokio::test]
async fn test_user_cant_delete_note_of_another_user() {
    let mut t = edit_delete().await;
    let response = t.reader.delete(&t.delete_url).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let response = t.reader.post(&t.delete_url, &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(t.app.note_count().await, 1);
}

#[tokio::test]
async fn test_author_can_edit_note() {
    let mut t = edit_delete().await;
    let response = t
        .author
        .post(&t.edit_url, &form(NEW_TITLE, NEW_TEXT, NEW_SLUG))
        .await;
    response.assert_redirects("/done/");

    let note = t.app.only_note().await;
    assert_eq!(note.title, NEW_TITLE);
    assert_eq!(note.text, NEW_TEXT);
    assert_eq!(note.slug, NEW_SLUG);
}

#[tokio::test]
async fn test_author_can_keep_slug_when_editing() {
    let mut t = edit_delete().await;
    let response = t.author.post(&t.edit_url, &form(NEW_TITLE, NEW_TEXT, SLUG)).await;
    response.assert_redirects("/done/");
    assert_eq!(t.app.only_note().await.title, NEW_TITLE);
}

#[tokio::test]
async fn test_edit_rejects_slug_of_another_note() {
    let mut t = edit_delete().await;
    let author = t.app.user("Третий").await;
    t.app.note(&author, "Другая", TEXT, NEW_SLUG).await;

    let response = t.author.post(&t.edit_url, &form(NEW_TITLE, NEW_TEXT, NEW_SLUG)).await;
    assert_eq!(response.status, StatusCode::OK);
    let note = t.app.find_note(SLUG).await.unwrap();
    assert_eq!(note.title, TITLE);
}

#[tokio::test]
async fn test_user_cant_edit_note_of_another_user() {
    let mut t = edit_delete().await;
    let response = t
        .reader
        .post(&t.edit_url, &form(NEW_TITLE, NEW_TEXT, NEW_SLUG))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let note = t.app.only_note().await;
    assert_eq!(note.title, TITLE);
    assert_eq!(note.text, TEXT);
    assert_eq!(note.slug, SLUG);
}

#[tokio::test]
async fn test_anonymous_edit_redirects_without_changes() {
    let t = edit_delete().await;
    let response = t
        .app
        .client()
        .post(&t.edit_url, &form(NEW_TITLE, NEW_TEXT, NEW_SLUG))
        .await;
    response.assert_redirects(&format!("/auth/login/?next={}", t.edit_url));
    assert_eq!(t.app.only_note().await.title, TITLE);
}

#[tokio::test]
async fn test_other_methods_on_foreign_note_are_not_found() {
    let mut t = edit_delete().await;
    let detail_url = reverse("notes:detail", &[SLUG]).unwrap();

    let response = t.reader.post(&detail_url, &form(NEW_TITLE, NEW_TEXT, NEW_SLUG)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let response = t.reader.request(Method::PUT, &t.edit_url, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let response = t.reader.request(Method::PATCH, &t.delete_url, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let note = t.app.only_note().await;
    assert_eq!(note.title, TITLE);
    assert_eq!(note.slug, SLUG);
}

#[tokio::test]
async fn test_other_methods_on_own_note_are_not_allowed() {
    let mut t = edit_delete().await;
    let detail_url = reverse("notes:detail", &[SLUG]).unwrap();

    let response = t.author.post(&detail_url, &form(NEW_TITLE, NEW_TEXT, NEW_SLUG)).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    let response = t.author.request(Method::PUT, &t.edit_url, None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(t.app.only_note().await.title, TITLE);
}

#[tokio::test]
async fn test_other_methods_redirect_anonymous_client() {
    let t = edit_delete().await;
    let mut client = t.app.client();
    let detail_url = reverse("notes:detail", &[SLUG]).unwrap();

    let response = client.post(&detail_url, &form(NEW_TITLE, NEW_TEXT, NEW_SLUG)).await;
    response.assert_redirects(&format!("/auth/login/?next={detail_url}"));

    let response = client.delete(&t.edit_url).await;
    response.assert_redirects(&format!("/auth/login/?next={}", t.edit_url));

    for url in ["/notes/", "/done/", "/add/"] {
        let response = client.request(Method::PUT, url, None).await;
        response.assert_redirects(&format!("/auth/login/?next={url}"));
    }
    assert_eq!(t.app.only_note().await.title, TITLE);
}

#[tokio::test]
async fn test_foreign_edit_with_unreadable_body_is_not_found() {
    let mut t = edit_delete().await;
    let body = Some(("application/json", r#"{"title": "x"}"#));

    let response = t.reader.request(Method::POST, &t.edit_url, body).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = t.author.request(Method::POST, &t.edit_url, body).await;
    assert!(response.status.is_client_error());
    assert_ne!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(t.app.only_note().await.title, TITLE);
}

#[tokio::test]
async fn test_signup_then_login() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client
        .post(
            "/auth/signup/",
            &[("username", "Новый"), ("password1", PASSWORD), ("password2", PASSWORD)],
        )
        .await;
    response.assert_redirects("/auth/login/");

    let response = client
        .post(
            "/auth/login/",
            &[("username", "Новый"), ("password", PASSWORD), ("next", "/add/")],
        )
        .await;
    response.assert_redirects("/add/");
    assert_eq!(client.get("/add/").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_signup_rejects_taken_username_and_weak_password() {
    let app = TestApp::new().await;
    app.user("Автор").await;
    let mut client = app.client();

    let response = client
        .post(
            "/auth/signup/",
            &[("username", "Автор"), ("password1", PASSWORD), ("password2", PASSWORD)],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("A user with that username already exists."));

    let response = client
        .post(
            "/auth/signup/",
            &[("username", "Новый"), ("password1", "12345678"), ("password2", "12345678")],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("entirely numeric"));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::new().await;
    app.user("Автор").await;
    let mut client = app.client();

    let response = client
        .post("/auth/login/", &[("username", "Автор"), ("password", "wrong-password")])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Please enter a correct username and password."));

    let response = client.get("/notes/").await;
    assert_eq!(response.status, StatusCode::FOUND);
}

#[tokio::test]
async fn test_login_ignores_external_next() {
    let app = TestApp::new().await;
    app.user("Автор").await;

    let response = app
        .client()
        .post(
            "/auth/login/",
            &[("username", "Автор"), ("password", PASSWORD), ("next", "//evil.example/")],
        )
        .await;
    response.assert_redirects("/");
}
