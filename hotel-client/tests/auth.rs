mod common;

use common::Backend;
use hotel_client::access::{self, Area, Capability};
use hotel_client::auth;
use hotel_client::{ClientError, HttpClient, Session, SessionStore, UserRole};

#[tokio::test]
async fn login_sets_token_for_later_requests() {
    let backend = Backend::new();
    let mut http = backend.client();

    let session = auth::login(&mut http, " marta@hotel.test ", "secret").await.unwrap();
    assert_eq!(session.token, "tok-123");
    assert_eq!(session.user.role(), UserRole::Manager);
    assert_eq!(session.user.email.as_deref(), Some("marta@hotel.test"));
    assert_eq!(http.token(), Some("tok-123"));

    let _: serde_json::Value = http.get("/api/departments").await.unwrap();
    let last = backend.requests().pop().unwrap();
    assert_eq!(last.authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn bad_password_keeps_server_message() {
    let backend = Backend::new();
    let mut http = backend.client();

    let err = auth::login(&mut http, "marta@hotel.test", "wrong").await.unwrap_err();
    assert!(matches!(&err, ClientError::Api { status: 401, .. }));
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert_eq!(http.token(), None);
}

#[tokio::test]
async fn logout_forgets_token() {
    let backend = Backend::new();
    let mut http = backend.client();
    auth::login(&mut http, "marta@hotel.test", "secret").await.unwrap();

    auth::logout(&mut http).await.unwrap();
    assert_eq!(http.token(), None);
    assert_eq!(backend.requests().pop().unwrap().path, "/api/auth/logout");

    // signed out already: nothing to send
    let before = backend.requests().len();
    auth::logout(&mut http).await.unwrap();
    assert_eq!(backend.requests().len(), before);
}

#[tokio::test]
async fn stored_session_drives_role_gating() {
    let backend = Backend::new();
    let mut http = backend.client();
    let session = auth::login(&mut http, "marta@hotel.test", "secret").await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    store.save(&session).unwrap();

    let restored: Session = store.load().unwrap();
    let user = Some(&restored.user);
    assert!(access::require(user, Capability::Manage(Area::Restaurant)).is_ok());
    assert!(matches!(
        access::require(user, Capability::Delete(Area::Staff)),
        Err(ClientError::Forbidden(_))
    ));
    assert!(matches!(
        access::require(None, Capability::View(Area::Spa)),
        Err(ClientError::Unauthorized)
    ));
}
