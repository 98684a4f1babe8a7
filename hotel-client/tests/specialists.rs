mod common;

use common::{Backend, specialist};
use hotel_client::PendingImage;
use shared::models::SpaSpecialist;

#[tokio::test]
async fn new_photo_replaces_the_stored_one() {
    let backend = Backend::new()
        .with_specialists(vec![specialist("s1", "Claire", Some("/uploads/claire.jpg"))]);
    let (mut screen, _) = backend.screen_over::<SpaSpecialist>(backend.client_with_token("tok-9"));
    screen.load().await.unwrap();

    let form = screen.open_edit("s1").unwrap();
    assert_eq!(form.images.existing(), ["/uploads/claire.jpg".to_string()]);
    form.images
        .add(PendingImage::new("claire-2026.png", "image/png", vec![0x89, 0x50]));
    assert!(form.images.existing().is_empty());
    assert_eq!(form.images.len(), 1);
    let saved = screen.submit_form().await.unwrap();

    let put = backend.requests_with("PUT").pop().unwrap();
    assert_eq!(put.path, "/api/specialists/s1");
    assert_eq!(put.authorization.as_deref(), Some("Bearer tok-9"));
    let body = put.body.unwrap();
    assert!(body["fields"].get("existingPhoto").is_none());
    assert_eq!(body["fields"]["specializations"], r#"["massage"]"#);
    assert_eq!(body["files"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["files"][0]["field"], "photo");
    assert_eq!(body["files"][0]["fileName"], "claire-2026.png");

    assert_eq!(saved.photo.as_deref(), Some("/uploads/claire-2026.png"));
    assert_eq!(backend.specialists()[0]["photo"], "/uploads/claire-2026.png");
}

#[tokio::test]
async fn untouched_photo_is_sent_back_as_existing() {
    let backend = Backend::new()
        .with_specialists(vec![specialist("s1", "Claire", Some("/uploads/claire.jpg"))]);
    let (mut screen, notifier) = backend.screen::<SpaSpecialist>();
    screen.load().await.unwrap();

    let form = screen.open_edit("s1").unwrap();
    form.draft.bio = "Aromatherapy and reflexology".into();
    assert!(!form.images.has_pending());
    let saved = screen.submit_form().await.unwrap();

    let body = backend.last_body("PUT").unwrap();
    assert_eq!(body["fields"]["existingPhoto"], "/uploads/claire.jpg");
    assert_eq!(body["fields"]["bio"], "Aromatherapy and reflexology");
    assert!(body["files"].as_array().is_some_and(Vec::is_empty));

    assert_eq!(saved.photo.as_deref(), Some("/uploads/claire.jpg"));
    assert_eq!(screen.list().find("s1").map(|s| s.bio.as_str()), Some("Aromatherapy and reflexology"));
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Specialist updated successfully".to_string())
    );
}
