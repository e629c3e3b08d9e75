//! Gallery browsing and administration against a mock backend

mod helpers;

use std::sync::Mutex;

use assert_matches::assert_matches;
use college_portal::models::GalleryUploadForm;
use college_portal::services::gallery::{DeleteOutcome, DELETE_SUCCESS, FETCH_FAILED, UPLOAD_SUCCESS};
use college_portal::validation::Attachment;
use college_portal::PortalError;
use helpers::*;
use serde_json::json;
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, ResponseTemplate,
};

fn two_images() -> serde_json::Value {
    json!([
        gallery_image_json("img-1", "Graduation 2024", "graduation"),
        gallery_image_json("img-2", "Chapel Service", "events"),
    ])
}

#[tokio::test]
async fn test_public_listing_and_category_filter() {
    let ctx = TestContext::new().await;
    ctx.backend.mock_gallery(two_images(), None).await;
    let gallery = &ctx.services.gallery;

    let images = gallery.refresh().await.unwrap();

    assert_eq!(images.len(), 2);
    assert_eq!(gallery.filtered("all").len(), 2);
    let graduation = gallery.filtered("graduation");
    assert_eq!(graduation.len(), 1);
    assert_eq!(graduation[0].id, "img-1");
    assert!(gallery.filtered("training").is_empty());
    assert!(gallery.image_url(&graduation[0]).ends_with("/uploads/img-1.jpg"));
}

#[tokio::test]
async fn test_listing_failure_is_reported() {
    let ctx = TestContext::new().await;
    ctx.backend.mock_status("GET", "/api/gallery", 503, json!({"detail": "down"})).await;

    assert!(ctx.services.gallery.refresh().await.is_err());
    assert_eq!(ctx.notifier.errors(), [FETCH_FAILED]);
}

#[tokio::test]
async fn test_confirmed_delete_refetches_gallery() {
    let ctx = TestContext::authenticated().await;
    ctx.backend.mock_gallery(two_images(), Some(1)).await;
    ctx.backend
        .mock_gallery(json!([gallery_image_json("img-2", "Chapel Service", "events")]), None)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/gallery/img-1"))
        .and(header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Image deleted successfully"})))
        .expect(1)
        .mount(&ctx.backend.server)
        .await;

    let gallery = &ctx.services.gallery;
    let image = gallery.refresh().await.unwrap().remove(0);
    let prompts = Mutex::new(Vec::new());
    let confirm = |prompt: &str| {
        prompts.lock().unwrap().push(prompt.to_string());
        true
    };

    let outcome = gallery.delete(&image, &confirm).await.unwrap();

    assert_matches!(outcome, DeleteOutcome::Deleted { remaining: Some(ref remaining) } if remaining.len() == 1);
    assert_eq!(
        prompts.lock().unwrap().as_slice(),
        ["Are you sure you want to delete \"Graduation 2024\"? This action cannot be undone."]
    );
    assert_eq!(gallery.images().len(), 1);
    assert_eq!(ctx.notifier.successes(), [DELETE_SUCCESS]);
    assert_eq!(ctx.backend.requests_to("/api/gallery").await.len(), 2);
}

#[tokio::test]
async fn test_delete_succeeds_even_when_reload_fails() {
    let ctx = TestContext::authenticated().await;
    ctx.backend.mock_gallery(two_images(), Some(1)).await;
    ctx.backend.mock_status("GET", "/api/gallery", 503, json!({"detail": "down"})).await;
    ctx.backend
        .mock_status("DELETE", "/api/gallery/img-1", 200, json!({"message": "Image deleted successfully"}))
        .await;

    let gallery = &ctx.services.gallery;
    let image = gallery.refresh().await.unwrap().remove(0);
    let outcome = gallery.delete(&image, &|_: &str| true).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted { remaining: None });
    assert_eq!(ctx.notifier.successes(), [DELETE_SUCCESS]);
    assert_eq!(ctx.notifier.errors(), [FETCH_FAILED]);
    assert_eq!(ctx.backend.requests_to("/api/gallery/img-1").await.len(), 1);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let ctx = TestContext::authenticated().await;
    ctx.backend.mock_gallery(two_images(), None).await;
    ctx.backend.forbid("DELETE", "/api/gallery/img-1").await;

    let gallery = &ctx.services.gallery;
    let image = gallery.refresh().await.unwrap().remove(0);
    let outcome = gallery.delete(&image, &|_: &str| false).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(ctx.notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_failed_delete_shows_backend_detail() {
    let ctx = TestContext::authenticated().await;
    ctx.backend.mock_gallery(two_images(), None).await;
    ctx.backend
        .mock_status("DELETE", "/api/gallery/img-1", 404, json!({"detail": "Image not found"}))
        .await;

    let gallery = &ctx.services.gallery;
    let image = gallery.refresh().await.unwrap().remove(0);
    let err = gallery.delete(&image, &|_: &str| true).await.unwrap_err();

    assert_matches!(err, PortalError::Api { status: 404, .. });
    assert_eq!(ctx.notifier.errors(), ["Image not found"]);
}

#[tokio::test]
async fn test_upload_is_multipart_with_bearer_token() {
    let ctx = TestContext::authenticated().await;
    ctx.backend.mock_gallery(json!([]), None).await;
    Mock::given(method("POST"))
        .and(path("/api/gallery/upload"))
        .and(header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str()))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("Matriculation"))
        .and(body_string_contains("name=\"category\""))
        .and(body_string_contains("name=\"image\"; filename=\"campus.jpg\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gallery_image_json("img-9", "Matriculation", "ceremonies")),
        )
        .expect(1)
        .mount(&ctx.backend.server)
        .await;

    let mut form = GalleryUploadForm {
        title: "Matriculation".into(),
        description: "New students".into(),
        category: "ceremonies".into(),
        image: Some(Attachment::new("campus.jpg", "image/jpeg", b"jpeg-bytes".to_vec())),
    };
    let created = ctx.services.gallery.upload(&mut form).await.unwrap();

    assert_eq!(created.id, "img-9");
    assert_eq!(form, GalleryUploadForm::default());
    assert_eq!(ctx.notifier.successes(), [UPLOAD_SUCCESS]);
    assert_eq!(ctx.backend.requests_to("/api/gallery").await.len(), 1);
}

#[tokio::test]
async fn test_upload_rejects_non_images_before_sending() {
    let ctx = TestContext::authenticated().await;
    ctx.backend.forbid("POST", "/api/gallery/upload").await;

    let mut form = GalleryUploadForm {
        title: "Brochure".into(),
        description: "Prospectus".into(),
        image: Some(Attachment::new("brochure.pdf", "application/pdf", vec![1, 2, 3])),
        ..Default::default()
    };
    let err = ctx.services.gallery.upload(&mut form).await.unwrap_err();

    assert_matches!(err, PortalError::Attachment(_));
    assert_eq!(ctx.notifier.errors(), ["Please upload only image files (JPEG, PNG, WebP)"]);
    assert_eq!(form.title, "Brochure");
}

#[tokio::test]
async fn test_upload_requires_an_image() {
    let ctx = TestContext::authenticated().await;
    ctx.backend.forbid("POST", "/api/gallery/upload").await;

    let mut form = GalleryUploadForm {
        title: "Matriculation".into(),
        description: "New students".into(),
        ..Default::default()
    };
    let err = ctx.services.gallery.upload(&mut form).await.unwrap_err();

    let PortalError::Validation(errors) = err else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.get("image"), Some("Please select an image file"));
}
