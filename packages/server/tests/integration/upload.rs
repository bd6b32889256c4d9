use crate::common::{TestApp, routes};

mod file_capture {
    use super::*;

    #[tokio::test]
    async fn jpeg_photo_is_captured_and_served() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_file("me.jpg", "image/jpeg", b"jpeg pixels".to_vec(), Some("try_on"), None)
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(res.body["submittable"].as_bool().unwrap());
        let preview_url = res.body["preview_url"].as_str().unwrap();
        assert!(preview_url.starts_with("/api/v1/media/"));

        let preview = app.get(preview_url).await;
        assert_eq!(preview.status, 200);
        assert_eq!(preview.text, "jpeg pixels");
    }

    #[tokio::test]
    async fn any_image_is_accepted_for_previews() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_file("room.png", "image/png", b"png pixels".to_vec(), Some("preview"), None)
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(res.body["submittable"].as_bool().unwrap());
    }

    #[tokio::test]
    async fn try_on_capture_requires_jpeg() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_file("me.png", "image/png", b"png pixels".to_vec(), Some("try_on"), None)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
        assert!(res.text.contains("JPEG"), "{}", res.text);
    }

    #[tokio::test]
    async fn non_image_files_are_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_file("notes.txt", "text/plain", b"not pixels".to_vec(), None, None)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn rejection_leaves_held_payload_untouched() {
        let app = TestApp::spawn().await;

        let first = app
            .upload_file("me.jpg", "image/jpeg", b"keep me".to_vec(), Some("try_on"), None)
            .await;
        assert_eq!(first.status, 201);
        let first_id = first.body["id"].as_str().unwrap().to_string();
        let first_preview = first.body["preview_url"].as_str().unwrap().to_string();

        // A rejected replacement must not disturb the held payload.
        let rejected = app
            .upload_file(
                "notes.txt",
                "text/plain",
                b"not pixels".to_vec(),
                Some("try_on"),
                Some(&first_id),
            )
            .await;
        assert_eq!(rejected.status, 400);

        let preview = app.get(&first_preview).await;
        assert_eq!(preview.status, 200);
        assert_eq!(preview.text, "keep me");
    }

    #[tokio::test]
    async fn replacement_is_wholesale() {
        let app = TestApp::spawn().await;

        let first = app
            .upload_file("one.jpg", "image/jpeg", b"first".to_vec(), Some("try_on"), None)
            .await;
        let first_id = first.body["id"].as_str().unwrap().to_string();
        let first_preview = first.body["preview_url"].as_str().unwrap().to_string();

        let second = app
            .upload_file(
                "two.jpg",
                "image/jpeg",
                b"second".to_vec(),
                Some("try_on"),
                Some(&first_id),
            )
            .await;
        assert_eq!(second.status, 201);

        // The prior payload and its stored preview are gone.
        assert_eq!(app.get(&first_preview).await.status, 404);
        let second_preview = second.body["preview_url"].as_str().unwrap();
        assert_eq!(app.get(second_preview).await.text, "second");
    }
}

mod url_capture {
    use super::*;

    #[tokio::test]
    async fn pasted_url_is_captured_verbatim() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_url("  https://photos.example.com/me.jpg  ", None, None)
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(
            res.body["preview_url"].as_str().unwrap(),
            "https://photos.example.com/me.jpg"
        );
        // URL payloads carry no raw binary.
        assert!(!res.body["submittable"].as_bool().unwrap());
    }

    #[tokio::test]
    async fn pasted_url_replaces_a_prior_file_payload() {
        let app = TestApp::spawn().await;

        let first = app
            .upload_file("me.jpg", "image/jpeg", b"jpeg pixels".to_vec(), Some("try_on"), None)
            .await;
        let first_id = first.body["id"].as_str().unwrap().to_string();
        let first_preview = first.body["preview_url"].as_str().unwrap().to_string();

        let second = app
            .upload_url("https://photos.example.com/new.jpg", None, Some(&first_id))
            .await;

        assert_eq!(second.status, 201);
        assert_eq!(
            second.body["preview_url"].as_str().unwrap(),
            "https://photos.example.com/new.jpg"
        );
        assert_eq!(app.get(&first_preview).await.status, 404);
    }

    #[tokio::test]
    async fn blank_url_is_a_silent_no_op() {
        let app = TestApp::spawn().await;

        let res = app.upload_url("   ", None, None).await;

        assert_eq!(res.status, 204);
        assert!(res.text.is_empty());
    }
}

mod clearing {
    use super::*;

    #[tokio::test]
    async fn clearing_removes_payload_and_preview() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_file("me.jpg", "image/jpeg", b"jpeg pixels".to_vec(), Some("try_on"), None)
            .await;
        let id = res.body["id"].as_str().unwrap().to_string();
        let preview_url = res.body["preview_url"].as_str().unwrap().to_string();

        let cleared = app.delete(&routes::upload(&id)).await;
        assert_eq!(cleared.status, 204);
        assert_eq!(app.get(&preview_url).await.status, 404);
    }

    #[tokio::test]
    async fn clearing_is_idempotent() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_file("me.jpg", "image/jpeg", b"jpeg pixels".to_vec(), Some("try_on"), None)
            .await;
        let id = res.body["id"].as_str().unwrap().to_string();

        assert_eq!(app.delete(&routes::upload(&id)).await.status, 204);
        assert_eq!(app.delete(&routes::upload(&id)).await.status, 204);
    }

    #[tokio::test]
    async fn missing_input_is_a_validation_error() {
        let app = TestApp::spawn().await;

        // Neither file nor url field.
        let res = app.upload_url_missing_fields().await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
    }
}
