//! Two-step downloads: metadata request, then content fetch.


use fixtures::*;
use http::StatusCode;
use serde_json::json;
use telegraph_bot::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn size(file_id: &str, file_path: Option<&str>) -> serde_json::Value {
    match file_path {
        Some(file_path) => json!({
            "file_id": file_id, "width": 160, "height": 160, "file_path": file_path
        }),
        None => json!({"file_id": file_id, "width": 160, "height": 160}),
    }
}

async fn mount_content(server: &MockServer, file_path: &str, body: &'static [u8], hits: u64) {
    Mock::given(method("GET"))
        .and(path(content_path(file_path)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_profile_photo_picks_first_available_path() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("getUserProfilePhotos")))
        .and(query_param("user_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "total_count": 2,
            "photos": [
                [size("s0", None), size("s1", Some("A"))],
                [size("s2", Some("B"))]
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;
    mount_content(&server, "A", b"photo-a", 1).await;
    mount_content(&server, "B", b"photo-b", 0).await;

    let content = bot_for(&server)
        .get_user_profile_photos(RequestGetUserProfilePhotos::new(UserId(7)))
        .download()
        .await
        .unwrap();
    assert_eq!(&content.result[..], b"photo-a");
    assert_eq!(content.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_profile_photo_without_candidates_is_not_found() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("getUserProfilePhotos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "total_count": 1,
            "photos": [[size("s0", Some(""))]]
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::path_regex("^/file/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = bot_for(&server)
        .get_user_profile_photos(RequestGetUserProfilePhotos::new(UserId(7)))
        .download()
        .await
        .unwrap_err();
    assert!(matches!(err, BotError::NotFound(_)));
}

#[tokio::test]
async fn test_profile_photo_metadata_error_short_circuits() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("getUserProfilePhotos")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: user not found"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::path_regex("^/file/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = bot_for(&server)
        .get_user_profile_photos(RequestGetUserProfilePhotos::new(UserId(7)))
        .download()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(err.to_string().contains("user not found"));
}

#[tokio::test]
async fn test_profile_photo_limit_and_offset() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("getUserProfilePhotos")))
        .and(query_param("user_id", "7"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "total_count": 1,
            "photos": [[size("s0", Some("photos/p.jpg"))]]
        }))))
        .expect(1)
        .mount(&server)
        .await;
    mount_content(&server, "photos/p.jpg", b"jpeg", 1).await;

    let content = bot_for(&server)
        .get_user_profile_photos(RequestGetUserProfilePhotos::new(UserId(7)))
        .offset(0)
        .limit(1)
        .download()
        .await
        .unwrap();
    assert_eq!(&content.result[..], b"jpeg");
}

#[tokio::test]
async fn test_get_file_download() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("getFile")))
        .and(query_param("file_id", "BQADBAAD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "file_id": "BQADBAAD",
            "file_size": 3,
            "file_path": "documents/file_1.txt"
        }))))
        .expect(1)
        .mount(&server)
        .await;
    mount_content(&server, "documents/file_1.txt", b"abc", 1).await;

    let content = bot_for(&server)
        .get_file(RequestGetFile::new(FileId::from("BQADBAAD")))
        .download()
        .await
        .unwrap();
    assert_eq!(&content.result[..], b"abc");
}

#[tokio::test]
async fn test_get_file_without_path_is_not_found() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("getFile")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "file_id": "BQADBAAD",
            "file_path": ""
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::path_regex("^/file/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = bot_for(&server)
        .get_file(RequestGetFile::new(FileId::from("BQADBAAD")))
        .download()
        .await
        .unwrap_err();
    assert!(matches!(err, BotError::NotFound(_)));
}

#[tokio::test]
async fn test_content_not_found_is_status_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(content_path("documents/gone.txt")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let err = bot_for(&server)
        .get_content("documents/gone.txt")
        .commit()
        .await
        .unwrap_err();
    assert!(matches!(err, BotError::HttpStatus { api: None, .. }));
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(&err.response().unwrap().body[..], b"Not Found");
}

#[tokio::test]
async fn test_get_file_download_escapes_reserved_chars() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("getFile")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "file_id": "BQADBAAD",
            "file_path": "documents/a#b?.pdf"
        }))))
        .expect(1)
        .mount(&server)
        .await;
    mount_content(&server, "documents/a%23b%3F.pdf", b"pdf", 1).await;
    mount_content(&server, "documents/a", b"wrong", 0).await;

    let content = bot_for(&server)
        .get_file(RequestGetFile::new(FileId::from("BQADBAAD")))
        .download()
        .await
        .unwrap();
    assert_eq!(&content.result[..], b"pdf");
}
