//! 전체 라우터를 메모리 저장소 위에서 구동하는 API 테스트

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};

use photo_share_backend::config::AppConfig;
use photo_share_backend::core::registry::ServiceRegistry;
use photo_share_backend::routes::{configure_all_routes, configure_body_limits, not_found};

const BOUNDARY: &str = "----photo-share-test-boundary";

macro_rules! init_app {
    () => {
        init_app!(AppConfig::default())
    };
    ($config:expr) => {{
        let config: AppConfig = $config;
        let json_limit = config.json_limit_bytes;
        let registry = ServiceRegistry::in_memory(config);
        test::init_service(
            App::new()
                .app_data(web::Data::new(registry))
                .configure(configure_body_limits(json_limit))
                .configure(configure_all_routes)
                .default_service(web::to(not_found)),
        )
        .await
    }};
}

/// 상태 코드와 JSON 본문을 함께 돌려받는 요청 헬퍼
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let res = test::call_service(&$app, $req.to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }};
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, content_type, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn multipart_request(uri: &str, parts: &[Part<'_>]) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(multipart_body(parts))
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

macro_rules! register {
    ($app:expr, $name:expr, $email:expr) => {{
        let (status, body) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({ "name": $name, "email": $email, "password": "secret" }))
        );
        assert_eq!(status, StatusCode::CREATED);
        body["token"].as_str().unwrap().to_string()
    }};
}

macro_rules! upload {
    ($app:expr, $token:expr, $title:expr) => {{
        let (status, body) = send!(
            $app,
            multipart_request(
                "/api/images",
                &[
                    Part::Text("title", $title),
                    Part::File("image", "photo.png", "image/png", b"\x89PNG"),
                ],
            )
            .insert_header(bearer(&$token))
        );
        assert_eq!(status, StatusCode::CREATED);
        body
    }};
}

#[actix_web::test]
async fn test_root_health_and_unknown_route() {
    let app = init_app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(test::read_body(res).await, "API is running...");

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["port"], 5000);
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/nothing-here"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[actix_web::test]
async fn test_register_json_then_duplicate() {
    let app = init_app!();

    let (status, first) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Alice", "email": "alice@example.com", "password": "secret" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["name"], "Alice");
    assert_eq!(first["profilePicture"], "");
    assert!(first["_id"].as_str().is_some());
    assert!(first["token"].as_str().is_some());
    assert!(first.get("password").is_none());

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Mallory", "email": "alice@example.com", "password": "other" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");

    // 첫 번째 계정은 그대로 로그인 가능
    let (status, login) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "email": "alice@example.com", "password": "secret" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["_id"], first["_id"]);
    assert_eq!(login["name"], "Alice");
}

#[actix_web::test]
async fn test_register_multipart_with_profile_picture() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        multipart_request(
            "/api/users",
            &[
                Part::Text("name", "Alice"),
                Part::Text("email", "alice@example.com"),
                Part::Text("password", "secret"),
                Part::File("profilePicture", "me.png", "image/png", &[0x89, 0x50]),
            ],
        )
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["profilePicture"], "data:image/png;base64,iVA=");
    assert!(body["token"].as_str().is_some());
}

#[actix_web::test]
async fn test_register_validation_errors() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Alice", "email": "not-an-email", "password": "secret" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide a valid email address");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some());
}

#[actix_web::test]
async fn test_login_failures_are_indistinguishable() {
    let app = init_app!();
    register!(app, "Alice", "alice@example.com");

    let (wrong_status, wrong_password) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "email": "alice@example.com", "password": "nope" }))
    );
    let (unknown_status, unknown_email) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "email": "ghost@example.com", "password": "secret" }))
    );

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password["message"], "Invalid email or password");
    assert_eq!(wrong_password, unknown_email);
}

#[actix_web::test]
async fn test_login_with_urlencoded_form() {
    let app = init_app!();
    register!(app, "Alice", "alice@example.com");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_form([("email", "alice@example.com"), ("password", "secret")])
    );

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());
}

#[actix_web::test]
async fn test_profile_requires_token() {
    let app = init_app!();
    let token = register!(app, "Alice", "alice@example.com");

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/users/profile").insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("token").is_none());

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/users/profile"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized, no token");

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/users/profile").insert_header(bearer("garbage"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn test_images_listed_newest_first_per_owner() {
    let app = init_app!();
    let alice = register!(app, "Alice", "alice@example.com");
    let bob = register!(app, "Bob", "bob@example.com");

    let first = upload!(app, alice, "t1");
    upload!(app, alice, "t2");
    upload!(app, alice, "t3");

    assert_eq!(first["title"], "t1");
    assert_eq!(first["description"], "");
    assert_eq!(first["imageUrl"], "data:image/png;base64,iVBORw==");
    assert!(first["createdAt"].as_str().unwrap().ends_with('Z'));

    let (status, listed) = send!(
        app,
        test::TestRequest::get().uri("/api/images").insert_header(bearer(&alice))
    );
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|image| image["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["t3", "t2", "t1"]);

    // 다른 사용자의 토큰으로는 보이지 않음
    let (status, listed) = send!(
        app,
        test::TestRequest::get().uri("/api/images").insert_header(bearer(&bob))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn test_upload_without_file_is_rejected() {
    let app = init_app!();
    let token = register!(app, "Alice", "alice@example.com");

    let (status, body) = send!(
        app,
        multipart_request(
            "/api/images",
            &[Part::Text("title", "No file"), Part::Text("description", "oops")],
        )
        .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No image file provided");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/images")
            .insert_header(bearer(&token))
            .set_json(json!({ "title": "json body" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No image file provided");
}

#[actix_web::test]
async fn test_upload_over_limit_is_payload_too_large() {
    let app = init_app!(AppConfig {
        max_upload_bytes: 8,
        ..AppConfig::default()
    });
    let token = register!(app, "Alice", "alice@example.com");

    let (status, body) = send!(
        app,
        multipart_request(
            "/api/images",
            &[Part::File("image", "big.png", "image/png", &[0u8; 64])],
        )
        .insert_header(bearer(&token))
    );

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["message"], "File too large");
}

#[actix_web::test]
async fn test_delete_is_owner_only_and_single_shot() {
    let app = init_app!();
    let alice = register!(app, "Alice", "alice@example.com");
    let bob = register!(app, "Bob", "bob@example.com");

    let image = upload!(app, alice, "mine");
    let uri = format!("/api/images/{}", image["_id"].as_str().unwrap());

    let (status, body) = send!(app, test::TestRequest::delete().uri(&uri).insert_header(bearer(&bob)));
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not authorized");

    let (_, listed) = send!(app, test::TestRequest::get().uri("/api/images").insert_header(bearer(&alice)));
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, body) = send!(app, test::TestRequest::delete().uri(&uri).insert_header(bearer(&alice)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Image deleted successfully");

    let (_, listed) = send!(app, test::TestRequest::get().uri("/api/images").insert_header(bearer(&alice)));
    assert_eq!(listed, json!([]));

    let (status, body) = send!(app, test::TestRequest::delete().uri(&uri).insert_header(bearer(&alice)));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Image not found");

    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri("/api/images/not-an-id").insert_header(bearer(&alice))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_bodies_above_default_payload_size_reach_handlers() {
    let app = init_app!();
    let large = "x".repeat(300 * 1024);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "email": "alice@example.com", "password": large }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": large, "email": "alice@example.com", "password": "secret" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"].as_str().unwrap().len(), 300 * 1024);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_form([("email", "alice@example.com"), ("password", large.as_str())])
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_web::test]
async fn test_body_over_limit_is_payload_too_large_with_message() {
    let app = init_app!(AppConfig {
        json_limit_bytes: 1024,
        ..AppConfig::default()
    });
    let large = "x".repeat(4096);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "email": "alice@example.com", "password": large }))
    );
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["message"], "Request body too large");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_form([("name", large.as_str()), ("email", "alice@example.com"), ("password", "secret")])
    );
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["message"], "Request body too large");
}

#[actix_web::test]
async fn test_register_with_unsupported_content_type_is_bad_request() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .set_payload("name=Alice")
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some());
}

#[actix_web::test]
async fn test_upload_title_is_stored_as_given() {
    let app = init_app!();
    let token = register!(app, "Alice", "alice@example.com");

    let padded = upload!(app, token, "  Sunset  ");
    assert_eq!(padded["title"], "  Sunset  ");

    let blank = upload!(app, token, "   ");
    assert_eq!(blank["title"], "Untitled");
}
