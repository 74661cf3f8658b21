mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower::util::ServiceExt; // for `oneshot`

use bibliotek::api;
use bibliotek::auth::{self, Role};
use bibliotek::models::admin::CreateAdmin;
use bibliotek::services::admin_service;

async fn setup_app() -> (Router, DatabaseConnection) {
    let db = common::setup().await;
    (api::api_router(db.clone()), db)
}

fn admin_token() -> String {
    auth::create_jwt("librarian", Role::Admin).expect("token")
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri).method("GET");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_needs_no_token() {
    let (app, _db) = setup_app().await;

    let response = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let (app, _db) = setup_app().await;

    let response = app.clone().oneshot(get("/users/all", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    let response = app
        .oneshot(get("/users/all", Some("not.a.token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_issues_token_and_rejects_bad_credentials() {
    let (app, db) = setup_app().await;
    admin_service::create_admin(
        &db,
        CreateAdmin {
            username: "librarian".to_owned(),
            email: "librarian@example.com".to_owned(),
            password: "hunter2".to_owned(),
        },
    )
    .await
    .unwrap();

    let payload = serde_json::json!({ "username": "librarian", "password": "hunter2" });
    let req = Request::builder()
        .uri("/auth/login")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let claims = auth::decode_jwt(json["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.sub, "librarian");

    let payload = serde_json::json!({ "username": "librarian", "password": "wrong" });
    let req = Request::builder()
        .uri("/auth/login")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid username or password.");
}

#[tokio::test]
async fn category_crud_over_http() {
    let (app, _db) = setup_app().await;
    let token = admin_token();

    // Create
    let payload = serde_json::json!({ "name": "Roman" });
    let response = app
        .clone()
        .oneshot(post_json("/categories", &token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let category_id = json["id"].as_i64().unwrap();
    assert_eq!(json["name"], "Roman");

    // Fetch it back
    let response = app
        .clone()
        .oneshot(get(&format!("/categories/{}", category_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Delete → 204
    let req = Request::builder()
        .uri(format!("/categories/{}", category_id))
        .method("DELETE")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn missing_record_maps_to_not_found_with_message() {
    let (app, _db) = setup_app().await;
    let token = admin_token();

    let response = app
        .oneshot(get("/categories/999", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category not found. id=999");
}

#[tokio::test]
async fn validation_failure_maps_to_bad_request() {
    let (app, _db) = setup_app().await;
    let token = admin_token();

    let payload = serde_json::json!({ "name": "   " });
    let response = app
        .oneshot(post_json("/categories", &token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category name must not be empty.");
}

#[tokio::test]
async fn pay_and_remove_over_http_returns_no_content_then_not_found() {
    let (app, db) = setup_app().await;
    let token = admin_token();
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let payload = serde_json::json!({
        "user_id": user.id,
        "reason": "Late return",
        "amount": 12.5
    });
    let response = app
        .clone()
        .oneshot(post_json("/penalties", &token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let penalty_id = json["id"].as_i64().unwrap();

    let delete = |id: i64| {
        Request::builder()
            .uri(format!("/penalties/{}", id))
            .method("DELETE")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(penalty_id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete(penalty_id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
