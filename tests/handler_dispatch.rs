mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use ib_engine::controller::EchoController;
use ib_engine::routes::app_router;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ─── DISPATCH ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_dispatches_to_index() {
    let server = common::make_server("/ib");

    let response = server.get("/ib").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "controller": "ib/underlyings",
        "action": "index",
        "params": {},
        "target": "ib/underlyings#index"
    }));
}

#[tokio::test]
async fn test_edit_dispatch() {
    let server = common::make_server("/ib");

    let response = server.get("/ib/underlyings/1/edit").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["controller"], "ib/underlyings");
    assert_eq!(body["action"], "edit");
    assert_eq!(body["params"]["id"], "1");
}

#[tokio::test]
async fn test_update_and_destroy_dispatch() {
    let server = common::make_server("/ib");

    let response = server.put("/ib/underlyings/1").await;
    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["action"], "update");
    assert_eq!(body["params"]["id"], "1");

    let response = server.patch("/ib/underlyings/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["action"], "update");

    let response = server.delete("/ib/underlyings/1").await;
    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["action"], "destroy");
    assert_eq!(body["params"]["id"], "1");
}

#[tokio::test]
async fn test_create_dispatch() {
    let server = common::make_server("/ib");

    let response = server.post("/ib/underlyings").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["action"], "create");
}

#[tokio::test]
async fn test_new_dispatch() {
    let server = common::make_server("/ib");

    let response = server.get("/ib/underlyings/new").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["action"], "new");
    assert!(body["params"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_engine_mounted_at_root() {
    let server = common::make_server("/");

    let response = server.get("/underlyings/7").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["action"], "show");
    assert_eq!(body["params"]["id"], "7");
}

// ─── NOT FOUND ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let server = common::make_server("/ib");

    let response = server.get("/ib/underlyings/1/bogus").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(
        body["error"]["message"],
        "No route matches [GET] \"/ib/underlyings/1/bogus\""
    );
    assert_eq!(body["error"]["details"]["method"], "GET");
}

#[tokio::test]
async fn test_unsupported_method_returns_not_found() {
    let server = common::make_server("/ib");

    let response = server.method(Method::TRACE, "/ib/underlyings").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_path_outside_mount_returns_not_found() {
    let server = common::make_server("/ib");

    server
        .get("/underlyings")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/ibx/underlyings")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ─── SLASH POLICY ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_single_trailing_slash_is_tolerated() {
    let server = common::make_server("/ib");

    let response = server.get("/ib/").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["action"], "index");

    let response = server.get("/ib/underlyings/").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["action"], "index");

    let response = server.get("/ib/underlyings/1/edit/").await;
    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["action"], "edit");
    assert_eq!(body["params"]["id"], "1");
}

#[tokio::test]
async fn test_empty_segments_return_not_found() {
    let state = common::create_test_state("/ib", Arc::new(EchoController::new()));
    let app = app_router(state);

    for path in [
        "//ib/underlyings",
        "/ib//underlyings",
        "/ib/underlyings//edit",
        "/ib/underlyings//",
    ] {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["details"]["path"], path);
    }
}
