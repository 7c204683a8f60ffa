use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = api_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let response = api_routes()
        .oneshot(Request::builder().uri("/upload").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = api_routes()
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =========================================================================
// Page routes
// =========================================================================

fn pages() -> Router {
    page_routes(LeptosOptions::builder().output_name("safe-upload").build())
}

async fn render(path: &str) -> (StatusCode, String) {
    let response = pages().oneshot(Request::builder().uri(path).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test(flavor = "multi_thread")]
async fn root_renders_home_page() {
    let (status, html) = render("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("home-page"));
    assert!(!html.contains("login-form"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_path_renders_login_form() {
    let (status, html) = render("/login").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("login-form"));
    assert!(!html.contains("home-page"));
}

#[tokio::test(flavor = "multi_thread")]
async fn other_paths_render_nothing() {
    for path in ["/home", "/login/", "/upload"] {
        let (status, html) = render(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(!html.contains("home-page"), "{path}");
        assert!(!html.contains("login-form"), "{path}");
    }
}
