/// HTTP surface tests that run against a lazy connection pool: everything
/// exercised here resolves before a database connection is acquired, or
/// exercises the degrade path when acquisition fails.
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use blog_service::{handlers, AppError};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

fn lazy_pool() -> PgPool {
    // Never connected by the validation paths; the comment degrade test
    // wants acquisition to fail fast.
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgresql://127.0.0.1:1/unreachable")
        .expect("lazy pool construction should not fail")
}

async fn setup_test_app(
    pool: PgPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .app_data(json_config)
            .route("/", web::get().to(handlers::index))
            .service(
                web::scope("/blog")
                    .route("/users", web::post().to(handlers::users::add_user))
                    .route(
                        "/post/{post_id}",
                        web::post().to(handlers::comments::create_comment),
                    ),
            )
            .default_service(web::route().to(handlers::not_found)),
    )
    .await
}

#[actix_web::test]
async fn test_comment_with_empty_name_is_rejected_before_persistence() {
    let app = setup_test_app(lazy_pool()).await;

    let req = test::TestRequest::post()
        .uri("/blog/post/1")
        .set_json(serde_json::json!({"name": "", "text": "Nice post!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["fields"].get("name").is_some());
}

#[actix_web::test]
async fn test_comment_with_empty_text_is_rejected_before_persistence() {
    let app = setup_test_app(lazy_pool()).await;

    let req = test::TestRequest::post()
        .uri("/blog/post/1")
        .set_json(serde_json::json!({"name": "Alice", "text": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["fields"].get("text").is_some());
}

#[actix_web::test]
async fn test_comment_persistence_failure_still_redirects() {
    let app = setup_test_app(lazy_pool()).await;

    // Valid submission against an unreachable database: the write fails,
    // is rolled back, and the request still completes with the redirect.
    let req = test::TestRequest::post()
        .uri("/blog/post/42")
        .set_json(serde_json::json!({"name": "Alice", "text": "Nice post!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/blog/post/42")
    );
}

#[actix_web::test]
async fn test_create_user_with_unknown_field_is_rejected() {
    let app = setup_test_app(lazy_pool()).await;

    let req = test::TestRequest::post()
        .uri("/blog/users")
        .set_json(serde_json::json!({
            "username": "bob",
            "full_name": "Bob Smith",
            "role": "admin",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_index_redirects_and_unmatched_routes_404() {
    let app = setup_test_app(lazy_pool()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let req = test::TestRequest::get().uri("/definitely/not/here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
