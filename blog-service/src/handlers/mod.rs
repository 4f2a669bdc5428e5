/// HTTP handlers for the blog service
///
/// - Posts: listing, detail, tag/user filtering
/// - Comments: the redirect-after-post submission path
/// - Users: paginated JSON listing and creation
/// - Admin: unpaginated debug listings of every entity
pub mod admin;
pub mod comments;
pub mod posts;
pub mod users;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// GET / - redirect to the blog home
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/blog/"))
        .finish()
}

/// Fallback for unmatched routes and explicit not-found signals
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "page not found",
    }))
}

/// GET /health - liveness summary backed by a database round-trip
pub async fn health(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "blog-service",
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_index_redirects_to_blog_home() {
        let app = test::init_service(App::new().route("/", web::get().to(index))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/blog/")
        );
    }

    #[actix_web::test]
    async fn test_unmatched_route_answers_json_404() {
        let app = test::init_service(
            App::new()
                .route("/", web::get().to(index))
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/no/such/page").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
