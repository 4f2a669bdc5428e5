/// Comment handlers - the redirect-after-post submission path
use crate::error::Result;
use crate::services::CommentService;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

/// Request body for submitting a comment
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

/// POST /blog/post/{post_id} - append a comment, then redirect back to the
/// post page. A persistence failure is rolled back and logged; the request
/// still completes with the same redirect.
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<i32>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let post_id = post_id.into_inner();
    let service = CommentService::new(pool.get_ref().clone());

    match service.add_comment(post_id, &req.name, &req.text).await {
        Ok(comment) => {
            tracing::info!(post_id, comment_id = comment.id, "Comment added");
        }
        Err(err) => {
            tracing::error!(post_id, error = %err, "Error adding comment");
        }
    }

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/blog/post/{}", post_id)))
        .finish())
}
