/// Admin handlers - unpaginated debug listings, all rows with all columns.
///
/// Each entity is projected through its explicit serde model rather than
/// reflected column metadata, so the exposed field set is fixed at compile
/// time.
use crate::db::{comment_repo, post_repo, reminder_repo, tag_repo, user_repo};
use crate::error::Result;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// GET /admin/posts
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let posts = post_repo::list_all_posts(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /admin/users
pub async fn list_users(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let users = user_repo::list_all_users(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /admin/comments
pub async fn list_comments(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let comments = comment_repo::list_all_comments(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /admin/tags
pub async fn list_tags(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let tags = tag_repo::list_all_tags(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(tags))
}

/// GET /admin/reminders
pub async fn list_reminders(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let reminders = reminder_repo::list_all_reminders(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(reminders))
}
