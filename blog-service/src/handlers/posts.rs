/// Post handlers - the rendered-page surface of the blog, as JSON payloads
use crate::config::Config;
use crate::error::Result;
use crate::models::{Comment, Post, Tag, TagWithCount, User};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;

/// Payload for the paginated post listing, sidebar included.
#[derive(Debug, Serialize)]
pub struct BlogPageResponse {
    pub posts: Vec<Post>,
    pub total_pages: i64,
    pub current_page: i64,
    pub recent: Vec<Post>,
    pub top_tags: Vec<TagWithCount>,
}

/// Payload for the post detail page.
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: Post,
    pub tags: Vec<Tag>,
    pub comments: Vec<Comment>,
    pub recent: Vec<Post>,
    pub top_tags: Vec<TagWithCount>,
}

/// Payload for the posts-by-tag page.
#[derive(Debug, Serialize)]
pub struct PostsByTagResponse {
    pub tag: Tag,
    pub posts: Vec<Post>,
    pub recent: Vec<Post>,
    pub top_tags: Vec<TagWithCount>,
}

/// Payload for the posts-by-user page.
#[derive(Debug, Serialize)]
pub struct PostsByUserResponse {
    pub user: User,
    pub posts: Vec<Post>,
    pub recent: Vec<Post>,
    pub top_tags: Vec<TagWithCount>,
}

async fn render_home(pool: &PgPool, config: &Config, page: i64) -> Result<HttpResponse> {
    let service = PostService::new(pool.clone());
    let listing = service.list_page(page, config.blog.posts_per_page).await?;
    let sidebar = service.sidebar_data().await?;

    Ok(HttpResponse::Ok().json(BlogPageResponse {
        posts: listing.items,
        total_pages: listing.total_pages,
        current_page: listing.current_page,
        recent: sidebar.recent,
        top_tags: sidebar.top_tags,
    }))
}

/// GET /blog/ - first page of the post listing
pub async fn home(pool: web::Data<PgPool>, config: web::Data<Config>) -> Result<HttpResponse> {
    render_home(pool.get_ref(), config.get_ref(), 1).await
}

/// GET /blog/{page} - one page of the post listing
pub async fn home_page(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    page: web::Path<i64>,
) -> Result<HttpResponse> {
    render_home(pool.get_ref(), config.get_ref(), page.into_inner()).await
}

/// GET /blog/post/{post_id} - post detail with tags, comments, and sidebar
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<i32>) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let detail = service.post_detail(post_id.into_inner()).await?;
    let sidebar = service.sidebar_data().await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: detail.post,
        tags: detail.tags,
        comments: detail.comments,
        recent: sidebar.recent,
        top_tags: sidebar.top_tags,
    }))
}

/// GET /blog/posts_by_tag/{tag_name} - 404 when the tag is unknown
pub async fn posts_by_tag(
    pool: web::Data<PgPool>,
    tag_name: web::Path<String>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let (tag, posts) = service.posts_by_tag(&tag_name).await?;
    let sidebar = service.sidebar_data().await?;

    Ok(HttpResponse::Ok().json(PostsByTagResponse {
        tag,
        posts,
        recent: sidebar.recent,
        top_tags: sidebar.top_tags,
    }))
}

/// GET /blog/posts_by_user/{username} - 404 when the user is unknown
pub async fn posts_by_user(
    pool: web::Data<PgPool>,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let (user, posts) = service.posts_by_user(&username).await?;
    let sidebar = service.sidebar_data().await?;

    Ok(HttpResponse::Ok().json(PostsByUserResponse {
        user,
        posts,
        recent: sidebar.recent,
        top_tags: sidebar.top_tags,
    }))
}
