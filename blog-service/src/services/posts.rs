/// Post service - listing, detail, filtering, and the sidebar aggregates
use crate::db::{comment_repo, post_repo, tag_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, Post, Tag, TagWithCount, User};
use crate::pagination::{self, Page};
use serde::Serialize;
use sqlx::PgPool;

/// Sidebar sizes are fixed presentation choices, not configuration.
pub const RECENT_POSTS_LIMIT: i64 = 5;
pub const TOP_TAGS_LIMIT: i64 = 5;

/// The pair computed for every blog page render.
#[derive(Debug, Clone, Serialize)]
pub struct Sidebar {
    pub recent: Vec<Post>,
    pub top_tags: Vec<TagWithCount>,
}

/// A post together with its tags and comments.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub post: Post,
    pub tags: Vec<Tag>,
    pub comments: Vec<Comment>,
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Recent posts and top tags, rendered alongside every blog page.
    pub async fn sidebar_data(&self) -> Result<Sidebar> {
        let recent = post_repo::recent_posts(&self.pool, RECENT_POSTS_LIMIT).await?;
        let top_tags = tag_repo::top_tags(&self.pool, TOP_TAGS_LIMIT).await?;

        Ok(Sidebar { recent, top_tags })
    }

    /// One page of the post listing, newest first.
    pub async fn list_page(&self, page: i64, per_page: i64) -> Result<Page<Post>> {
        let page = pagination::clamp_page(page);
        let total = post_repo::count_posts(&self.pool).await?;
        let items =
            post_repo::list_posts(&self.pool, per_page, pagination::offset(page, per_page))
                .await?;

        Ok(Page {
            items,
            total_pages: pagination::total_pages(total, per_page),
            current_page: page,
        })
    }

    /// A post with its tags and comments (newest comment first).
    pub async fn post_detail(&self, post_id: i32) -> Result<PostDetail> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))?;

        let tags = post_repo::tags_for_post(&self.pool, post_id).await?;
        let comments = comment_repo::comments_by_post(&self.pool, post_id).await?;

        Ok(PostDetail {
            post,
            tags,
            comments,
        })
    }

    /// All posts carrying the named tag; not-found if the tag is unknown.
    pub async fn posts_by_tag(&self, tag_name: &str) -> Result<(Tag, Vec<Post>)> {
        let tag = tag_repo::find_by_title(&self.pool, tag_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("tag '{}'", tag_name)))?;

        let posts = post_repo::find_posts_by_tag(&self.pool, tag.id).await?;

        Ok((tag, posts))
    }

    /// All posts owned by the named user; not-found if the user is unknown.
    pub async fn posts_by_user(&self, username: &str) -> Result<(User, Vec<Post>)> {
        let user = user_repo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{}'", username)))?;

        let posts = post_repo::find_posts_by_user(&self.pool, user.id).await?;

        Ok((user, posts))
    }
}
