use crate::models::{Post, Tag};
use sqlx::{PgPool, Row};

/// Create a new post. Only the title is required; body, owner, and an
/// explicit publish date may be supplied later or at insert.
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    text: Option<&str>,
    user_id: Option<i32>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, text, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, text, publish_date, user_id
        "#,
    )
    .bind(title)
    .bind(text)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: i32) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, text, publish_date, user_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List one page of posts, newest first
pub async fn list_posts(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, text, publish_date, user_id
        FROM posts
        ORDER BY publish_date DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// The most recently published posts, for the sidebar
pub async fn recent_posts(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, text, publish_date, user_id
        FROM posts
        ORDER BY publish_date DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// All posts carrying a tag, newest first
pub async fn find_posts_by_tag(pool: &PgPool, tag_id: i32) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.title, p.text, p.publish_date, p.user_id
        FROM posts p
        JOIN post_tags pt ON pt.post_id = p.id
        WHERE pt.tag_id = $1
        ORDER BY p.publish_date DESC
        "#,
    )
    .bind(tag_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// All posts owned by a user, newest first
pub async fn find_posts_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, text, publish_date, user_id
        FROM posts
        WHERE user_id = $1
        ORDER BY publish_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Tags attached to a post
pub async fn tags_for_post(pool: &PgPool, post_id: i32) -> Result<Vec<Tag>, sqlx::Error> {
    let tags = sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.id, t.title
        FROM tags t
        JOIN post_tags pt ON pt.tag_id = t.id
        WHERE pt.post_id = $1
        ORDER BY t.title
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}

/// All posts with all columns, for the admin listing
pub async fn list_all_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        "SELECT id, title, text, publish_date, user_id FROM posts ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}
