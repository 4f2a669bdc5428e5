use crate::models::{Tag, TagWithCount};
use sqlx::PgPool;

/// Find a tag by its exact title
pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Tag>, sqlx::Error> {
    let tag = sqlx::query_as::<_, Tag>(
        r#"
        SELECT id, title
        FROM tags
        WHERE title = $1
        "#,
    )
    .bind(title)
    .fetch_optional(pool)
    .await?;

    Ok(tag)
}

/// Get or create a tag by title
pub async fn get_or_create(pool: &PgPool, title: &str) -> Result<Tag, sqlx::Error> {
    let tag = sqlx::query_as::<_, Tag>(
        r#"
        INSERT INTO tags (title)
        VALUES ($1)
        ON CONFLICT (title) DO UPDATE SET title = EXCLUDED.title
        RETURNING id, title
        "#,
    )
    .bind(title)
    .fetch_one(pool)
    .await?;

    Ok(tag)
}

/// Attach a tag to a post. Re-attaching an already attached tag is a no-op.
pub async fn attach_tag(pool: &PgPool, post_id: i32, tag_id: i32) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO post_tags (post_id, tag_id)
        VALUES ($1, $2)
        ON CONFLICT (post_id, tag_id) DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(tag_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// The tags with the most associated posts, most used first. The inner
/// join keeps tags with zero posts out of the ranking.
pub async fn top_tags(pool: &PgPool, limit: i64) -> Result<Vec<TagWithCount>, sqlx::Error> {
    let tags = sqlx::query_as::<_, TagWithCount>(
        r#"
        SELECT t.id, t.title, COUNT(pt.post_id) AS total
        FROM tags t
        JOIN post_tags pt ON pt.tag_id = t.id
        GROUP BY t.id, t.title
        ORDER BY total DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}

/// All tags with all columns, for the admin listing
pub async fn list_all_tags(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, title FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(tags)
}
