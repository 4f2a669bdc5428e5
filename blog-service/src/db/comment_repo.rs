use crate::models::Comment;
use sqlx::{PgPool, Postgres, Transaction};

/// Insert a comment inside the caller's transaction. The insert relies on
/// the post_id foreign key; a missing post surfaces as a database error the
/// caller rolls back on.
pub async fn create_comment(
    tx: &mut Transaction<'_, Postgres>,
    post_id: i32,
    name: &str,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (name, text, post_id)
        VALUES ($1, $2, $3)
        RETURNING id, name, text, date, post_id
        "#,
    )
    .bind(name)
    .bind(text)
    .bind(post_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(comment)
}

/// All comments on a post, newest first
pub async fn comments_by_post(pool: &PgPool, post_id: i32) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, name, text, date, post_id
        FROM comments
        WHERE post_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// All comments with all columns, for the admin listing
pub async fn list_all_comments(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
    let comments =
        sqlx::query_as::<_, Comment>("SELECT id, name, text, date, post_id FROM comments ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(comments)
}
