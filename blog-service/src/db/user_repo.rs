use crate::models::User;
use sqlx::{PgPool, Row};

/// Create a new user
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    full_name: Option<&str>,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, full_name)
        VALUES ($1, $2)
        RETURNING id, username, full_name
        "#,
    )
    .bind(username)
    .bind(full_name)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Find a user by their exact username
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, full_name
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List one page of users in id order
pub async fn list_users(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, full_name
        FROM users
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Count all users
pub async fn count_users(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM users")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// All users with all columns, for the admin listing
pub async fn list_all_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>("SELECT id, username, full_name FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(users)
}
