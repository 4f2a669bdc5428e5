//! Seed the database with a handful of users, tagged posts, and comments
//! for local development.
use blog_service::db::{self, comment_repo, post_repo, tag_repo, user_repo};
use blog_service::Config;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let pool = db::create_pool(&config.database.url, config.database.max_connections).await?;
    db::run_migrations(&pool).await?;

    let users = [
        ("alice", Some("Alice Doe")),
        ("bob", Some("Bob Smith")),
        ("carol", None),
    ];

    let mut user_ids = Vec::new();
    for (username, full_name) in users {
        let user = user_repo::create_user(&pool, username, full_name).await?;
        info!(user_id = user.id, username, "Seeded user");
        user_ids.push(user.id);
    }

    let posts = [
        ("Hello World", "The first post.", 0, vec!["intro"]),
        ("Postgres notes", "Indexes and pagination.", 0, vec!["databases", "notes"]),
        ("Queue sketches", "Fire-and-forget dispatch.", 1, vec!["notes"]),
        ("Untitled draft", "", 2, vec![]),
    ];

    for (title, text, author, tag_titles) in posts {
        let body = if text.is_empty() { None } else { Some(text) };
        let post = post_repo::create_post(&pool, title, body, Some(user_ids[author])).await?;
        for tag_title in tag_titles {
            let tag = tag_repo::get_or_create(&pool, tag_title).await?;
            tag_repo::attach_tag(&pool, post.id, tag.id).await?;
        }
        info!(post_id = post.id, title, "Seeded post");

        let mut tx = pool.begin().await?;
        let comment =
            comment_repo::create_comment(&mut tx, post.id, "visitor", "First!").await?;
        tx.commit().await?;
        info!(comment_id = comment.id, post_id = post.id, "Seeded comment");
    }

    info!("Seeding complete");
    Ok(())
}
