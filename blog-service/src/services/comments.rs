/// Comment service - the one transactional write in the system
use crate::db::comment_repo;
use crate::error::{AppError, Result};
use crate::models::Comment;
use sqlx::PgPool;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach a comment to a post, committing atomically. On any
    /// persistence failure (including an unknown post id breaking the
    /// foreign key) the transaction is rolled back and the error returned
    /// for the handler to degrade on.
    pub async fn add_comment(&self, post_id: i32, name: &str, text: &str) -> Result<Comment> {
        let mut tx = self.pool.begin().await?;

        match comment_repo::create_comment(&mut tx, post_id, name, text).await {
            Ok(comment) => {
                tx.commit().await?;
                Ok(comment)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "comment rollback failed");
                }
                Err(AppError::Database(err))
            }
        }
    }
}
