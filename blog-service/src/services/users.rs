/// User service - paginated listing and creation
use crate::db::user_repo;
use crate::error::Result;
use crate::models::User;
use crate::pagination::{self, Page};
use sqlx::PgPool;

/// The user listing always pages by ten.
pub const USERS_PER_PAGE: i64 = 10;

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of users in id order.
    pub async fn list_page(&self, page: i64) -> Result<Page<User>> {
        let page = pagination::clamp_page(page);
        let total = user_repo::count_users(&self.pool).await?;
        let items = user_repo::list_users(
            &self.pool,
            USERS_PER_PAGE,
            pagination::offset(page, USERS_PER_PAGE),
        )
        .await?;

        Ok(Page {
            items,
            total_pages: pagination::total_pages(total, USERS_PER_PAGE),
            current_page: page,
        })
    }

    /// Create a user. Duplicate usernames are permitted.
    pub async fn create_user(&self, username: &str, full_name: Option<&str>) -> Result<User> {
        let user = user_repo::create_user(&self.pool, username, full_name).await?;

        Ok(user)
    }
}
