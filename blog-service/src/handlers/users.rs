/// User handlers - JSON listing and creation
use crate::error::Result;
use crate::models::User;
use crate::pagination;
use crate::services::UserService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

/// Page selector for the user listing. The raw string form lets a
/// malformed value degrade to page 1 instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsersPageResponse {
    pub users: Vec<UserSummary>,
    pub total_pages: i64,
    pub current_page: i64,
}

/// Request body for creating a user. The schema is closed: unknown fields
/// are rejected at deserialization instead of being forwarded into entity
/// construction.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "username is required"))]
    pub username: String,
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
}

/// GET /blog/users?page=n - one page of users
pub async fn list_users(
    pool: web::Data<PgPool>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse> {
    let page = pagination::parse_page(query.page.as_deref());
    let service = UserService::new(pool.get_ref().clone());
    let listing = service.list_page(page).await?;

    Ok(HttpResponse::Ok().json(UsersPageResponse {
        users: listing
            .items
            .into_iter()
            .map(|u: User| UserSummary {
                id: u.id,
                username: u.username,
                full_name: u.full_name,
            })
            .collect(),
        total_pages: listing.total_pages,
        current_page: listing.current_page,
    }))
}

/// POST /blog/users - create a user
pub async fn add_user(
    pool: web::Data<PgPool>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = UserService::new(pool.get_ref().clone());
    let user = service
        .create_user(&req.username, req.full_name.as_deref())
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User added");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "User added successfully",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_rejected() {
        let raw = r#"{"username": "bob", "full_name": "Bob Smith", "is_admin": true}"#;
        let parsed = serde_json::from_str::<CreateUserRequest>(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_full_name_is_optional() {
        let raw = r#"{"username": "bob"}"#;
        let parsed: CreateUserRequest = serde_json::from_str(raw).expect("payload should parse");
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.full_name, None);
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let raw = r#"{"username": ""}"#;
        let parsed: CreateUserRequest = serde_json::from_str(raw).expect("payload should parse");
        assert!(parsed.validate().is_err());
    }
}
