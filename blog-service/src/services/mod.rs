/// Business logic layer
///
/// - Post service: listing, detail, tag/user filtering, sidebar data
/// - User service: paginated listing and creation
/// - Comment service: the one transactional write
pub mod comments;
pub mod posts;
pub mod users;

// Re-export commonly used services
pub use comments::CommentService;
pub use posts::{PostDetail, PostService, Sidebar};
pub use users::UserService;
