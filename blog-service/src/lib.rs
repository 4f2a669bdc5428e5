/// Blog Service Library
///
/// A small blog backend: users, posts, tags, comments, a paginated listing
/// API, and fire-and-forget dispatch of demonstration tasks to an external
/// worker queue.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the blog, user, and admin surfaces
/// - `models`: Persisted entity structs
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `pagination`: 1-indexed page math shared by the listing endpoints
/// - `queue`: Task envelopes and the redis-backed submission queue
/// - `jobs`: Recurring in-process dispatch jobs
/// - `middleware`: Per-client page-view counting
/// - `session`: Signed counter cookie codec
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod queue;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{AppError, Result};
