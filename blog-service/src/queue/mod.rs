/// Fire-and-forget task submission to an external worker pool.
///
/// Submission is a non-blocking handoff: envelopes are pushed onto a redis
/// list and the worker consumes them from the other end. Nothing in this
/// service awaits or inspects a task result.
pub mod tasks;

pub use tasks::{Task, TaskEnvelope};

use anyhow::{anyhow, Result};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

#[derive(Clone)]
pub struct TaskQueue {
    redis: ConnectionManager,
    queue_key: String,
}

impl TaskQueue {
    pub fn new(redis: ConnectionManager, queue_key: impl Into<String>) -> Self {
        Self {
            redis,
            queue_key: queue_key.into(),
        }
    }

    /// Push a task onto the broker queue.
    pub async fn dispatch(&self, task: Task) -> Result<()> {
        let envelope = TaskEnvelope::new(&task);
        let payload = serde_json::to_string(&envelope)?;

        let mut conn = self.redis.clone();
        let _: () = conn
            .lpush(&self.queue_key, payload)
            .await
            .map_err(|e| anyhow!("Failed to enqueue task '{}': {}", envelope.task, e))?;

        tracing::debug!(task = %envelope.task, id = %envelope.id, "Task dispatched");
        Ok(())
    }
}
