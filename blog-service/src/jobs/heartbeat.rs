use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, error, info};

use crate::queue::{Task, TaskQueue};

/// Dispatch cadence for the demonstration log task.
const DEFAULT_DISPATCH_INTERVAL: Duration = Duration::from_secs(30);

/// Background job that enqueues the `log` task on a fixed cadence,
/// independent of any HTTP request. It demonstrates recurring dispatch;
/// the result is never consumed on this side.
#[derive(Clone)]
pub struct HeartbeatJob {
    queue: TaskQueue,
    interval: Duration,
    message: String,
}

impl HeartbeatJob {
    pub fn new(queue: TaskQueue) -> Self {
        Self {
            queue,
            interval: DEFAULT_DISPATCH_INTERVAL,
            message: "Message".to_string(),
        }
    }

    /// Run the dispatch loop. Intended to be spawned on the Tokio runtime.
    pub async fn run(self) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        info!("Heartbeat job started (interval: {:?})", self.interval);

        loop {
            ticker.tick().await;

            let task = Task::Log {
                message: self.message.clone(),
            };
            if let Err(err) = self.queue.dispatch(task).await {
                error!("Heartbeat dispatch failed: {}", err);
            } else {
                debug!("Heartbeat log task dispatched");
            }
        }
    }

    /// Spawn the dispatch loop as a Tokio task.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
