/// Recurring in-process jobs
pub mod heartbeat;

pub use heartbeat::HeartbeatJob;
