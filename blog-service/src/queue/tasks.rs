/// Demonstration tasks for the external worker pool.
///
/// The three tasks carry no business meaning; they exist to exercise the
/// dispatch path. The wire form is a named task plus positional arguments,
/// so a worker in any language can pick them up.
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Echo the message back as the task result.
    Log { message: String },
    Multiply { x: i64, y: i64 },
    Subtract { x: i64, y: i64 },
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::Log { .. } => "log",
            Task::Multiply { .. } => "multiply",
            Task::Subtract { .. } => "subtract",
        }
    }

    /// Positional arguments as they appear on the wire.
    pub fn args(&self) -> Vec<Value> {
        match self {
            Task::Log { message } => vec![json!(message)],
            Task::Multiply { x, y } => vec![json!(x), json!(y)],
            Task::Subtract { x, y } => vec![json!(x), json!(y)],
        }
    }

    /// Decode a wire-form task. `None` for unknown names or mismatched
    /// argument lists.
    pub fn from_wire(name: &str, args: &[Value]) -> Option<Task> {
        match (name, args) {
            ("log", [message]) => Some(Task::Log {
                message: message.as_str()?.to_string(),
            }),
            ("multiply", [x, y]) => Some(Task::Multiply {
                x: x.as_i64()?,
                y: y.as_i64()?,
            }),
            ("subtract", [x, y]) => Some(Task::Subtract {
                x: x.as_i64()?,
                y: y.as_i64()?,
            }),
            _ => None,
        }
    }

    /// The task body, as run by the worker pool.
    pub fn execute(&self) -> Value {
        match self {
            Task::Log { message } => {
                tracing::info!(message = %message, "log task");
                json!(message)
            }
            Task::Multiply { x, y } => json!(x * y),
            Task::Subtract { x, y } => json!(x - y),
        }
    }
}

/// The envelope placed on the broker queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEnvelope {
    pub id: Uuid,
    pub task: String,
    pub args: Vec<Value>,
}

impl TaskEnvelope {
    pub fn new(task: &Task) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: task.name().to_string(),
            args: task.args(),
        }
    }

    pub fn decode(&self) -> Option<Task> {
        Task::from_wire(&self.task, &self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_round_trips() {
        for task in [
            Task::Log {
                message: "Message".to_string(),
            },
            Task::Multiply { x: 3, y: 4 },
            Task::Subtract { x: 7, y: 2 },
        ] {
            let envelope = TaskEnvelope::new(&task);
            let wire = serde_json::to_string(&envelope).expect("envelope should serialize");
            let parsed: TaskEnvelope =
                serde_json::from_str(&wire).expect("envelope should deserialize");
            assert_eq!(parsed.decode(), Some(task));
        }
    }

    #[test]
    fn test_wire_form_uses_positional_args() {
        let envelope = TaskEnvelope::new(&Task::Multiply { x: 3, y: 4 });
        let wire = serde_json::to_value(&envelope).expect("envelope should serialize");
        assert_eq!(wire["task"], "multiply");
        assert_eq!(wire["args"], json!([3, 4]));
    }

    #[test]
    fn test_unknown_task_decodes_to_none() {
        let envelope = TaskEnvelope {
            id: Uuid::new_v4(),
            task: "reverse".to_string(),
            args: vec![json!("abc")],
        };
        assert_eq!(envelope.decode(), None);
    }

    #[test]
    fn test_task_bodies() {
        assert_eq!(Task::Multiply { x: 3, y: 4 }.execute(), json!(12));
        assert_eq!(Task::Subtract { x: 7, y: 2 }.execute(), json!(5));
        assert_eq!(
            Task::Log {
                message: "Message".to_string()
            }
            .execute(),
            json!("Message")
        );
    }
}
