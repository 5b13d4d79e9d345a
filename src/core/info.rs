use serde::{Deserialize, Serialize};

/// Body of the monitor and allocate requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRequest {
    pub task_id: u32,
}

/// Error body returned by the daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
