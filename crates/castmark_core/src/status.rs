//! Per-platform status within a generation run.

use serde::{Deserialize, Serialize};

/// Where one platform's generation stands within a run.
///
/// Transitions: `Idle` → `Pending` (on dispatch) → `Succeeded` | `Failed`
/// (terminal). A new run resets every platform to `Pending` again.
///
/// # Examples
///
/// ```
/// use castmark_core::PlatformStatus;
///
/// let status = PlatformStatus::succeeded(serde_json::json!({"titles": []}));
/// assert!(status.is_terminal());
/// assert!(status.result().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PlatformStatus {
    /// Not part of any in-flight run
    Idle,
    /// Dispatched, awaiting the provider response
    Pending,
    /// The provider returned parseable JSON
    Succeeded {
        /// The parsed result payload
        result: serde_json::Value,
    },
    /// The call failed; the message names what went wrong
    Failed {
        /// Error message for this platform
        message: String,
    },
}

impl PlatformStatus {
    /// Convenience constructor for a success.
    pub fn succeeded(result: serde_json::Value) -> Self {
        PlatformStatus::Succeeded { result }
    }

    /// Convenience constructor for a failure.
    pub fn failed(message: impl Into<String>) -> Self {
        PlatformStatus::Failed {
            message: message.into(),
        }
    }

    /// Whether this status is terminal (`Succeeded` or `Failed`).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PlatformStatus::Succeeded { .. } | PlatformStatus::Failed { .. }
        )
    }

    /// The result payload, when succeeded.
    pub fn result(&self) -> Option<&serde_json::Value> {
        match self {
            PlatformStatus::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    /// The failure message, when failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            PlatformStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}
