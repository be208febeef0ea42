//! Conversation session snapshot.
//!
//! The runtime receives an immutable snapshot of the session: the tenant it
//! belongs to and the queue of flow contexts currently being executed. Only
//! the first queued context matters here; it carries the result id (absent
//! for previews) and the current variable bindings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{ResultId, WorkspaceId};

/// Immutable snapshot of a conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Tenant the session belongs to; scopes credential lookups.
    pub workspace_id: WorkspaceId,

    /// Queue of active flow contexts, outermost first.
    pub queue: Vec<QueuedFlow>,
}

impl SessionState {
    /// Creates a session snapshot with a single queued flow.
    pub fn new(workspace_id: WorkspaceId, flow: QueuedFlow) -> Self {
        Self {
            workspace_id,
            queue: vec![flow],
        }
    }

    /// The flow context currently being executed, if any.
    pub fn current_flow(&self) -> Option<&QueuedFlow> {
        self.queue.first()
    }
}

/// A flow context on the session queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedFlow {
    /// Persisted result id. Absent exactly when the execution is a preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_id: Option<ResultId>,

    /// Current variable bindings.
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl QueuedFlow {
    /// A preview context (no persisted result) with the given variables.
    pub fn preview(variables: Vec<Variable>) -> Self {
        Self {
            result_id: None,
            variables,
        }
    }

    /// A live context bound to a persisted result.
    pub fn live(result_id: ResultId, variables: Vec<Variable>) -> Self {
        Self {
            result_id: Some(result_id),
            variables,
        }
    }

    /// Whether this context is a preview execution.
    pub fn is_preview(&self) -> bool {
        self.result_id.is_none()
    }
}

/// A variable binding in the current flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Stable identifier within the flow definition.
    pub id: String,

    /// Name referenced from templates as `{{name}}`.
    pub name: String,

    /// Current value; unset variables interpolate to empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Variable {
    /// Creates a bound variable.
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: Some(value),
        }
    }

    /// Creates an unbound variable.
    pub fn unset(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: None,
        }
    }
}
