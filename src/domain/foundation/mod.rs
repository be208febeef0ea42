//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! payment runtime.

mod errors;
mod ids;

pub use errors::{RequestErrorCode, ValidationError};
pub use ids::{CredentialsId, ResultId, WorkspaceId};
