//! Credential store and decrypter ports.
//!
//! Credentials are stored encrypted, scoped to a workspace. The runtime
//! fetches the encrypted record through `CredentialStore` and turns it into
//! plaintext JSON through `CredentialDecrypter`. Storage layout and cipher
//! choice belong to the host platform; both sides are black boxes here.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::foundation::{CredentialsId, WorkspaceId};

/// Port for looking up stored, encrypted credential records.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Finds the encrypted record for the given credentials reference
    /// within a workspace. `None` means the reference does not resolve.
    async fn find(
        &self,
        credentials_id: &CredentialsId,
        workspace_id: &WorkspaceId,
    ) -> Result<Option<EncryptedCredentials>, CredentialError>;
}

/// Port for decrypting a stored credential payload.
#[async_trait]
pub trait CredentialDecrypter: Send + Sync {
    /// Decrypts the payload and parses it as JSON.
    async fn decrypt(&self, data: &str, iv: &str) -> Result<Value, CredentialError>;
}

/// An encrypted credential record as stored by the host platform.
#[derive(Debug, Clone)]
pub struct EncryptedCredentials {
    /// Ciphertext, encoding defined by the store.
    pub data: String,

    /// Initialization vector used at encryption time.
    pub iv: String,
}

/// Errors from credential retrieval and decryption.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to decrypt credentials: {0}")]
    DecryptionFailed(String),

    #[error("Credential payload is malformed: {0}")]
    MalformedPayload(String),
}
