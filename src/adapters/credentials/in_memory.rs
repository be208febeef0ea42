//! In-memory credential adapters for tests and local development.
//!
//! Real deployments plug in the platform's credential vault; these adapters
//! keep the crate runnable without one. The "decrypter" treats the stored
//! payload as plaintext JSON.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::{CredentialsId, WorkspaceId};
use crate::ports::{CredentialDecrypter, CredentialError, CredentialStore, EncryptedCredentials};

/// In-memory credential store keyed by (credentials id, workspace id).
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: Mutex<HashMap<(String, String), EncryptedCredentials>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record for the given reference and workspace.
    pub fn insert(
        &self,
        credentials_id: &CredentialsId,
        workspace_id: &WorkspaceId,
        record: EncryptedCredentials,
    ) {
        self.records.lock().unwrap().insert(
            (
                credentials_id.as_str().to_string(),
                workspace_id.as_str().to_string(),
            ),
            record,
        );
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find(
        &self,
        credentials_id: &CredentialsId,
        workspace_id: &WorkspaceId,
    ) -> Result<Option<EncryptedCredentials>, CredentialError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .get(&(
                credentials_id.as_str().to_string(),
                workspace_id.as_str().to_string(),
            ))
            .cloned())
    }
}

/// Decrypter that parses the stored payload as plaintext JSON.
#[derive(Default)]
pub struct PlainJsonDecrypter;

impl PlainJsonDecrypter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialDecrypter for PlainJsonDecrypter {
    async fn decrypt(&self, data: &str, _iv: &str) -> Result<Value, CredentialError> {
        serde_json::from_str(data)
            .map_err(|e| CredentialError::DecryptionFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids() -> (CredentialsId, WorkspaceId) {
        (
            CredentialsId::new("cred-1").unwrap(),
            WorkspaceId::new("ws-1").unwrap(),
        )
    }

    #[tokio::test]
    async fn find_returns_inserted_record() {
        let (cred, ws) = ids();
        let store = InMemoryCredentialStore::new();
        store.insert(
            &cred,
            &ws,
            EncryptedCredentials {
                data: "{}".to_string(),
                iv: "iv".to_string(),
            },
        );

        let found = store.find(&cred, &ws).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn find_is_workspace_scoped() {
        let (cred, ws) = ids();
        let other_ws = WorkspaceId::new("ws-2").unwrap();
        let store = InMemoryCredentialStore::new();
        store.insert(
            &cred,
            &ws,
            EncryptedCredentials {
                data: "{}".to_string(),
                iv: "iv".to_string(),
            },
        );

        assert!(store.find(&cred, &other_ws).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn plain_decrypter_parses_json() {
        let decrypter = PlainJsonDecrypter::new();
        let value = decrypter.decrypt(r#"{"live": {}}"#, "iv").await.unwrap();
        assert_eq!(value, json!({"live": {}}));
    }

    #[tokio::test]
    async fn plain_decrypter_rejects_garbage() {
        let decrypter = PlainJsonDecrypter::new();
        let result = decrypter.decrypt("not json", "iv").await;
        assert!(matches!(result, Err(CredentialError::DecryptionFailed(_))));
    }
}
