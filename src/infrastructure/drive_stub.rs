// src/infrastructure/drive_stub.rs
use crate::application::{Authenticator, RemoteStorage};
use crate::constants::{
    DRIVE_DELETE_DELAY_MS, DRIVE_DOWNLOAD_DELAY_MS, DRIVE_LIST_DELAY_MS, DRIVE_SIGN_IN_DELAY_MS,
    DRIVE_UPLOAD_DELAY_MS, PLACEHOLDER_CLIENT_ID,
};
use crate::domain::{DomainError, DriveFile, User};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveStubConfig {
    pub client_id: String,
    pub upload_delay: Duration,
    pub download_delay: Duration,
    pub list_delay: Duration,
    pub delete_delay: Duration,
    pub sign_in_delay: Duration,
}

impl Default for DriveStubConfig {
    fn default() -> Self {
        Self {
            client_id: PLACEHOLDER_CLIENT_ID.to_string(),
            upload_delay: Duration::from_millis(DRIVE_UPLOAD_DELAY_MS),
            download_delay: Duration::from_millis(DRIVE_DOWNLOAD_DELAY_MS),
            list_delay: Duration::from_millis(DRIVE_LIST_DELAY_MS),
            delete_delay: Duration::from_millis(DRIVE_DELETE_DELAY_MS),
            sign_in_delay: Duration::from_millis(DRIVE_SIGN_IN_DELAY_MS),
        }
    }
}

impl DriveStubConfig {
    /// All delays zero; handy for tests
    pub fn instant() -> Self {
        Self {
            upload_delay: Duration::ZERO,
            download_delay: Duration::ZERO,
            list_delay: Duration::ZERO,
            delete_delay: Duration::ZERO,
            sign_in_delay: Duration::ZERO,
            ..Default::default()
        }
    }
}

/// Simulated remote drive. Calls resolve after a fixed delay with fabricated
/// data; nothing is stored anywhere.
#[derive(Debug, Clone, Default)]
pub struct DriveStub {
    config: DriveStubConfig,
}

impl DriveStub {
    pub fn new(config: DriveStubConfig) -> Self {
        Self { config }
    }

    async fn simulate_latency(
        &self,
        delay: Duration,
        cancel: &CancellationToken,
    ) -> Result<(), DomainError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DomainError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

fn require_file_id(file_id: &str) -> Result<(), DomainError> {
    if file_id.trim().is_empty() {
        return Err(DomainError::Remote("file id must not be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl RemoteStorage for DriveStub {
    #[instrument(level = "debug", skip(self, content, cancel), fields(bytes = content.len()))]
    async fn put(
        &self,
        name: &str,
        content: &[u8],
        cancel: &CancellationToken,
    ) -> Result<String, DomainError> {
        self.simulate_latency(self.config.upload_delay, cancel)
            .await?;
        let file_id = format!("mock-file-id-{}", Utc::now().timestamp_millis());
        debug!(%file_id, "Pretended to upload file");
        Ok(file_id)
    }

    #[instrument(level = "debug", skip(self, cancel))]
    async fn get(&self, file_id: &str, cancel: &CancellationToken) -> Result<String, DomainError> {
        require_file_id(file_id)?;
        self.simulate_latency(self.config.download_delay, cancel)
            .await?;
        Ok("Mock file content".to_string())
    }

    #[instrument(level = "debug", skip(self, cancel))]
    async fn list(&self, cancel: &CancellationToken) -> Result<Vec<DriveFile>, DomainError> {
        self.simulate_latency(self.config.list_delay, cancel)
            .await?;
        let now = Utc::now().to_rfc3339();
        Ok(vec![
            DriveFile {
                id: "1".to_string(),
                name: "My First Note.txt".to_string(),
                mime_type: "text/plain".to_string(),
                modified_time: now.clone(),
                size: "1024".to_string(),
                web_view_link: "#".to_string(),
            },
            DriveFile {
                id: "2".to_string(),
                name: "Project Ideas.md".to_string(),
                mime_type: "text/markdown".to_string(),
                modified_time: now,
                size: "2048".to_string(),
                web_view_link: "#".to_string(),
            },
        ])
    }

    #[instrument(level = "debug", skip(self, cancel))]
    async fn delete(&self, file_id: &str, cancel: &CancellationToken) -> Result<(), DomainError> {
        require_file_id(file_id)?;
        self.simulate_latency(self.config.delete_delay, cancel)
            .await
    }
}

#[async_trait]
impl Authenticator for DriveStub {
    #[instrument(level = "debug", skip(self, cancel), fields(client_id = %self.config.client_id))]
    async fn sign_in(&self, cancel: &CancellationToken) -> Result<User, DomainError> {
        self.simulate_latency(self.config.sign_in_delay, cancel)
            .await?;
        Ok(User {
            id: "local-user".to_string(),
            name: "Local User".to_string(),
            email: "user@localhost".to_string(),
            picture: String::new(),
        })
    }
}
