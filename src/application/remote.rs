// src/application/remote.rs
use crate::domain::{DomainError, DriveFile, User};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Remote file storage. Every call can be abandoned through the token, in
/// which case it resolves to `DomainError::Cancelled`.
#[async_trait]
pub trait RemoteStorage: Send + Sync {
    /// Store a file and return its remote id
    async fn put(
        &self,
        name: &str,
        content: &[u8],
        cancel: &CancellationToken,
    ) -> Result<String, DomainError>;

    /// Fetch a file's text content
    async fn get(&self, file_id: &str, cancel: &CancellationToken) -> Result<String, DomainError>;

    async fn list(&self, cancel: &CancellationToken) -> Result<Vec<DriveFile>, DomainError>;

    async fn delete(&self, file_id: &str, cancel: &CancellationToken) -> Result<(), DomainError>;
}

/// Identity provider that can sign a user in
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, cancel: &CancellationToken) -> Result<User, DomainError>;
}

/// Signed-in state. The user only exists between sign-in and sign-out.
#[derive(Debug, Default)]
pub struct DriveSession {
    user: Option<User>,
}

impl DriveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in<A: Authenticator + ?Sized>(
        &mut self,
        authenticator: &A,
        cancel: &CancellationToken,
    ) -> Result<&User, DomainError> {
        let user = authenticator.sign_in(cancel).await?;
        Ok(self.user.insert(user))
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
