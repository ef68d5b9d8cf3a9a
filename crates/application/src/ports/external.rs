//! External collaborator boundaries
//!
//! The surrounding product stores listings and chat threads in an
//! external document database, keeps files in object storage, and
//! delegates authentication to an identity provider. This subsystem
//! consumes those services as opaque documents; their schemas are not
//! part of its contract, so the ports traffic in raw JSON values.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::Receiver;

use crate::error::ApplicationError;

/// An opaque document held by an external store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned document id
    pub id: String,
    /// Schema-free payload
    pub data: serde_json::Value,
}

/// A change notification from an external store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ChangeEvent {
    /// A document was created
    Created { id: String },
    /// A document was updated
    Updated { id: String },
    /// A document was removed
    Deleted { id: String },
}

/// An authenticated session from the external identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned user id
    pub user_id: String,
    /// Display name, when the provider supplies one
    pub display_name: Option<String>,
}

/// Port for the external identity provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Validate a bearer token and return the session it belongs to
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ExternalService` when the provider
    /// rejects the token or is unreachable.
    async fn authenticate(&self, token: &str) -> Result<Session, ApplicationError>;
}

/// Port for the external missing-pet listing store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ListingStorePort: Send + Sync {
    /// Create a listing document, returning its id
    async fn create(&self, data: serde_json::Value) -> Result<String, ApplicationError>;

    /// Fetch a listing by id
    async fn get(&self, id: &str) -> Result<Option<Document>, ApplicationError>;

    /// Replace a listing's payload
    async fn update(&self, id: &str, data: serde_json::Value) -> Result<(), ApplicationError>;

    /// Remove a listing
    async fn delete(&self, id: &str) -> Result<(), ApplicationError>;

    /// Subscribe to listing changes
    async fn changes(&self) -> Result<Receiver<ChangeEvent>, ApplicationError>;
}

/// Port for the external chat thread store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatStorePort: Send + Sync {
    /// Append a message document to a thread, returning its id
    async fn append(
        &self,
        thread_id: &str,
        data: serde_json::Value,
    ) -> Result<String, ApplicationError>;

    /// Fetch a thread's message documents in insertion order
    async fn thread(&self, thread_id: &str) -> Result<Vec<Document>, ApplicationError>;

    /// Subscribe to changes on a thread
    async fn changes(&self, thread_id: &str) -> Result<Receiver<ChangeEvent>, ApplicationError>;
}

/// Port for the external object storage service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MediaStorePort: Send + Sync {
    /// Upload a blob and return its public URL
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApplicationError>;

    /// Remove a previously uploaded blob by URL
    async fn remove(&self, url: &str) -> Result<(), ApplicationError>;
}
