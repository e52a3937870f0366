//! The seam between the client state machines and the backend REST API.
//!
//! Implementations don't need to be `Send`: every call runs on a single
//! event loop (the browser, or a current-thread executor in tests).

use crate::dto::{
    Artifact, ArtifactKind, Credentials, Project, ProjectId, ProjectListing, Registration,
    UploadFile, UserProfile,
};
use crate::error::ClientError;

#[allow(async_fn_in_trait)]
pub trait BackendApi {
    /// `GET /api/check_auth`, carrying whatever credential the transport holds.
    async fn check_session(&self) -> Result<UserProfile, ClientError>;
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError>;
    async fn logout(&self) -> Result<(), ClientError>;
    async fn register(&self, registration: &Registration) -> Result<(), ClientError>;

    async fn create_project(&self, name: &str) -> Result<Project, ClientError>;
    /// `Ok(None)` when the user has no current project yet.
    async fn current_project(&self) -> Result<Option<Project>, ClientError>;
    async fn list_projects(&self) -> Result<ProjectListing, ClientError>;
    async fn archive_project(&self, id: ProjectId) -> Result<(), ClientError>;
    async fn unarchive_project(&self, id: ProjectId) -> Result<(), ClientError>;

    async fn upload_outline(&self, id: ProjectId, file: UploadFile) -> Result<(), ClientError>;
    async fn upload_documents(
        &self,
        id: ProjectId,
        files: Vec<UploadFile>,
    ) -> Result<(), ClientError>;
    async fn process_project(&self, id: ProjectId) -> Result<(), ClientError>;

    async fn fetch_artifact(
        &self,
        id: ProjectId,
        kind: ArtifactKind,
    ) -> Result<Artifact, ClientError>;
}
