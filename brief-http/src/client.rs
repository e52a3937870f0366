use crate::config::ClientConfig;
use crate::wire::{
    error_message, ArtifactResponse, CreateProjectResponse, CurrentProjectResponse, SuccessFlag,
    UserEnvelope,
};
use brief_core::{
    Artifact, ArtifactKind, BackendApi, ClientError, Credentials, Project, ProjectId,
    ProjectListing, Registration, UploadFile, UserProfile,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// `BackendApi` over HTTP. Natively the client keeps a cookie jar so the
/// session cookie issued at login rides along on every later request; in
/// the browser, fetch is told to include credentials.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!(%method, %url, "backend request");
        let builder = self.client.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        debug!(status = status.as_u16(), ?message, "backend returned error status");
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized { message },
            _ => ClientError::Server {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        self.send(builder)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.request(Method::POST, path)).await.map(drop)
    }
}

fn file_part(file: UploadFile) -> Result<Part, ClientError> {
    let part = Part::bytes(file.bytes).file_name(file.filename);
    match file.content_type {
        Some(ct) => part
            .mime_str(&ct)
            .map_err(|e| ClientError::Validation(format!("invalid content type {ct}: {e}"))),
        None => Ok(part),
    }
}

impl BackendApi for HttpBackend {
    async fn check_session(&self) -> Result<UserProfile, ClientError> {
        let envelope: UserEnvelope = self.send_json(self.request(Method::GET, "check_auth")).await?;
        Ok(envelope.user)
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError> {
        let envelope: UserEnvelope = self
            .send_json(self.request(Method::POST, "login").json(credentials))
            .await?;
        Ok(envelope.user)
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.send(self.request(Method::GET, "logout")).await.map(drop)
    }

    async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        self.send(self.request(Method::POST, "register").json(registration))
            .await
            .map(drop)
    }

    async fn create_project(&self, name: &str) -> Result<Project, ClientError> {
        let body = serde_json::json!({ "name": name });
        let response: CreateProjectResponse = self
            .send_json(self.request(Method::POST, "projects").json(&body))
            .await?;
        match response {
            CreateProjectResponse {
                success: true,
                project: Some(project),
            } => Ok(project),
            _ => Err(ClientError::Rejected),
        }
    }

    async fn current_project(&self) -> Result<Option<Project>, ClientError> {
        let response: CurrentProjectResponse = self
            .send_json(self.request(Method::GET, "current_project"))
            .await?;
        Ok(response.project)
    }

    async fn list_projects(&self) -> Result<ProjectListing, ClientError> {
        self.send_json(self.request(Method::GET, "projects")).await
    }

    async fn archive_project(&self, id: ProjectId) -> Result<(), ClientError> {
        self.post_empty(&format!("projects/{id}/archive")).await
    }

    async fn unarchive_project(&self, id: ProjectId) -> Result<(), ClientError> {
        self.post_empty(&format!("projects/{id}/unarchive")).await
    }

    async fn upload_outline(&self, id: ProjectId, file: UploadFile) -> Result<(), ClientError> {
        let form = Form::new().part("outline", file_part(file)?);
        self.send(
            self.request(Method::POST, &format!("projects/{id}/upload_outline"))
                .multipart(form),
        )
        .await
        .map(drop)
    }

    async fn upload_documents(
        &self,
        id: ProjectId,
        files: Vec<UploadFile>,
    ) -> Result<(), ClientError> {
        let mut form = Form::new();
        for file in files {
            form = form.part("documents", file_part(file)?);
        }
        self.send(
            self.request(Method::POST, &format!("projects/{id}/upload_documents"))
                .multipart(form),
        )
        .await
        .map(drop)
    }

    async fn process_project(&self, id: ProjectId) -> Result<(), ClientError> {
        let flag: SuccessFlag = self
            .send_json(self.request(Method::POST, &format!("projects/{id}/process")))
            .await?;
        if flag.success {
            Ok(())
        } else {
            Err(ClientError::Rejected)
        }
    }

    async fn fetch_artifact(
        &self,
        id: ProjectId,
        kind: ArtifactKind,
    ) -> Result<Artifact, ClientError> {
        let response: ArtifactResponse = self
            .send_json(self.request(Method::GET, &format!("projects/{id}/{}", kind.slug())))
            .await?;
        let content = match kind {
            ArtifactKind::Timeline => response.timeline_content,
            ArtifactKind::Narrative => response.narrative_content,
        };
        Ok(Artifact {
            kind,
            project: response.project,
            content,
        })
    }
}
