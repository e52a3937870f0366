//! Scripted in-memory backend for unit tests.

use crate::api::BackendApi;
use crate::dto::{
    Artifact, ArtifactKind, Credentials, DocumentKind, Project, ProjectDocument, ProjectId,
    ProjectListing, Registration, UploadFile, UserProfile,
};
use crate::error::ClientError;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct FakeState {
    users: HashMap<String, (String, UserProfile)>,
    session: Option<UserProfile>,
    projects: Vec<Project>,
    current: Option<ProjectId>,
    next_doc_id: i64,
    artifacts: HashMap<(ProjectId, ArtifactKind), String>,
    failures: HashMap<&'static str, ClientError>,
    calls: Vec<&'static str>,
    session_check_hold: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    state: RefCell<FakeState>,
}

impl FakeBackend {
    pub(crate) fn set_session(&self, user: Option<UserProfile>) {
        self.state.borrow_mut().session = user;
    }

    pub(crate) fn add_user(&self, username: &str, password: &str, profile: UserProfile) {
        self.state
            .borrow_mut()
            .users
            .insert(username.to_string(), (password.to_string(), profile));
    }

    /// The next call to `op` fails with `err`.
    pub(crate) fn fail_next(&self, op: &'static str, err: ClientError) {
        self.state.borrow_mut().failures.insert(op, err);
    }

    /// The next `check_session` waits until the returned sender fires.
    pub(crate) fn hold_session_check(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().session_check_hold = Some(rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn insert_project(&self, project: Project) {
        let mut state = self.state.borrow_mut();
        state.current = Some(project.id);
        state.projects.push(project);
    }

    pub(crate) fn set_artifact(&self, id: ProjectId, kind: ArtifactKind, content: &str) {
        self.state
            .borrow_mut()
            .artifacts
            .insert((id, kind), content.to_string());
    }

    fn enter(&self, op: &'static str) -> Result<(), ClientError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(op);
        match state.failures.remove(op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn with_project<T>(
        &self,
        id: ProjectId,
        f: impl FnOnce(&mut Project) -> T,
    ) -> Result<T, ClientError> {
        let mut state = self.state.borrow_mut();
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ClientError::Server {
                status: 404,
                message: Some("Project not found".into()),
            })?;
        Ok(f(project))
    }

    fn attach(&self, id: ProjectId, filename: String, kind: DocumentKind) -> Result<(), ClientError> {
        let doc_id = {
            let mut state = self.state.borrow_mut();
            state.next_doc_id += 1;
            state.next_doc_id
        };
        self.with_project(id, |p| {
            p.documents.push(ProjectDocument {
                id: Some(doc_id),
                filename,
                file_type: kind,
            })
        })
    }
}

impl BackendApi for FakeBackend {
    async fn check_session(&self) -> Result<UserProfile, ClientError> {
        self.enter("check_session")?;
        // Answer reflects the session as it was when the request was made.
        let (reply, hold) = {
            let mut state = self.state.borrow_mut();
            let reply = state
                .session
                .clone()
                .ok_or(ClientError::Unauthorized { message: None });
            (reply, state.session_check_hold.take())
        };
        if let Some(hold) = hold {
            let _ = hold.await;
        }
        reply
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError> {
        self.enter("login")?;
        let mut state = self.state.borrow_mut();
        let profile = match state.users.get(&credentials.username) {
            Some((password, profile)) if *password == credentials.password => profile.clone(),
            _ => {
                return Err(ClientError::Unauthorized {
                    message: Some("Invalid credentials".into()),
                });
            }
        };
        state.session = Some(profile.clone());
        Ok(profile)
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.enter("logout")?;
        self.state.borrow_mut().session = None;
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        self.enter("register")?;
        if self.state.borrow().users.contains_key(&registration.username) {
            return Err(ClientError::Server {
                status: 400,
                message: Some("Username already exists".into()),
            });
        }
        let profile = UserProfile {
            username: Some(registration.username.clone()),
            email: Some(registration.email.clone()),
            ..UserProfile::default()
        };
        self.add_user(&registration.username, &registration.password, profile);
        Ok(())
    }

    async fn create_project(&self, name: &str) -> Result<Project, ClientError> {
        self.enter("create_project")?;
        let id = self.state.borrow().projects.len() as ProjectId + 1;
        let project = Project {
            id,
            name: name.to_string(),
            created_at: Some("2024-03-05T14:07:09".into()),
            ..Project::default()
        };
        self.insert_project(project.clone());
        Ok(project)
    }

    async fn current_project(&self) -> Result<Option<Project>, ClientError> {
        self.enter("current_project")?;
        let state = self.state.borrow();
        Ok(state
            .current
            .and_then(|id| state.projects.iter().find(|p| p.id == id).cloned()))
    }

    async fn list_projects(&self) -> Result<ProjectListing, ClientError> {
        self.enter("list_projects")?;
        let state = self.state.borrow();
        let (archived, active): (Vec<Project>, Vec<Project>) =
            state.projects.iter().cloned().partition(|p| p.archived);
        Ok(ProjectListing {
            active_projects: active,
            archived_projects: archived,
        })
    }

    async fn archive_project(&self, id: ProjectId) -> Result<(), ClientError> {
        self.enter("archive_project")?;
        self.with_project(id, |p| p.archived = true)
    }

    async fn unarchive_project(&self, id: ProjectId) -> Result<(), ClientError> {
        self.enter("unarchive_project")?;
        self.with_project(id, |p| p.archived = false)
    }

    async fn upload_outline(&self, id: ProjectId, file: UploadFile) -> Result<(), ClientError> {
        self.enter("upload_outline")?;
        self.attach(id, file.filename, DocumentKind::Outline)
    }

    async fn upload_documents(
        &self,
        id: ProjectId,
        files: Vec<UploadFile>,
    ) -> Result<(), ClientError> {
        self.enter("upload_documents")?;
        for file in files {
            self.attach(id, file.filename, DocumentKind::Supporting)?;
        }
        Ok(())
    }

    async fn process_project(&self, id: ProjectId) -> Result<(), ClientError> {
        self.enter("process_project")?;
        self.with_project(id, |p| p.has_output = true)
    }

    async fn fetch_artifact(
        &self,
        id: ProjectId,
        kind: ArtifactKind,
    ) -> Result<Artifact, ClientError> {
        self.enter("fetch_artifact")?;
        let project = self.with_project(id, |p| p.clone())?;
        let content = self.state.borrow().artifacts.get(&(id, kind)).cloned();
        Ok(Artifact {
            kind,
            project: Some(project),
            content,
        })
    }
}
