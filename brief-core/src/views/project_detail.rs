//! The current-project screen: create a project, attach its outline and
//! supporting documents, and trigger processing.

use crate::api::BackendApi;
use crate::dto::{Project, ProjectId, UploadFile};
use crate::error::ClientError;
use crate::loadable::Loadable;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessControl {
    /// Outline or supporting documents still missing.
    Hidden,
    /// A process request is in flight.
    Disabled,
    Enabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Outline,
    Documents,
}

impl UploadKind {
    /// File-picker filter; the backend only takes `.txt` outlines and
    /// `.pdf` supporting documents.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Outline => ".txt",
            Self::Documents => ".pdf",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::Outline => "Error uploading outline",
            Self::Documents => "Error uploading documents",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDetailView {
    /// `Loaded(None)` means the user has no current project yet.
    pub project: Loadable<Option<Project>>,
    pub name_input: String,
    pub error: Option<String>,
    pub processing: bool,
}

impl ProjectDetailView {
    /// Blank creation form; nothing to fetch.
    pub fn creating() -> Self {
        Self {
            project: Loadable::Loaded(None),
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&Project> {
        self.project.loaded().and_then(Option::as_ref)
    }

    pub fn has_output(&self) -> bool {
        self.current().is_some_and(|p| p.has_output)
    }

    pub fn process_control(&self) -> ProcessControl {
        match self.current() {
            Some(p) if p.ready_for_processing() => {
                if self.processing {
                    ProcessControl::Disabled
                } else {
                    ProcessControl::Enabled
                }
            }
            _ => ProcessControl::Hidden,
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn begin_load(&mut self) {
        self.project.begin();
    }

    /// Applies a fetch of the current project. A failed refresh keeps the
    /// project already on screen and only raises the inline error.
    pub fn apply_load(&mut self, result: Result<Option<Project>, ClientError>) {
        match result {
            Ok(project) => self.project = Loadable::Loaded(project),
            Err(err) => {
                warn!(error = %err, "failed to fetch current project");
                let message = "Error fetching project details".to_string();
                if self.project.loaded().is_none() {
                    self.project = Loadable::Failed(message.clone());
                }
                self.error = Some(message);
            }
        }
    }

    /// Validates the name input. Returns the trimmed name to create.
    pub fn begin_create(&mut self) -> Option<String> {
        self.error = None;
        let name = self.name_input.trim();
        if name.is_empty() {
            self.error = Some("Project name is required".into());
            return None;
        }
        Some(name.to_string())
    }

    pub fn apply_create(&mut self, result: Result<Project, ClientError>) {
        match result {
            Ok(project) => {
                info!(project_id = project.id, name = %project.name, "project created");
                self.project = Loadable::Loaded(Some(project));
                self.name_input.clear();
            }
            Err(ClientError::Rejected) => {
                self.error = Some("Failed to create project".into());
            }
            Err(err) => {
                warn!(error = %err, "failed to create project");
                self.error = Some(err.user_message("Error creating project"));
            }
        }
    }

    /// `None` when nothing was selected or there is no current project.
    pub fn begin_upload_outline(&self, file: Option<UploadFile>) -> Option<(ProjectId, UploadFile)> {
        let id = self.current()?.id;
        Some((id, file?))
    }

    pub fn begin_upload_documents(
        &self,
        files: Vec<UploadFile>,
    ) -> Option<(ProjectId, Vec<UploadFile>)> {
        let id = self.current()?.id;
        if files.is_empty() {
            return None;
        }
        Some((id, files))
    }

    /// Returns whether the current project should be re-fetched.
    pub fn apply_upload(&mut self, kind: UploadKind, result: Result<(), ClientError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!(?kind, error = %err, "upload failed");
                self.error = Some(kind.failure_message().into());
                false
            }
        }
    }

    /// Marks processing as in flight. `None` while the control isn't
    /// enabled, so a second click is ignored.
    pub fn begin_process(&mut self) -> Option<ProjectId> {
        if self.process_control() != ProcessControl::Enabled {
            return None;
        }
        let id = self.current()?.id;
        self.processing = true;
        self.error = None;
        Some(id)
    }

    /// Returns whether the current project should be re-fetched.
    pub fn apply_process(&mut self, result: Result<(), ClientError>) -> bool {
        self.processing = false;
        match result {
            Ok(()) => true,
            Err(ClientError::Rejected) => {
                self.error = Some("Failed to process project".into());
                false
            }
            Err(err) => {
                warn!(error = %err, "processing failed");
                self.error = Some(err.user_message("Error processing project"));
                false
            }
        }
    }

    pub async fn load<A: BackendApi>(&mut self, api: &A) {
        self.begin_load();
        self.refresh(api).await;
    }

    pub async fn refresh<A: BackendApi>(&mut self, api: &A) {
        debug!("fetching current project");
        let result = api.current_project().await;
        self.apply_load(result);
    }

    pub async fn create_project<A: BackendApi>(&mut self, api: &A) {
        let Some(name) = self.begin_create() else {
            return;
        };
        let result = api.create_project(&name).await;
        self.apply_create(result);
    }

    pub async fn upload_outline<A: BackendApi>(&mut self, api: &A, file: Option<UploadFile>) {
        let Some((id, file)) = self.begin_upload_outline(file) else {
            return;
        };
        let result = api.upload_outline(id, file).await;
        if self.apply_upload(UploadKind::Outline, result) {
            self.refresh(api).await;
        }
    }

    pub async fn upload_documents<A: BackendApi>(&mut self, api: &A, files: Vec<UploadFile>) {
        let Some((id, files)) = self.begin_upload_documents(files) else {
            return;
        };
        let result = api.upload_documents(id, files).await;
        if self.apply_upload(UploadKind::Documents, result) {
            self.refresh(api).await;
        }
    }

    pub async fn process<A: BackendApi>(&mut self, api: &A) {
        let Some(id) = self.begin_process() else {
            return;
        };
        info!(project_id = id, "processing project");
        let result = api.process_project(id).await;
        if self.apply_process(result) {
            self.refresh(api).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::DocumentKind;
    use crate::fake::FakeBackend;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn view_with_project(backend: &FakeBackend, name: &str) -> ProjectDetailView {
        let mut view = ProjectDetailView {
            name_input: name.into(),
            ..ProjectDetailView::default()
        };
        block_on(view.load(backend));
        block_on(view.create_project(backend));
        view
    }

    #[test]
    fn no_current_project_is_loaded_none() {
        let backend = FakeBackend::default();
        let mut view = ProjectDetailView::default();
        block_on(view.load(&backend));
        assert_eq!(view.project, Loadable::Loaded(None));
        assert_eq!(view.process_control(), ProcessControl::Hidden);
    }

    #[test]
    fn create_sets_current_project() {
        let backend = FakeBackend::default();
        let view = view_with_project(&backend, "Brief A");

        let project = view.current().expect("current project");
        assert_eq!(project.name, "Brief A");
        assert!(project.documents.is_empty());
        assert!(view.name_input.is_empty());
        assert_eq!(view.error, None);
    }

    #[test]
    fn creating_starts_with_empty_form() {
        let view = ProjectDetailView::creating();
        assert_eq!(view.current(), None);
        assert!(!view.project.is_loading());
        assert_eq!(view.process_control(), ProcessControl::Hidden);
    }

    #[test]
    fn upload_pickers_match_backend_file_types() {
        assert_eq!(UploadKind::Outline.accept(), ".txt");
        assert_eq!(UploadKind::Documents.accept(), ".pdf");
    }

    #[test]
    fn create_requires_name() {
        let backend = FakeBackend::default();
        let mut view = ProjectDetailView {
            name_input: "   ".into(),
            ..ProjectDetailView::default()
        };
        block_on(view.create_project(&backend));
        assert_eq!(view.error.as_deref(), Some("Project name is required"));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn create_rejected_by_server() {
        let backend = FakeBackend::default();
        backend.fail_next("create_project", ClientError::Rejected);
        let mut view = ProjectDetailView {
            name_input: "Brief A".into(),
            ..ProjectDetailView::default()
        };
        block_on(view.create_project(&backend));
        assert_eq!(view.error.as_deref(), Some("Failed to create project"));
        assert_eq!(view.name_input, "Brief A");
    }

    #[test]
    fn process_enabled_only_after_both_document_kinds() {
        let backend = FakeBackend::default();
        let mut view = view_with_project(&backend, "Brief A");
        assert_eq!(view.process_control(), ProcessControl::Hidden);

        block_on(view.upload_outline(&backend, Some(UploadFile::new("outline.txt", "1. intro"))));
        assert!(view
            .current()
            .is_some_and(|p| p.has_document(&DocumentKind::Outline)));
        assert_eq!(view.process_control(), ProcessControl::Hidden);

        block_on(view.upload_documents(&backend, vec![UploadFile::new("exhibit.pdf", b"%PDF".to_vec())]));
        assert_eq!(view.process_control(), ProcessControl::Enabled);
    }

    #[test]
    fn empty_selection_is_noop() {
        let backend = FakeBackend::default();
        let mut view = view_with_project(&backend, "Brief A");
        let before = backend.calls().len();

        block_on(view.upload_outline(&backend, None));
        block_on(view.upload_documents(&backend, Vec::new()));
        assert_eq!(backend.calls().len(), before);
    }

    #[test]
    fn upload_failure_keeps_project() {
        let backend = FakeBackend::default();
        let mut view = view_with_project(&backend, "Brief A");
        backend.fail_next("upload_outline", ClientError::Transport("reset".into()));

        block_on(view.upload_outline(&backend, Some(UploadFile::new("o.txt", "x"))));
        assert_eq!(view.error.as_deref(), Some("Error uploading outline"));
        assert!(view.current().is_some());

        view.dismiss_error();
        assert_eq!(view.error, None);
    }

    #[test]
    fn process_disables_control_while_in_flight() {
        let backend = FakeBackend::default();
        let mut view = view_with_project(&backend, "Brief A");
        block_on(view.upload_outline(&backend, Some(UploadFile::new("o.txt", "x"))));
        block_on(view.upload_documents(&backend, vec![UploadFile::new("a.pdf", "y")]));

        let id = view.begin_process().expect("enabled");
        assert_eq!(view.process_control(), ProcessControl::Disabled);
        assert_eq!(view.begin_process(), None);

        let result = block_on(backend.process_project(id));
        assert!(view.apply_process(result));
        block_on(view.refresh(&backend));
        assert_eq!(view.process_control(), ProcessControl::Enabled);
        assert!(view.has_output());
    }

    #[test]
    fn process_rejection_is_reported() {
        let backend = FakeBackend::default();
        let mut view = view_with_project(&backend, "Brief A");
        block_on(view.upload_outline(&backend, Some(UploadFile::new("o.txt", "x"))));
        block_on(view.upload_documents(&backend, vec![UploadFile::new("a.pdf", "y")]));

        backend.fail_next("process_project", ClientError::Rejected);
        block_on(view.process(&backend));
        assert_eq!(view.error.as_deref(), Some("Failed to process project"));
        assert!(!view.processing);
        assert!(!view.has_output());
    }

    #[test]
    fn failed_refresh_keeps_project_on_screen() {
        let backend = FakeBackend::default();
        let mut view = view_with_project(&backend, "Brief A");
        backend.fail_next("current_project", ClientError::Transport("offline".into()));

        block_on(view.refresh(&backend));
        assert_eq!(view.current().map(|p| p.name.as_str()), Some("Brief A"));
        assert_eq!(view.error.as_deref(), Some("Error fetching project details"));
    }
}
