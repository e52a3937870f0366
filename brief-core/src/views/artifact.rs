use crate::api::BackendApi;
use crate::dto::{Artifact, ArtifactKind, ProjectId};
use crate::error::ClientError;
use crate::loadable::Loadable;
use tracing::{debug, warn};

/// Timeline or narrative page for one project.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtifactView {
    pub kind: ArtifactKind,
    pub project_id: ProjectId,
    pub state: Loadable<Artifact>,
}

impl ArtifactView {
    pub fn new(kind: ArtifactKind, project_id: ProjectId) -> Self {
        Self {
            kind,
            project_id,
            state: Loadable::Idle,
        }
    }

    pub fn begin_load(&mut self) {
        self.state.begin();
    }

    pub fn apply_load(&mut self, result: Result<Artifact, ClientError>) {
        if let Err(err) = &result {
            warn!(kind = self.kind.slug(), project_id = self.project_id, error = %err, "artifact fetch failed");
        }
        self.state.finish(result, self.kind.load_error());
    }

    pub fn title(&self) -> String {
        match self.project_name() {
            Some(name) => format!("{}: {name}", self.kind.title()),
            None => format!("{}:", self.kind.title()),
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        self.state
            .loaded()
            .and_then(|a| a.project.as_ref())
            .map(|p| p.name.as_str())
    }

    /// Markdown to render. Falls back to a placeholder whenever there is
    /// no generated content, so the page is never blank.
    pub fn markdown(&self) -> &str {
        self.state
            .loaded()
            .and_then(|a| a.content.as_deref())
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(self.kind.placeholder())
    }

    pub async fn load<A: BackendApi>(&mut self, api: &A) {
        debug!(kind = self.kind.slug(), project_id = self.project_id, "loading artifact");
        self.begin_load();
        let result = api.fetch_artifact(self.project_id, self.kind).await;
        self.apply_load(result);
    }
}
