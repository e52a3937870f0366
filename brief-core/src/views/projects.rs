use crate::api::BackendApi;
use crate::dto::{ProjectId, ProjectListing};
use crate::error::ClientError;
use crate::loadable::Loadable;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListAction {
    Archive,
    Unarchive,
}

impl ListAction {
    fn failure_message(self) -> &'static str {
        match self {
            Self::Archive => "Error archiving project",
            Self::Unarchive => "Error unarchiving project",
        }
    }
}

/// Active and archived projects of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectListView {
    pub listing: Loadable<ProjectListing>,
    pub action_error: Option<String>,
}

impl ProjectListView {
    pub fn begin_load(&mut self) {
        // Keep the current list on screen while refreshing.
        if self.listing.loaded().is_none() {
            self.listing.begin();
        }
    }

    /// A failed refresh leaves an already loaded list on screen and reports
    /// the failure through `action_error` instead.
    pub fn apply_load(&mut self, result: Result<ProjectListing, ClientError>) {
        match result {
            Err(err) if self.listing.loaded().is_some() => {
                warn!(error = %err, "failed to refresh projects");
                self.action_error = Some(err.user_message("Error fetching projects"));
            }
            result => {
                match &result {
                    Ok(_) => self.action_error = None,
                    Err(err) => warn!(error = %err, "failed to fetch projects"),
                }
                self.listing.finish(result, "Error fetching projects");
            }
        }
    }

    /// Returns whether the listing should be re-fetched.
    pub fn apply_action(&mut self, action: ListAction, result: Result<(), ClientError>) -> bool {
        match result {
            Ok(()) => {
                self.action_error = None;
                true
            }
            Err(err) => {
                warn!(?action, error = %err, "project action failed");
                self.action_error = Some(err.user_message(action.failure_message()));
                false
            }
        }
    }

    pub async fn load<A: BackendApi>(&mut self, api: &A) {
        debug!("loading project list");
        self.begin_load();
        let result = api.list_projects().await;
        self.apply_load(result);
    }

    pub async fn archive<A: BackendApi>(&mut self, api: &A, id: ProjectId) {
        let result = api.archive_project(id).await;
        if self.apply_action(ListAction::Archive, result) {
            self.load(api).await;
        }
    }

    pub async fn unarchive<A: BackendApi>(&mut self, api: &A, id: ProjectId) {
        let result = api.unarchive_project(id).await;
        if self.apply_action(ListAction::Unarchive, result) {
            self.load(api).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Project;
    use crate::fake::FakeBackend;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn backend_with(names: &[&str]) -> FakeBackend {
        let backend = FakeBackend::default();
        for (i, name) in names.iter().enumerate() {
            backend.insert_project(Project {
                id: i as ProjectId + 1,
                name: name.to_string(),
                ..Project::default()
            });
        }
        backend
    }

    fn names(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn archive_moves_project_and_refetches() {
        let backend = backend_with(&["Brief A", "Brief B"]);
        let mut view = ProjectListView::default();
        block_on(view.load(&backend));
        block_on(view.archive(&backend, 1));

        let listing = view.listing.loaded().expect("loaded");
        assert_eq!(names(&listing.active_projects), vec!["Brief B"]);
        assert_eq!(names(&listing.archived_projects), vec!["Brief A"]);
        assert_eq!(
            backend.calls(),
            vec!["list_projects", "archive_project", "list_projects"]
        );

        block_on(view.unarchive(&backend, 1));
        let listing = view.listing.loaded().expect("loaded");
        assert_eq!(listing.archived_projects.len(), 0);
    }

    #[test]
    fn failed_action_keeps_listing_and_reports() {
        let backend = backend_with(&["Brief A"]);
        let mut view = ProjectListView::default();
        block_on(view.load(&backend));

        block_on(view.archive(&backend, 42));
        assert_eq!(view.action_error.as_deref(), Some("Project not found"));
        assert_eq!(view.listing.loaded().map(|l| l.active_projects.len()), Some(1));
    }

    #[test]
    fn failed_refresh_after_action_keeps_listing() {
        let backend = backend_with(&["Brief A", "Brief B"]);
        let mut view = ProjectListView::default();
        block_on(view.load(&backend));

        backend.fail_next("list_projects", ClientError::Transport("offline".into()));
        block_on(view.archive(&backend, 1));

        let listing = view.listing.loaded().expect("listing still shown");
        assert_eq!(names(&listing.active_projects), vec!["Brief A", "Brief B"]);
        assert_eq!(view.action_error.as_deref(), Some("Error fetching projects"));

        block_on(view.load(&backend));
        let listing = view.listing.loaded().expect("loaded");
        assert_eq!(names(&listing.active_projects), vec!["Brief B"]);
        assert_eq!(view.action_error, None);
    }

    #[test]
    fn load_failure_is_inline() {
        let backend = FakeBackend::default();
        backend.fail_next("list_projects", ClientError::Transport("offline".into()));
        let mut view = ProjectListView::default();
        block_on(view.load(&backend));
        assert_eq!(view.listing.error(), Some("Error fetching projects"));
    }
}
