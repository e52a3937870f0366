//! Client route table and the guard protected views go through.

use crate::dto::{ArtifactKind, ProjectId};
use crate::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Projects,
    NewProject,
    Project(ProjectId),
    Artifact(ArtifactKind, ProjectId),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["projects"] => Self::Projects,
            ["projects", "new"] => Self::NewProject,
            ["project", id] => id.parse().map_or(Self::NotFound, Self::Project),
            ["view", kind, id] => {
                let kind = match *kind {
                    "timeline" => ArtifactKind::Timeline,
                    "narrative" => ArtifactKind::Narrative,
                    _ => return Self::NotFound,
                };
                id.parse()
                    .map_or(Self::NotFound, |id| Self::Artifact(kind, id))
            }
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".into(),
            Self::Login => "/login".into(),
            Self::Register => "/register".into(),
            Self::Projects => "/projects".into(),
            Self::NewProject => "/projects/new".into(),
            Self::Project(id) => format!("/project/{id}"),
            Self::Artifact(kind, id) => format!("/view/{}/{id}", kind.slug()),
            Self::NotFound => "/404".into(),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Projects | Self::NewProject | Self::Project(_) | Self::Artifact(..)
        )
    }
}

/// How the guard treats a session that hasn't been checked yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPolicy {
    /// `Unknown` is treated like `Unauthenticated`: a protected route
    /// requested before `check_session` resolves goes to login even when
    /// the server session is valid.
    #[default]
    RedirectWhileUnknown,
    /// Hold protected routes in `Pending` until the session resolves.
    WaitForResolution,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
    Pending,
}

pub fn guard(route: &Route, session: &SessionState, policy: GuardPolicy) -> RouteDecision {
    if !route.is_protected() {
        return RouteDecision::Render;
    }
    protected_decision(session, policy)
}

/// Decision for a view that is protected regardless of how its path
/// parses. Wrappers around protected views call this directly.
pub fn protected_decision(session: &SessionState, policy: GuardPolicy) -> RouteDecision {
    match (session, policy) {
        (SessionState::Authenticated(_), _) => RouteDecision::Render,
        (SessionState::Unauthenticated, _) => RouteDecision::RedirectToLogin,
        (SessionState::Unknown, GuardPolicy::RedirectWhileUnknown) => RouteDecision::RedirectToLogin,
        (SessionState::Unknown, GuardPolicy::WaitForResolution) => RouteDecision::Pending,
    }
}
