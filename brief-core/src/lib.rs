//! Client-side state for the brief generator: the session gate, the route
//! guard, and one view model per page. Everything talks to the backend
//! through [`BackendApi`].

pub mod api;
pub mod dto;
pub mod error;
pub mod loadable;
pub mod routes;
pub mod session;
pub mod views;

#[cfg(test)]
mod fake;

pub use api::BackendApi;
pub use dto::{
    Artifact, ArtifactKind, Credentials, DocumentKind, Project, ProjectDocument, ProjectId,
    ProjectListing, Registration, UploadFile, UserProfile,
};
pub use error::ClientError;
pub use loadable::Loadable;
pub use routes::{guard, protected_decision, GuardPolicy, Route, RouteDecision};
pub use session::{LocalSlot, LoginOutcome, SessionGate, SessionSlot, SessionState};
