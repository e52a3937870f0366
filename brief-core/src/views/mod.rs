pub mod artifact;
pub mod auth;
pub mod project_detail;
pub mod projects;

pub use artifact::ArtifactView;
pub use auth::{LoginForm, RegisterForm};
pub use project_detail::{ProcessControl, ProjectDetailView, UploadKind};
pub use projects::{ListAction, ProjectListView};
