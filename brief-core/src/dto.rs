use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ProjectId = i64;

/// Profile record returned by the backend after a successful login or
/// session check. Fields the client doesn't read are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("user")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentKind {
    Outline,
    Supporting,
    Other(String),
}

impl From<String> for DocumentKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "outline" => Self::Outline,
            "supporting" => Self::Supporting,
            _ => Self::Other(value),
        }
    }
}

impl From<DocumentKind> for String {
    fn from(kind: DocumentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl DocumentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Outline => "outline",
            Self::Supporting => "supporting",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub id: Option<i64>,
    pub filename: String,
    pub file_type: DocumentKind,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub documents: Vec<ProjectDocument>,
    #[serde(default)]
    pub has_output: bool,
}

impl Project {
    pub fn has_document(&self, kind: &DocumentKind) -> bool {
        self.documents.iter().any(|d| &d.file_type == kind)
    }

    /// Outline and at least one supporting document are both attached.
    pub fn ready_for_processing(&self) -> bool {
        self.has_document(&DocumentKind::Outline) && self.has_document(&DocumentKind::Supporting)
    }

    /// `created_at` as `YYYY-MM-DD HH:MM`, or the raw text when it
    /// isn't a timestamp format we recognise.
    pub fn created_display(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        format_timestamp(raw).unwrap_or_else(|| raw.to_string())
    }
}

fn format_timestamp(raw: &str) -> Option<String> {
    const OUT: &str = "%Y-%m-%d %H:%M";
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format(OUT).to_string());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.format(OUT).to_string());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(OUT).to_string())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectListing {
    #[serde(default)]
    pub active_projects: Vec<Project>,
    #[serde(default)]
    pub archived_projects: Vec<Project>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Timeline,
    Narrative,
}

impl ArtifactKind {
    /// Path segment under `/api/projects/{id}/` and `/view/`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Narrative => "narrative",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Narrative => "Narrative",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Timeline => "No timeline content available",
            Self::Narrative => "No narrative content available",
        }
    }

    pub fn load_error(self) -> &'static str {
        match self {
            Self::Timeline => "Error loading timeline",
            Self::Narrative => "Error loading narrative",
        }
    }
}

/// Generated output for one project.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub project: Option<Project>,
    pub content: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A file selected by the user, already read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
