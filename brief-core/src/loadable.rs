use crate::error::ClientError;

/// Data-loading state of a single view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Inline, user-facing message.
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    pub fn finish(&mut self, result: Result<T, ClientError>, fallback: &str) {
        *self = match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.user_message(fallback)),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
