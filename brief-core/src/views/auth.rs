use crate::api::BackendApi;
use crate::dto::Registration;
use crate::error::ClientError;
use crate::routes::Route;
use crate::session::{LoginOutcome, SessionGate, SessionSlot};
use tracing::warn;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    /// Validates and marks the form as submitting. Returns the credentials
    /// to send, or `None` with `error` set.
    pub fn begin_submit(&mut self) -> Option<(String, String)> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".into());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some((username.to_string(), self.password.clone()))
    }

    /// Returns where to navigate next on success.
    pub fn apply_outcome(&mut self, outcome: &LoginOutcome) -> Option<Route> {
        self.submitting = false;
        self.password.clear();
        match outcome {
            LoginOutcome::Success => Some(Route::Projects),
            LoginOutcome::Rejected { message } => {
                self.error = Some(message.clone());
                None
            }
        }
    }

    pub async fn submit<A, S>(&mut self, gate: &SessionGate<A, S>) -> Option<Route>
    where
        A: BackendApi,
        S: SessionSlot,
    {
        let (username, password) = self.begin_submit()?;
        let outcome = gate.login(&username, &password).await;
        self.apply_outcome(&outcome)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, ClientError> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ClientError::Validation(
                "Username, email and password are required".into(),
            ));
        }
        if !email.contains('@') {
            return Err(ClientError::Validation("Enter a valid email address".into()));
        }
        Ok(Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }

    pub fn begin_submit(&mut self) -> Option<Registration> {
        match self.validate() {
            Ok(registration) => {
                self.error = None;
                self.submitting = true;
                Some(registration)
            }
            Err(err) => {
                self.error = Some(err.user_message("Registration failed"));
                None
            }
        }
    }

    pub fn apply_result(&mut self, result: Result<(), ClientError>) -> Option<Route> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.password.clear();
                Some(Route::Login)
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.error = Some(err.user_message("Registration failed"));
                None
            }
        }
    }

    pub async fn submit<A: BackendApi>(&mut self, api: &A) -> Option<Route> {
        let registration = self.begin_submit()?;
        let result = api.register(&registration).await;
        self.apply_result(result)
    }
}
