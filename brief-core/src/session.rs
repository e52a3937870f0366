//! Client-side session gate.
//!
//! The gate is the single owner of the client's belief about whether it
//! holds an authenticated backend session. State lives behind a
//! [`SessionSlot`] so the same transitions can drive a plain cell or a
//! reactive signal; nothing but the gate writes to its slot.
//!
//! ```text
//! Unknown --check_session--> Authenticated | Unauthenticated
//! *       --login(ok)------> Authenticated
//! *       --login(err)-----> Unauthenticated
//! *       --logout---------> Unauthenticated
//! ```
//!
//! A `check_session` reply that arrives after a `login` or `logout` has
//! already resolved the state is discarded.

use crate::api::BackendApi;
use crate::dto::{Credentials, UserProfile};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{info, warn};

pub const LOGIN_REJECTED_MESSAGE: &str = "Invalid username or password";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Start-up state, before `check_session` has resolved.
    #[default]
    Unknown,
    Authenticated(UserProfile),
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }
}

/// Storage for the gate's current state.
pub trait SessionSlot {
    fn get(&self) -> SessionState;
    fn set(&self, state: SessionState);
}

/// In-memory slot for a single-threaded event loop.
#[derive(Clone, Debug, Default)]
pub struct LocalSlot(Rc<RefCell<SessionState>>);

impl SessionSlot for LocalSlot {
    fn get(&self) -> SessionState {
        self.0.borrow().clone()
    }

    fn set(&self, state: SessionState) {
        *self.0.borrow_mut() = state;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Rejected { message: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Clone, Debug)]
pub struct SessionGate<A, S = LocalSlot> {
    api: A,
    slot: S,
    /// Bumped by every `login`/`logout`; shared between clones.
    generation: Rc<Cell<u64>>,
}

impl<A: BackendApi> SessionGate<A, LocalSlot> {
    pub fn new(api: A) -> Self {
        Self::with_slot(api, LocalSlot::default())
    }
}

impl<A: BackendApi, S: SessionSlot> SessionGate<A, S> {
    /// Takes ownership of `slot` and resets it to `Unknown`.
    pub fn with_slot(api: A, slot: S) -> Self {
        slot.set(SessionState::Unknown);
        Self {
            api,
            slot,
            generation: Rc::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.slot.get()
    }

    /// The transport the gate talks through, shared with the views so that
    /// they carry the same session credential.
    pub fn api(&self) -> &A {
        &self.api
    }

    fn bump_generation(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Resolves `Unknown` against the backend. Never fails: any error is
    /// absorbed into `Unauthenticated`. If a login or logout lands while
    /// the request is in flight, the reply is dropped and the current
    /// state returned.
    pub async fn check_session(&self) -> SessionState {
        let started = self.generation.get();
        let result = self.api.check_session().await;
        if self.generation.get() != started {
            info!("session check superseded by login/logout; reply ignored");
            return self.slot.get();
        }
        let next = match result {
            Ok(user) => {
                info!(user = user.display_name(), "existing session found");
                SessionState::Authenticated(user)
            }
            Err(err) => {
                info!(error = %err, "no valid session");
                SessionState::Unauthenticated
            }
        };
        self.slot.set(next.clone());
        next
    }

    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = self.api.login(&credentials).await;
        self.bump_generation();
        match result {
            Ok(user) => {
                info!(user = user.display_name(), "logged in");
                self.slot.set(SessionState::Authenticated(user));
                LoginOutcome::Success
            }
            Err(err) => {
                info!(username, error = %err, "login rejected");
                self.slot.set(SessionState::Unauthenticated);
                LoginOutcome::Rejected {
                    message: LOGIN_REJECTED_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Always ends `Unauthenticated`, whatever the backend says.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            warn!(error = %err, "logout request failed; clearing session anyway");
        }
        self.bump_generation();
        self.slot.set(SessionState::Unauthenticated);
        info!("logged out");
    }
}
