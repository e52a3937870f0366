//! Reactive wiring of the session gate into the component tree.

use brief_core::{SessionGate, SessionSlot, SessionState};
use brief_http::HttpBackend;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

/// Gate state kept in a signal so guards and nav bars re-render on change.
#[derive(Clone, Copy)]
pub struct SignalSlot(RwSignal<SessionState>);

impl SessionSlot for SignalSlot {
    fn get(&self) -> SessionState {
        self.0.get_untracked()
    }

    fn set(&self, state: SessionState) {
        self.0.set(state);
    }
}

type UiGate = SessionGate<HttpBackend, SignalSlot>;

/// Handle to the application's session, provided once through context.
/// Consumers only see the read side of the state signal.
#[derive(Clone, Copy)]
pub struct AppSession {
    gate: StoredValue<UiGate>,
    state: ReadSignal<SessionState>,
}

impl AppSession {
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state
    }

    pub fn api(&self) -> HttpBackend {
        self.gate.with_value(|gate| gate.api().clone())
    }

    pub fn gate(&self) -> UiGate {
        self.gate.get_value()
    }

    pub fn logout(&self) {
        let gate = self.gate();
        spawn_local(async move { gate.logout().await });
    }
}

pub fn provide_session(api: HttpBackend) -> AppSession {
    let signal = create_rw_signal(SessionState::Unknown);
    let gate = SessionGate::with_slot(api, SignalSlot(signal));
    let session = AppSession {
        gate: store_value(gate),
        state: signal.read_only(),
    };
    provide_context(session);
    session
}

pub fn use_session() -> AppSession {
    expect_context::<AppSession>()
}
