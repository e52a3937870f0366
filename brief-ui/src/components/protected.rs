use crate::session::use_session;
use brief_core::{protected_decision, GuardPolicy, Route, RouteDecision};
use leptos::*;
use leptos_router::{use_location, Redirect};
use tracing::debug;

/// Renders `children` only for an authenticated session; otherwise sends
/// the client to the login page.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let decision = create_memo(move |_| {
        let decision = session
            .state()
            .with(|state| protected_decision(state, GuardPolicy::default()));
        debug!(route = ?Route::parse(&location.pathname.get_untracked()), ?decision, "route guard");
        decision
    });

    move || match decision.get() {
        RouteDecision::Render => children().into_view(),
        RouteDecision::RedirectToLogin => view! { <Redirect path=Route::Login.path()/> }.into_view(),
        RouteDecision::Pending => view! { <p class="meta">"Checking session..."</p> }.into_view(),
    }
}
