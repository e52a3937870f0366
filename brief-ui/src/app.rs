use crate::bridge;
use crate::components::{
    ArtifactPage, LandingPage, LoginPage, NotFound, ProjectDetailPage, ProjectsPage, Protected,
    RegisterPage,
};
use crate::session::provide_session;
use brief_core::ArtifactKind;
use leptos::*;
use leptos_router::{Route, Router, Routes};
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let api = match bridge::backend() {
        Ok(api) => api,
        Err(err) => {
            error!(error = %err, "could not build backend client");
            return view! { <pre class="alert error">{format!("Failed to start: {err}")}</pre> }
                .into_view();
        }
    };
    info!(base_url = api.config().base_url(), "starting brief generator");

    let session = provide_session(api);
    let gate = session.gate();
    spawn_local(async move {
        gate.check_session().await;
    });

    view! {
      <Router>
        <main class="container">
          <Routes>
            <Route path="/" view=LandingPage/>
            <Route path="/login" view=LoginPage/>
            <Route path="/register" view=RegisterPage/>
            <Route path="/projects" view=|| view! { <Protected><ProjectsPage/></Protected> }/>
            <Route
              path="/projects/new"
              view=|| view! { <Protected><ProjectDetailPage creating=true/></Protected> }
            />
            <Route
              path="/project/:project_id"
              view=|| view! { <Protected><ProjectDetailPage/></Protected> }
            />
            <Route
              path="/view/timeline/:project_id"
              view=|| view! { <Protected><ArtifactPage kind=ArtifactKind::Timeline/></Protected> }
            />
            <Route
              path="/view/narrative/:project_id"
              view=|| view! { <Protected><ArtifactPage kind=ArtifactKind::Narrative/></Protected> }
            />
            <Route path="/*any" view=NotFound/>
          </Routes>
        </main>
      </Router>
    }
    .into_view()
}
