pub mod artifact;
pub mod auth;
pub mod landing;
pub mod nav;
pub mod project_detail;
pub mod projects;
pub mod protected;

pub use artifact::ArtifactPage;
pub use auth::{LoginPage, RegisterPage};
pub use landing::{LandingPage, NotFound};
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use protected::Protected;

use leptos::*;

/// Dismissable inline alert bound to an optional message.
#[component]
pub fn ErrorAlert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
      <Show when=move || message.with(Option::is_some) fallback=|| ()>
        <div class="alert error" role="alert">
          <span>{move || message.get().unwrap_or_default()}</span>
          {on_dismiss.map(|cb| view! {
            <button class="close" aria-label="Close" on:click=move |_| cb.call(())>"×"</button>
          })}
        </div>
      </Show>
    }
}
