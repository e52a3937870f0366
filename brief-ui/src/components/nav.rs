use crate::session::use_session;
use brief_core::Route;
use leptos::*;
use leptos_router::A;

#[component]
pub fn NavBar(#[prop(into)] title: MaybeSignal<String>) -> impl IntoView {
    let session = use_session();
    let user = move || {
        session
            .state()
            .with(|s| s.user().map(|u| u.display_name().to_string()))
    };

    view! {
      <header class="row spread">
        <h1>{move || title.get()}</h1>
        <nav class="row">
          <span class="meta">{user}</span>
          <A href=Route::Landing.path() class="btn secondary">"Home"</A>
          <A href=Route::Projects.path() class="btn secondary">"My Projects"</A>
          <button class="btn secondary" on:click=move |_| session.logout()>"Logout"</button>
        </nav>
      </header>
    }
}
