use crate::components::ErrorAlert;
use crate::session::use_session;
use brief_core::views::{LoginForm, RegisterForm};
use brief_core::{BackendApi, Route};
use leptos::*;
use leptos_router::{use_navigate, A};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = create_rw_signal(LoginForm::default());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some((username, password)) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        let gate = session.gate();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = gate.login(&username, &password).await;
            if let Some(next) = form.try_update(|f| f.apply_outcome(&outcome)).flatten() {
                navigate(&next.path(), Default::default());
            }
        });
    };

    view! {
      <div class="panel narrow">
        <h1>"Login"</h1>
        <ErrorAlert message=Signal::derive(move || form.with(|f| f.error.clone()))/>
        <form class="stack" on:submit=submit>
          <label for="username">"Username"</label>
          <input
            id="username"
            type="text"
            required
            prop:value=move || form.with(|f| f.username.clone())
            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
          />
          <label for="password">"Password"</label>
          <input
            id="password"
            type="password"
            required
            prop:value=move || form.with(|f| f.password.clone())
            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
          />
          <div class="row">
            <button type="submit" class="btn primary" disabled=move || form.with(|f| f.submitting)>
              "Login"
            </button>
            <A href=Route::Register.path() class="btn link">"Need an account? Register"</A>
          </div>
        </form>
      </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = create_rw_signal(RegisterForm::default());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(registration) = form.try_update(RegisterForm::begin_submit).flatten() else {
            return;
        };
        let api = session.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.register(&registration).await;
            if let Some(next) = form.try_update(|f| f.apply_result(result)).flatten() {
                navigate(&next.path(), Default::default());
            }
        });
    };

    view! {
      <div class="panel narrow">
        <h1>"Register"</h1>
        <ErrorAlert message=Signal::derive(move || form.with(|f| f.error.clone()))/>
        <form class="stack" on:submit=submit>
          <label for="username">"Username"</label>
          <input
            id="username"
            type="text"
            required
            prop:value=move || form.with(|f| f.username.clone())
            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
          />
          <label for="email">"Email"</label>
          <input
            id="email"
            type="email"
            required
            prop:value=move || form.with(|f| f.email.clone())
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
          />
          <label for="password">"Password"</label>
          <input
            id="password"
            type="password"
            required
            prop:value=move || form.with(|f| f.password.clone())
            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
          />
          <div class="row">
            <button type="submit" class="btn primary" disabled=move || form.with(|f| f.submitting)>
              "Register"
            </button>
            <A href=Route::Login.path() class="btn link">"Already have an account? Login"</A>
          </div>
        </form>
      </div>
    }
}
