use brief_core::Route;
use leptos::*;
use leptos_router::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
      <div class="landing">
        <header class="landing-header">
          <h1>"Legal Court Brief Generator"</h1>
          <p class="subtitle">"Turn a case outline and its supporting documents into a timeline and a narrative."</p>
        </header>

        <section class="steps">
          <div class="step">
            <div class="step-number">"1"</div>
            <h4>"Create a project"</h4>
            <p>"One project per brief."</p>
          </div>
          <div class="step">
            <div class="step-number">"2"</div>
            <h4>"Upload"</h4>
            <p>"An outline (.txt) and supporting documents (.pdf)."</p>
          </div>
          <div class="step">
            <div class="step-number">"3"</div>
            <h4>"Process"</h4>
            <p>"Read the generated timeline and narrative."</p>
          </div>
        </section>

        <section class="row">
          <A href=Route::Register.path() class="btn primary">"Get Started"</A>
          <A href=Route::Login.path() class="btn secondary">"Login"</A>
        </section>
      </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <div class="panel">
        <h2>"Page not found"</h2>
        <A href=Route::Landing.path()>"Back to home"</A>
      </div>
    }
}
