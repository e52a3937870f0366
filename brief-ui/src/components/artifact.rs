use crate::components::nav::NavBar;
use crate::components::ErrorAlert;
use crate::markdown;
use crate::session::use_session;
use brief_core::views::ArtifactView;
use brief_core::{ArtifactKind, BackendApi, ProjectId, Route};
use leptos::*;
use leptos_router::{use_params_map, A};
use wasm_bindgen_futures::spawn_local;

/// Rendered timeline or narrative of the project named in the path.
#[component]
pub fn ArtifactPage(kind: ArtifactKind) -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let project_id = create_memo(move |_| {
        params.with(|p| p.get("project_id").and_then(|id| id.parse::<ProjectId>().ok()))
    });
    let view_state = create_rw_signal(None::<ArtifactView>);

    create_effect(move |_| {
        let Some(id) = project_id.get() else {
            view_state.set(None);
            return;
        };
        let mut view = ArtifactView::new(kind, id);
        view.begin_load();
        view_state.set(Some(view));
        let api = session.api();
        spawn_local(async move {
            let result = api.fetch_artifact(id, kind).await;
            view_state.update(|v| {
                if let Some(v) = v.as_mut().filter(|v| v.project_id == id) {
                    v.apply_load(result);
                }
            });
        });
    });

    let title = Signal::derive(move || {
        view_state.with(|v| {
            v.as_ref()
                .map(ArtifactView::title)
                .unwrap_or_else(|| format!("{}:", kind.title()))
        })
    });
    let loading = move || view_state.with(|v| v.as_ref().is_some_and(|v| v.state.is_loading()));
    let error = Signal::derive(move || {
        view_state.with(|v| v.as_ref().and_then(|v| v.state.error().map(str::to_string)))
    });
    let html = move || {
        view_state.with(|v| v.as_ref().map(|v| markdown::to_html(v.markdown())).unwrap_or_default())
    };

    view! {
      <NavBar title=title/>
      <Show
        when=move || project_id.with(Option::is_some)
        fallback=|| view! { <p class="alert error">"Invalid project id"</p> }
      >
        <div class="row">
          {move || project_id.get().map(|id| view! {
            <A href=Route::Project(id).path() class="btn link">"Back to project"</A>
          })}
        </div>
        <ErrorAlert message=error/>
        <Show when=loading fallback=move || {
            let rendered = html();
            view! { <article class="panel markdown-content" inner_html=rendered></article> }
        }>
          <p class="meta">"Loading..."</p>
        </Show>
      </Show>
    }
}
