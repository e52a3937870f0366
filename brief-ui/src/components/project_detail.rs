use crate::bridge;
use crate::components::nav::NavBar;
use crate::components::ErrorAlert;
use crate::session::use_session;
use brief_core::views::{ProcessControl, ProjectDetailView, UploadKind};
use brief_core::{ArtifactKind, BackendApi, Route};
use leptos::*;
use leptos_router::{use_navigate, A};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

/// Current project: creation form when there is none, otherwise the
/// upload and processing panel. `creating` always starts on the form.
#[component]
pub fn ProjectDetailPage(#[prop(optional)] creating: bool) -> impl IntoView {
    let session = use_session();
    let navigate = store_value(use_navigate());
    let state = create_rw_signal(if creating {
        ProjectDetailView::creating()
    } else {
        ProjectDetailView::default()
    });

    let refresh = move || {
        let api = session.api();
        spawn_local(async move {
            let result = api.current_project().await;
            state.update(|v| v.apply_load(result));
        });
    };

    if !creating {
        state.update(ProjectDetailView::begin_load);
        refresh();
    }

    let create = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(name) = state.try_update(ProjectDetailView::begin_create).flatten() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let result = api.create_project(&name).await;
            let created = result.as_ref().ok().map(|p| p.id);
            state.update(|v| v.apply_create(result));
            if let (true, Some(id)) = (creating, created) {
                navigate.with_value(|nav| nav(&Route::Project(id).path(), Default::default()));
            }
        });
    };

    let upload = move |kind: UploadKind, ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let api = session.api();
        spawn_local(async move {
            let files = match bridge::selected_files(&input).await {
                Ok(files) => files,
                Err(err) => {
                    warn!(%err, "could not read selected files");
                    state.update(|v| v.error = Some("Could not read the selected file".into()));
                    return;
                }
            };
            let result = match kind {
                UploadKind::Outline => {
                    let begun = state
                        .with_untracked(|v| v.begin_upload_outline(files.into_iter().next()));
                    let Some((id, file)) = begun else { return };
                    api.upload_outline(id, file).await
                }
                UploadKind::Documents => {
                    let begun = state.with_untracked(|v| v.begin_upload_documents(files));
                    let Some((id, files)) = begun else { return };
                    api.upload_documents(id, files).await
                }
            };
            input.set_value("");
            if state.try_update(|v| v.apply_upload(kind, result)).unwrap_or(false) {
                refresh();
            }
        });
    };

    let process = move |_: ev::MouseEvent| {
        let Some(id) = state.try_update(ProjectDetailView::begin_process).flatten() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let result = api.process_project(id).await;
            if state.try_update(|v| v.apply_process(result)).unwrap_or(false) {
                refresh();
            }
        });
    };

    let project_name = move || {
        state.with(|v| v.current().map(|p| p.name.clone()).unwrap_or_default())
    };
    let title = Signal::derive(move || {
        let name = project_name();
        if name.is_empty() {
            "New Project".to_string()
        } else {
            name
        }
    });
    let control = move || state.with(ProjectDetailView::process_control);

    view! {
      <NavBar title=title/>
      <ErrorAlert
        message=Signal::derive(move || state.with(|v| v.error.clone()))
        on_dismiss=Callback::new(move |_| state.update(ProjectDetailView::dismiss_error))
      />
      <Show when=move || state.with(|v| v.project.is_loading()) fallback=|| ()>
        <p class="meta">"Loading project..."</p>
      </Show>

      <Show when=move || state.with(|v| v.project.loaded() == Some(&None)) fallback=|| ()>
        <section class="panel">
          <h2>"Create a Project"</h2>
          <form class="stack" on:submit=create>
            <label for="project-name">"Project Name"</label>
            <input
              id="project-name"
              type="text"
              placeholder="e.g. Smith v. Jones"
              prop:value=move || state.with(|v| v.name_input.clone())
              on:input=move |ev| state.update(|v| v.name_input = event_target_value(&ev))
            />
            <button type="submit" class="btn primary">"Create Project"</button>
          </form>
        </section>
      </Show>

      <Show when=move || state.with(|v| v.current().is_some()) fallback=|| ()>
        <section class="panel">
          <h2>"Documents"</h2>
          <ul class="documents">
            <For
              each=move || state.with(|v| v.current().map(|p| p.documents.clone()).unwrap_or_default())
              key=|d| (d.id, d.filename.clone())
              children=|d| view! {
                <li>
                  <span class="badge">{d.file_type.to_string()}</span>
                  " "
                  {d.filename}
                </li>
              }
            />
          </ul>
          <div class="stack">
            <label for="outline">"Upload Outline"</label>
            <input
              id="outline"
              type="file"
              accept=UploadKind::Outline.accept()
              on:change=move |ev| upload(UploadKind::Outline, ev)
            />
            <label for="documents">"Upload Supporting Documents"</label>
            <input
              id="documents"
              type="file"
              accept=UploadKind::Documents.accept()
              multiple
              on:change=move |ev| upload(UploadKind::Documents, ev)
            />
          </div>
        </section>

        <section class="panel row">
          <Show when=move || control() != ProcessControl::Hidden fallback=|| ()>
            <button
              class="btn primary"
              disabled=move || control() == ProcessControl::Disabled
              on:click=process
            >
              {move || if control() == ProcessControl::Disabled { "Processing..." } else { "Process Project" }}
            </button>
          </Show>
          <Show when=move || state.with(ProjectDetailView::has_output) fallback=|| ()>
            {move || {
                state.with(|v| v.current().map(|p| p.id)).map(|id| view! {
                  <A href=Route::Artifact(ArtifactKind::Timeline, id).path() class="btn secondary">
                    "View Timeline"
                  </A>
                  <A href=Route::Artifact(ArtifactKind::Narrative, id).path() class="btn secondary">
                    "View Narrative"
                  </A>
                })
            }}
          </Show>
        </section>
      </Show>
    }
}
