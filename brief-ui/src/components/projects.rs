use crate::components::nav::NavBar;
use crate::components::ErrorAlert;
use crate::session::use_session;
use brief_core::views::{ListAction, ProjectListView};
use brief_core::{BackendApi, Project, ProjectId, ProjectListing, Route};
use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = use_session();
    let list = create_rw_signal(ProjectListView::default());

    let load = move || {
        list.update(ProjectListView::begin_load);
        let api = session.api();
        spawn_local(async move {
            let result = api.list_projects().await;
            list.update(|v| v.apply_load(result));
        });
    };

    let act = move |action: ListAction, id: ProjectId| {
        let api = session.api();
        spawn_local(async move {
            let result = match action {
                ListAction::Archive => api.archive_project(id).await,
                ListAction::Unarchive => api.unarchive_project(id).await,
            };
            if list.try_update(|v| v.apply_action(action, result)).unwrap_or(false) {
                load();
            }
        });
    };

    load();

    let projects = move |pick: fn(&ProjectListing) -> &[Project]| {
        list.with(|v| v.listing.loaded().map(|l| pick(l).to_vec()).unwrap_or_default())
    };

    view! {
      <NavBar title="My Projects".to_string()/>
      <div class="row">
        <A href=Route::NewProject.path() class="btn primary">"New Project"</A>
      </div>
      <ErrorAlert message=Signal::derive(move || list.with(|v| v.action_error.clone()))/>
      <ErrorAlert message=Signal::derive(move || list.with(|v| v.listing.error().map(str::to_string)))/>
      <Show when=move || list.with(|v| v.listing.is_loading()) fallback=|| ()>
        <p class="meta">"Loading projects..."</p>
      </Show>

      <Show when=move || list.with(|v| v.listing.loaded().is_some()) fallback=|| ()>
        <section class="panel">
          <h2>"Active Projects"</h2>
          <Show
            when=move || !projects(active).is_empty()
            fallback=|| view! { <p class="meta">"No active projects."</p> }
          >
            <ul class="project-list">
              <For
                each=move || projects(active)
                key=|p| p.id
                children=move |p| {
                    let id = p.id;
                    let created = p.created_display();
                    view! {
                      <li class="row spread">
                        <div>
                          <A href=Route::Project(id).path()>{p.name.clone()}</A>
                          <span class="meta">{created}</span>
                        </div>
                        <button class="btn secondary" on:click=move |_| act(ListAction::Archive, id)>
                          "Archive"
                        </button>
                      </li>
                    }
                }
              />
            </ul>
          </Show>
        </section>

        <section class="panel">
          <h2>"Archived Projects"</h2>
          <Show
            when=move || !projects(archived).is_empty()
            fallback=|| view! { <p class="meta">"No archived projects."</p> }
          >
            <ul class="project-list">
              <For
                each=move || projects(archived)
                key=|p| p.id
                children=move |p| {
                    let id = p.id;
                    view! {
                      <li class="row spread archived">
                        <div>
                          <span>{p.name.clone()}</span>
                          <span class="meta">{p.created_display()}</span>
                        </div>
                        <button class="btn secondary" on:click=move |_| act(ListAction::Unarchive, id)>
                          "Unarchive"
                        </button>
                      </li>
                    }
                }
              />
            </ul>
          </Show>
        </section>
      </Show>
    }
}

fn active(listing: &ProjectListing) -> &[Project] {
    &listing.active_projects
}

fn archived(listing: &ProjectListing) -> &[Project] {
    &listing.archived_projects
}
