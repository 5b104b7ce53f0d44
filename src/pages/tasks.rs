//! Tasks Page
//!
//! Lists the signed-in user's tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::use_auth;
use crate::components::TaskItem;
use crate::routes::Route;
use crate::store::{store_begin_load, store_set_error, store_set_tasks, use_task_store, TaskListStateStoreFields};

pub const LOAD_FAILED: &str = "Failed to load tasks";

#[component]
pub fn TasksPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_task_store();

    // Refetch on every visit
    Effect::new(move |_| {
        store_begin_load(&store);
        let client = auth.client();
        spawn_local(async move {
            match api::list_tasks(&client).await {
                Ok(tasks) => {
                    tracing::debug!(count = tasks.len(), "loaded tasks");
                    store_set_tasks(&store, tasks);
                }
                Err(err) => {
                    tracing::error!(status = ?err.status(), "error fetching tasks: {}", err);
                    store_set_error(&store, LOAD_FAILED);
                }
            }
        });
    });

    let list = move || {
        if store.tasks().with(Vec::is_empty) {
            return view! {
                <div class="empty-state">
                    <p>"No tasks."</p>
                </div>
            }
            .into_any();
        }
        view! {
            <For
                each=move || store.tasks().get()
                key=|task| (task.id, task.title.clone(), task.completed)
                children=move |task| view! { <TaskItem task=task /> }
            />
        }
        .into_any()
    };

    view! {
        <div class="tasks-container">
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading">"Loading tasks..."</div> }
            >
                <div class="tasks-header">
                    <h2>"My Tasks"</h2>
                    <a class="new-task-link" href=format!("#{}", Route::NewTask.path())>"New Task"</a>
                </div>
                <div class="tasks-list">{list}</div>
                {move || store.error().get().map(|message| view! { <div class="error-message">{message}</div> })}
            </Show>
        </div>
    }
}
