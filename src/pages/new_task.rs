//! New Task Page

use leptos::prelude::*;

use crate::components::TaskForm;
use crate::routes::Route;

#[component]
pub fn NewTaskPage() -> impl IntoView {
    view! {
        <div class="new-task-page">
            <div class="new-task-header">
                <a href=format!("#{}", Route::Tasks.path())>
                    <span class="arrow">"<"</span>
                    " Back to Tasks"
                </a>
            </div>
            <div class="new-task-container">
                <h2>"Create New Task"</h2>
                <TaskForm />
            </div>
        </div>
    }
}
