//! Task Item Component
//!
//! Read-only row in the task list.

use leptos::prelude::*;

use crate::models::Task;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let row_class = if task.completed { "task-item completed" } else { "task-item" };
    let high_priority = task.is_high_priority();
    let due = task.due_date_label();
    let notes = task.notes_text().map(str::to_string);
    let custom_fields = task.custom_fields.clone();

    view! {
        <div class=row_class>
            <div class="task-item-content">
                <div class="task-info">
                    <span class="task-field task-title">{task.title.clone()}</span>
                    {task.completed.then(|| view! { <span class="task-done-badge">"Done"</span> })}
                    {high_priority.then(|| view! { <span class="task-priority-badge">"High Priority"</span> })}
                    {due.map(|date| view! { <span class="task-due-date">"Due: " {date}</span> })}
                    {notes.map(|text| view! {
                        <div class="task-notes">
                            <span class="notes-label">"Notes:"</span>
                            " "
                            {text}
                        </div>
                    })}
                    {(!custom_fields.is_empty()).then(|| view! {
                        <div class="task-field task-fields-container">
                            {custom_fields.into_iter().map(|field| view! {
                                <div class="task-custom-field">
                                    <span class="task-custom-label">{format!("{}:", field.field_name)}</span>
                                    <span class="task-custom-value">{field.value_label()}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
