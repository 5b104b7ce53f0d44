//! Task Form Component
//!
//! Creates a task. Sections are rendered in the user's saved field order and
//! can be rearranged by dragging, the arrow buttons, or Alt+ArrowUp/ArrowDown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_dragdrop::*;

use crate::api;
use crate::auth::use_auth;
use crate::components::{CheckboxField, CustomFormField, FormField, InputKind, ReorderControls};
use crate::error::FieldErrors;
use crate::field_order::FieldKey;
use crate::form::{names, TaskFormState};
use crate::hooks::use_field_order;
use crate::models::Task;
use crate::routes::{use_router, Route};
use crate::store::{store_add_task, TaskStore};
use crate::validation::validate_task;

pub const CREATE_FAILED: &str = "Failed to create task";

#[component]
pub fn TaskForm(
    /// Called with the created task instead of navigating back to the list
    #[prop(optional, into)]
    on_task_added: Option<Callback<Task>>,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let store = use_context::<TaskStore>();

    let form = RwSignal::new(TaskFormState::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let field_order = use_field_order(auth.clone());

    // DnD between sections
    let dnd = create_dnd_signals();
    bind_scoped_mouseup(dnd, move |reorder: Reorder| {
        tracing::debug!(from = reorder.from, to = reorder.to, "field dropped");
        field_order.reorder(reorder.from, reorder.to);
    });

    // Editing a field clears its error and the form-level message
    let clear_errors = move |name: &str| {
        if errors.with_untracked(|e| e.get(name).is_some()) {
            errors.update(|e| {
                e.clear(name);
            });
        }
        if !error.with_untracked(String::is_empty) {
            set_error.set(String::new());
        }
    };

    let on_change = Callback::new(move |(name, value): (&'static str, String)| {
        form.update(|f| {
            f.set(name, value);
        });
        clear_errors(name);
    });

    let on_toggle = Callback::new(move |(name, checked): (&'static str, bool)| {
        form.update(|f| {
            f.set_checked(name, checked);
        });
        clear_errors(name);
    });

    let error_for = move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)));

    let render_section = move |key: FieldKey| match key {
        FieldKey::Title => view! {
            <FormField
                label="Title"
                name=names::TITLE
                kind=InputKind::Text
                value=Signal::derive(move || form.with(|f| f.title.clone()))
                error=error_for(names::TITLE)
                on_change=on_change
                placeholder="Enter task title"
                required=true
            />
        }
        .into_any(),
        FieldKey::Notes => view! {
            <FormField
                label="Notes"
                name=names::NOTES
                kind=InputKind::TextArea
                value=Signal::derive(move || form.with(|f| f.notes.clone()))
                error=error_for(names::NOTES)
                on_change=on_change
                placeholder="Add notes"
            />
        }
        .into_any(),
        FieldKey::DueDate => view! {
            <FormField
                label="Due Date"
                name=names::DUE_DATE
                kind=InputKind::Date
                value=Signal::derive(move || form.with(|f| f.due_date.clone()))
                error=error_for(names::DUE_DATE)
                on_change=on_change
            />
        }
        .into_any(),
        FieldKey::HighPriority => view! {
            <CheckboxField
                label="High Priority"
                name=names::HIGH_PRIORITY
                checked=Signal::derive(move || form.with(|f| f.high_priority))
                error=error_for(names::HIGH_PRIORITY)
                on_toggle=on_toggle
            />
        }
        .into_any(),
        FieldKey::CustomField => view! {
            <CustomFormField form=form errors=errors on_change=on_change />
        }
        .into_any(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = match form.with_untracked(validate_task) {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        errors.set(FieldErrors::new());
        set_error.set(String::new());
        set_loading.set(true);

        let client = auth.client();
        spawn_local(async move {
            match api::create_task(&client, &payload).await {
                Ok(task) => {
                    tracing::info!(id = task.id, "task created");
                    form.update(|f| f.reset());
                    set_loading.set(false);
                    if let Some(store) = store {
                        store_add_task(&store, task.clone());
                    }
                    match on_task_added {
                        Some(callback) => callback.run(task),
                        None => router.navigate(Route::Tasks),
                    }
                }
                Err(err) => {
                    tracing::error!("error creating task: {}", err);
                    let server_errors = err.field_errors();
                    if !server_errors.is_empty() {
                        errors.update(|e| e.merge(server_errors));
                    }
                    set_error.set(err.detail().unwrap_or_else(|| CREATE_FAILED.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    // Sections are keyed so a moved block keeps its DOM node and focus
    let section = move |key: FieldKey| {
        let index = Memo::new(move |_| field_order.index_of(key).unwrap_or(0));
        let len = Signal::derive(move || field_order.len());

        let section_class = move || {
            let mut c = String::from("task-form-section");
            if dnd.dragged() == Some(index.get()) { c.push_str(" dragging"); }
            if dnd.drag_over() == Some(index.get()) { c.push_str(" drag-over"); }
            c
        };
        let on_keydown = move |ev: web_sys::KeyboardEvent| {
            if !ev.alt_key() {
                return;
            }
            let position = index.get_untracked();
            match ev.key().as_str() {
                "ArrowUp" => field_order.move_up(position),
                "ArrowDown" => field_order.move_down(position),
                _ => return,
            }
            ev.prevent_default();
            if let Some(block) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                request_animation_frame(move || {
                    let _ = block.focus();
                });
            }
        };

        view! {
            <div
                class=section_class
                tabindex="0"
                data-field=key.token()
                on:mousedown=make_on_mousedown(dnd, index)
                on:mouseenter=make_on_mouseenter(dnd, index)
                on:mouseleave=make_on_mouseleave(dnd)
                on:keydown=on_keydown
            >
                <ReorderControls
                    index=index
                    len=len
                    on_move_up=move |_: ()| field_order.move_up(index.get_untracked())
                    on_move_down=move |_: ()| field_order.move_down(index.get_untracked())
                />
                {render_section(key)}
            </div>
        }
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <For each=move || field_order.keys() key=|key| *key children=section />

            <div class="task-form-button-container">
                <button
                    type="button"
                    class="task-form-button task-form-button-cancel"
                    on:click=move |_| router.navigate(Route::Tasks)
                >
                    "Cancel"
                </button>
                <button type="submit" class="task-form-button" disabled=move || loading.get()>
                    {move || if loading.get() { "Adding..." } else { "Add Task" }}
                </button>
            </div>
        </form>
        <Show when=move || !error.get().is_empty()>
            <div class="task-form-error">{move || error.get()}</div>
        </Show>
    }
}
