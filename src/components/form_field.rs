//! Form Field Component
//!
//! Labelled input with an inline error, shared by the task form sections.

use leptos::prelude::*;

/// Kind of input rendered by [`FormField`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
    Date,
}

impl InputKind {
    fn html_type(&self) -> &'static str {
        match self {
            InputKind::Date => "date",
            _ => "text",
        }
    }
}

/// Inline error below an input
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <div class="form-field-error">{message}</div> })
}

/// Text, textarea or date input
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    name: &'static str,
    kind: InputKind,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<(&'static str, String)>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input = match kind {
        InputKind::TextArea => view! {
            <textarea
                name=name
                class="form-field-input"
                placeholder=placeholder
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run((name, event_target_value(&ev)))
            />
        }
        .into_any(),
        InputKind::Text | InputKind::Date => view! {
            <input
                type=kind.html_type()
                name=name
                class="form-field-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run((name, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div class=format!("task-form-{}-field", name)>
            <div class="form-field form-field-full-width">
                <label class="form-field-label">
                    {label}
                    {required.then(|| view! { <span class="required-asterisk">"*"</span> })}
                    {input}
                </label>
                <FieldError error=error />
            </div>
        </div>
    }
}

/// Checkbox with its label on the right
#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    name: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_toggle: Callback<(&'static str, bool)>,
) -> impl IntoView {
    view! {
        <div class=format!("task-form-{}-field", name)>
            <div class="form-field form-field-full-width">
                <label class="form-field-label">
                    <input
                        type="checkbox"
                        name=name
                        class="form-field-checkbox"
                        prop:checked=move || checked.get()
                        on:change=move |ev| on_toggle.run((name, event_target_checked(&ev)))
                    />
                    {label}
                </label>
                <FieldError error=error />
            </div>
        </div>
    }
}
