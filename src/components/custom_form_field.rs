//! Custom Field Component
//!
//! Name / type / value inputs for the task's ad-hoc custom field.

use leptos::prelude::*;

use crate::components::FieldError;
use crate::error::FieldErrors;
use crate::form::{names, TaskFormState};
use crate::models::FieldType;

#[component]
pub fn CustomFormField(
    form: RwSignal<TaskFormState>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] on_change: Callback<(&'static str, String)>,
) -> impl IntoView {
    let error_for = move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)));

    // Value input is re-rendered only when the type changes
    let field_type = Memo::new(move |_| form.with(|f| FieldType::from_str(&f.custom_field.field_type)));
    let field_value = move || form.with(|f| f.custom_field.field_value.clone());

    let value_input = move || match field_type.get() {
        FieldType::Boolean => view! {
            <select
                name=names::CUSTOM_FIELD_VALUE
                class="form-field-select"
                on:change=move |ev| on_change.run((names::CUSTOM_FIELD_VALUE, event_target_value(&ev)))
            >
                <option value="" prop:selected=move || field_value().is_empty()>"Select value"</option>
                <option value="true" prop:selected=move || field_value() == "true">"True"</option>
                <option value="false" prop:selected=move || field_value() == "false">"False"</option>
            </select>
        }
        .into_any(),
        other => {
            let input_type = if other == FieldType::Number { "number" } else { "text" };
            view! {
            <input
                type=input_type
                name=names::CUSTOM_FIELD_VALUE
                class="form-field-input"
                placeholder="Enter value"
                prop:value=field_value
                on:input=move |ev| on_change.run((names::CUSTOM_FIELD_VALUE, event_target_value(&ev)))
            />
            }
            .into_any()
        }
    };

    view! {
        <div class="task-form-fields">
            <div class="form-field">
                <label class="form-field-label">
                    "Field Name"
                    <input
                        type="text"
                        name=names::CUSTOM_FIELD_NAME
                        class="form-field-input"
                        placeholder="Field name"
                        prop:value=move || form.with(|f| f.custom_field.field_name.clone())
                        on:input=move |ev| on_change.run((names::CUSTOM_FIELD_NAME, event_target_value(&ev)))
                    />
                </label>
                <FieldError error=error_for(names::CUSTOM_FIELD_NAME) />
            </div>

            <div class="form-field">
                <label class="form-field-label">"Field Type"</label>
                <select
                    name=names::CUSTOM_FIELD_TYPE
                    class="form-field-select"
                    on:change=move |ev| on_change.run((names::CUSTOM_FIELD_TYPE, event_target_value(&ev)))
                >
                    <option value="" prop:selected=move || field_type.get() == FieldType::Empty>
                        {FieldType::Empty.label()}
                    </option>
                    {FieldType::OPTIONS.iter().map(|option| {
                        let option = *option;
                        view! {
                            <option value=option.as_str() prop:selected=move || field_type.get() == option>
                                {option.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <FieldError error=error_for(names::CUSTOM_FIELD_TYPE) />
            </div>

            <div class="form-field">
                <label class="form-field-label">"Field Value"</label>
                {value_input}
                <FieldError error=error_for(names::CUSTOM_FIELD_VALUE) />
            </div>
        </div>
    }
}
