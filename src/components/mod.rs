//! UI Components
//!
//! Reusable Leptos components.

mod custom_form_field;
mod form_field;
mod header;
mod reorder_controls;
mod task_form;
mod task_item;

pub use custom_form_field::CustomFormField;
pub use form_field::{CheckboxField, FieldError, FormField, InputKind};
pub use header::Header;
pub use reorder_controls::ReorderControls;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
