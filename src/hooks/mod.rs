//! Reactive Hooks
//!
//! Reusable state shared by components.

mod field_order;

pub use field_order::{use_field_order, FieldOrderHandle};
