//! Task Form State
//!
//! Raw input values of the task form, updated by input name.

/// Input names used by the task form
pub mod names {
    pub const TITLE: &str = "title";
    pub const NOTES: &str = "notes";
    pub const DUE_DATE: &str = "due_date";
    pub const HIGH_PRIORITY: &str = "high_priority";
    pub const CUSTOM_FIELD_NAME: &str = "custom_field.field_name";
    pub const CUSTOM_FIELD_TYPE: &str = "custom_field.field_type";
    pub const CUSTOM_FIELD_VALUE: &str = "custom_field.field_value";
}

/// Custom field as typed by the user. `field_type` holds the raw select value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFieldDraft {
    pub field_name: String,
    pub field_type: String,
    pub field_value: String,
}

impl CustomFieldDraft {
    pub fn new(field_name: &str, field_type: &str, field_value: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            field_type: field_type.to_string(),
            field_value: field_value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFormState {
    pub title: String,
    pub notes: String,
    pub due_date: String,
    pub high_priority: bool,
    pub custom_field: CustomFieldDraft,
}

impl TaskFormState {
    /// Apply a text/select change by input name. Unknown names are ignored.
    ///
    /// Switching the custom field type discards the value typed for the old one.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        if name == names::CUSTOM_FIELD_TYPE && self.custom_field.field_type != value {
            self.custom_field.field_value.clear();
        }
        let slot = match name {
            names::TITLE => &mut self.title,
            names::NOTES => &mut self.notes,
            names::DUE_DATE => &mut self.due_date,
            names::CUSTOM_FIELD_NAME => &mut self.custom_field.field_name,
            names::CUSTOM_FIELD_TYPE => &mut self.custom_field.field_type,
            names::CUSTOM_FIELD_VALUE => &mut self.custom_field.field_value,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Apply a checkbox change by input name
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        if name == names::HIGH_PRIORITY {
            self.high_priority = checked;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_by_dotted_name() {
        let mut form = TaskFormState::default();
        assert!(form.set(names::TITLE, "Buy milk".into()));
        assert!(form.set(names::CUSTOM_FIELD_TYPE, "number".into()));
        assert!(form.set(names::CUSTOM_FIELD_VALUE, "2".into()));
        assert!(form.set(names::CUSTOM_FIELD_TYPE, "number".into()));
        assert!(!form.set("custom_field.unknown", "x".into()));

        assert_eq!(form.title, "Buy milk");
        assert_eq!(form.custom_field, CustomFieldDraft::new("", "number", "2"));
    }

    #[test]
    fn test_type_change_clears_value() {
        let mut form = TaskFormState::default();
        form.set(names::CUSTOM_FIELD_NAME, "hours".into());
        form.set(names::CUSTOM_FIELD_TYPE, "number".into());
        form.set(names::CUSTOM_FIELD_VALUE, "42".into());

        form.set(names::CUSTOM_FIELD_TYPE, "boolean".into());
        assert_eq!(form.custom_field, CustomFieldDraft::new("hours", "boolean", ""));

        form.set(names::CUSTOM_FIELD_VALUE, "true".into());
        assert_eq!(crate::validation::validate_custom_field(&form.custom_field).map(|p| p.field_name), Ok("hours".to_string()));
    }

    #[test]
    fn test_checkbox_and_reset() {
        let mut form = TaskFormState::default();
        assert!(form.set_checked(names::HIGH_PRIORITY, true));
        assert!(!form.set_checked(names::TITLE, true));
        assert!(form.high_priority);

        form.set(names::NOTES, "call first".into());
        form.reset();
        assert_eq!(form, TaskFormState::default());
    }
}
