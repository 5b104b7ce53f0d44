//! Task Validation
//!
//! Turns raw form input into a `NewTask` payload or per-field errors.

use chrono::NaiveDate;

use crate::error::FieldErrors;
use crate::form::{names, CustomFieldDraft, TaskFormState};
use crate::models::{CustomFieldPayload, FieldType, FieldValue, NewTask};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const INVALID_DATE: &str = "Enter a valid date";
pub const FIELD_NAME_REQUIRED: &str = "Field name is required when either field type or field value is provided.";
pub const FIELD_TYPE_REQUIRED: &str = "This field is required when either field name or field value is provided.";
pub const FIELD_VALUE_REQUIRED: &str = "This field is required when either field name or field type is provided.";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

fn type_mismatch(field_type: FieldType) -> String {
    format!("Value must be of type {}", field_type.as_str())
}

/// Validate the custom field draft.
///
/// All three parts empty is valid and yields the empty payload. Otherwise every
/// part is required and the value must coerce to the declared type.
pub fn validate_custom_field(draft: &CustomFieldDraft) -> Result<CustomFieldPayload, FieldErrors> {
    let field_type = FieldType::from_str(&draft.field_type);
    let has_name = !draft.field_name.trim().is_empty();
    let has_type = field_type != FieldType::Empty;
    let has_value = !draft.field_value.trim().is_empty();

    if !has_name && !has_type && !has_value {
        return Ok(CustomFieldPayload::empty());
    }

    let mut errors = FieldErrors::new();
    if !has_name {
        errors.insert(names::CUSTOM_FIELD_NAME, FIELD_NAME_REQUIRED);
    }
    if !has_type {
        errors.insert(names::CUSTOM_FIELD_TYPE, FIELD_TYPE_REQUIRED);
    }
    if !has_value {
        errors.insert(names::CUSTOM_FIELD_VALUE, FIELD_VALUE_REQUIRED);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    match coerce_value(field_type, &draft.field_value) {
        Some(field_value) => Ok(CustomFieldPayload {
            field_name: draft.field_name.clone(),
            field_type,
            field_value,
        }),
        None => {
            errors.insert(names::CUSTOM_FIELD_VALUE, type_mismatch(field_type));
            Err(errors)
        }
    }
}

/// Coerce a raw value to `field_type`
pub fn coerce_value(field_type: FieldType, raw: &str) -> Option<FieldValue> {
    match field_type {
        FieldType::String => Some(FieldValue::Text(raw.to_string())),
        FieldType::Boolean => match raw {
            "true" => Some(FieldValue::Bool(true)),
            "false" => Some(FieldValue::Bool(false)),
            _ => None,
        },
        FieldType::Number => parse_number(raw).map(FieldValue::Number),
        FieldType::Empty => None,
    }
}

/// Integral values become JSON integers, everything else a float
fn parse_number(raw: &str) -> Option<serde_json::Number> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Some(serde_json::Number::from(value as i64));
    }
    serde_json::Number::from_f64(value)
}

/// Validate the whole form
pub fn validate_task(form: &TaskFormState) -> Result<NewTask, FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.title.trim().is_empty() {
        errors.insert(names::TITLE, TITLE_REQUIRED);
    }

    let due_date = match form.due_date.trim() {
        "" => None,
        raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert(names::DUE_DATE, INVALID_DATE);
                None
            }
        },
    };

    let custom_field = match validate_custom_field(&form.custom_field) {
        Ok(payload) => Some(payload),
        Err(field_errors) => {
            errors.merge(field_errors);
            None
        }
    };

    match custom_field {
        Some(custom_field) if errors.is_empty() => Ok(NewTask {
            title: form.title.clone(),
            notes: Some(form.notes.clone()).filter(|n| !n.trim().is_empty()),
            due_date,
            high_priority: form.high_priority,
            custom_field,
        }),
        _ => Err(errors),
    }
}

/// Login form: both fields required
pub fn validate_credentials(username: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if username.trim().is_empty() {
        errors.insert("username", USERNAME_REQUIRED);
    }
    if password.is_empty() {
        errors.insert("password", PASSWORD_REQUIRED);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(name: &str, ty: &str, value: &str) -> CustomFieldDraft {
        CustomFieldDraft::new(name, ty, value)
    }

    #[test]
    fn test_all_empty_is_valid() {
        assert_eq!(validate_custom_field(&draft("", "", "")), Ok(CustomFieldPayload::empty()));
        assert_eq!(validate_custom_field(&draft("  ", "", " ")), Ok(CustomFieldPayload::empty()));
    }

    #[test]
    fn test_partial_drafts_flag_each_missing_part() {
        let errors = validate_custom_field(&draft("color", "", "")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(names::CUSTOM_FIELD_TYPE), Some(FIELD_TYPE_REQUIRED));
        assert_eq!(errors.get(names::CUSTOM_FIELD_VALUE), Some(FIELD_VALUE_REQUIRED));

        let errors = validate_custom_field(&draft("", "number", "5")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(names::CUSTOM_FIELD_NAME), Some(FIELD_NAME_REQUIRED));

        let errors = validate_custom_field(&draft("", "", "5")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get(names::CUSTOM_FIELD_NAME).is_some());
        assert!(errors.get(names::CUSTOM_FIELD_TYPE).is_some());
    }

    #[test]
    fn test_number_values() {
        let errors = validate_custom_field(&draft("hours", "number", "abc")).unwrap_err();
        assert_eq!(errors.get(names::CUSTOM_FIELD_VALUE), Some("Value must be of type number"));

        let payload = validate_custom_field(&draft("hours", "number", "42")).unwrap();
        assert_eq!(serde_json::to_value(&payload.field_value).unwrap(), json!(42));

        let payload = validate_custom_field(&draft("hours", "number", "2.5")).unwrap();
        assert_eq!(serde_json::to_value(&payload.field_value).unwrap(), json!(2.5));

        assert!(validate_custom_field(&draft("hours", "number", "NaN")).is_err());
    }

    #[test]
    fn test_boolean_values() {
        let errors = validate_custom_field(&draft("done", "boolean", "maybe")).unwrap_err();
        assert_eq!(errors.get(names::CUSTOM_FIELD_VALUE), Some("Value must be of type boolean"));

        let payload = validate_custom_field(&draft("done", "boolean", "true")).unwrap();
        assert_eq!(payload.field_value, FieldValue::Bool(true));
        let payload = validate_custom_field(&draft("done", "boolean", "false")).unwrap();
        assert_eq!(payload.field_value, FieldValue::Bool(false));
    }

    #[test]
    fn test_string_accepted_as_is() {
        let payload = validate_custom_field(&draft("where", "string", " 12 ")).unwrap();
        assert_eq!(payload.field_type, FieldType::String);
        assert_eq!(payload.field_value, FieldValue::Text(" 12 ".to_string()));
    }

    #[test]
    fn test_title_required() {
        let form = TaskFormState { title: "   ".into(), ..Default::default() };
        let errors = validate_task(&form).unwrap_err();
        assert_eq!(errors.get(names::TITLE), Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_title_only_payload() {
        let form = TaskFormState { title: "Buy milk".into(), ..Default::default() };
        let task = validate_task(&form).unwrap();
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "title": "Buy milk",
                "custom_field": { "field_name": "", "field_type": "", "field_value": "" }
            })
        );
    }

    #[test]
    fn test_full_payload() {
        let form = TaskFormState {
            title: "Taxes".into(),
            notes: "receipts".into(),
            due_date: "2026-04-15".into(),
            high_priority: true,
            custom_field: draft("hours", "number", "3"),
        };
        let task = validate_task(&form).unwrap();
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "title": "Taxes",
                "notes": "receipts",
                "due_date": "2026-04-15",
                "high_priority": true,
                "custom_field": { "field_name": "hours", "field_type": "number", "field_value": 3 }
            })
        );
    }

    #[test]
    fn test_errors_collected_across_fields() {
        let form = TaskFormState {
            title: String::new(),
            due_date: "15/04/2026".into(),
            custom_field: draft("hours", "", ""),
            ..Default::default()
        };
        let errors = validate_task(&form).unwrap_err();
        assert_eq!(errors.get(names::TITLE), Some(TITLE_REQUIRED));
        assert_eq!(errors.get(names::DUE_DATE), Some(INVALID_DATE));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_credentials_required() {
        let errors = validate_credentials(" ", "");
        assert_eq!(errors.get("username"), Some(USERNAME_REQUIRED));
        assert_eq!(errors.get("password"), Some(PASSWORD_REQUIRED));
        assert!(validate_credentials("ada", "secret").is_empty());
    }
}
