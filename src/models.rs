//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task data structure (read projection from `GET /tasks/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub high_priority: Option<bool>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl Task {
    pub fn is_high_priority(&self) -> bool {
        self.high_priority.unwrap_or(false)
    }

    /// Due date for display, `MM/DD/YYYY` when parsable
    pub fn due_date_label(&self) -> Option<String> {
        self.due_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(format_date)
    }

    /// Non-blank notes
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Custom field attached to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub id: Option<u32>,
    pub field_name: String,
    #[serde(default)]
    pub field_type: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl CustomField {
    /// Display form of the value, `N/A` when missing
    pub fn value_label(&self) -> String {
        match &self.value {
            Value::Null => "N/A".to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Format an ISO date or datetime as `MM/DD/YYYY`, returning the input unchanged otherwise
pub fn format_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%m/%d/%Y").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.date_naive().format("%m/%d/%Y").to_string();
    }
    raw.to_string()
}

/// Declared type of a custom field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Boolean,
    Number,
    /// Not selected yet
    #[default]
    #[serde(rename = "")]
    Empty,
}

impl FieldType {
    /// Selectable types (excludes `Empty`)
    pub const OPTIONS: [FieldType; 3] = [FieldType::String, FieldType::Boolean, FieldType::Number];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::Number => "number",
            FieldType::Empty => "",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "string" => FieldType::String,
            "boolean" => FieldType::Boolean,
            "number" => FieldType::Number,
            _ => FieldType::Empty,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldType::String => "Text",
            FieldType::Boolean => "Boolean",
            FieldType::Number => "Number",
            FieldType::Empty => "Select type",
        }
    }
}

/// Custom field value after coercion to its declared type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Number(serde_json::Number),
}

/// Custom field as sent with `POST /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomFieldPayload {
    pub field_name: String,
    pub field_type: FieldType,
    pub field_value: FieldValue,
}

impl CustomFieldPayload {
    /// All-empty custom field (nothing entered)
    pub fn empty() -> Self {
        Self {
            field_name: String::new(),
            field_type: FieldType::Empty,
            field_value: FieldValue::Text(String::new()),
        }
    }
}

/// Body of `POST /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub high_priority: bool,
    pub custom_field: CustomFieldPayload,
}

/// Body of `POST /token/`
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /token/`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
}

/// `GET /settings` / `PUT /settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub task_form_field_order: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_decodes_minimal_and_full() {
        let minimal: Task = serde_json::from_value(json!({ "id": 1, "title": "Buy milk" })).unwrap();
        assert_eq!(minimal.title, "Buy milk");
        assert!(minimal.custom_fields.is_empty());
        assert!(!minimal.is_high_priority());

        let full: Task = serde_json::from_value(json!({
            "id": 2,
            "title": "Taxes",
            "notes": "bring receipts",
            "due_date": "2026-04-15",
            "high_priority": true,
            "completed": false,
            "user": 7,
            "custom_fields": [
                { "id": 9, "field_name": "hours", "field_type": "number", "field_value": 3, "value": 3 },
                { "id": 10, "field_name": "owner", "value": null }
            ]
        }))
        .unwrap();
        assert!(full.is_high_priority());
        assert_eq!(full.due_date_label().as_deref(), Some("04/15/2026"));
        assert_eq!(full.custom_fields[0].value_label(), "3");
        assert_eq!(full.custom_fields[1].value_label(), "N/A");
    }

    #[test]
    fn test_format_date_fallbacks() {
        assert_eq!(format_date("2026-01-02T10:00:00Z"), "01/02/2026");
        assert_eq!(format_date("next week"), "next week");
    }

    #[test]
    fn test_custom_field_value_labels() {
        let field = |value| CustomField { id: None, field_name: "x".into(), field_type: None, value };
        assert_eq!(field(json!(true)).value_label(), "true");
        assert_eq!(field(json!("abc")).value_label(), "abc");
        assert_eq!(field(json!(2.5)).value_label(), "2.5");
    }

    #[test]
    fn test_field_type_round_trip() {
        for ty in FieldType::OPTIONS {
            assert_eq!(FieldType::from_str(ty.as_str()), ty);
        }
        assert_eq!(FieldType::from_str("date"), FieldType::Empty);
        assert_eq!(serde_json::to_value(FieldType::Empty).unwrap(), json!(""));
        assert_eq!(serde_json::to_value(FieldType::Boolean).unwrap(), json!("boolean"));
    }

    #[test]
    fn test_new_task_omits_empty_optionals() {
        let task = NewTask {
            title: "Buy milk".into(),
            notes: None,
            due_date: None,
            high_priority: false,
            custom_field: CustomFieldPayload::empty(),
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "title": "Buy milk",
                "custom_field": { "field_name": "", "field_type": "", "field_value": "" }
            })
        );
    }

    #[test]
    fn test_settings_default_when_missing() {
        let settings: UserSettings = serde_json::from_value(json!({})).unwrap();
        assert!(settings.task_form_field_order.is_empty());
    }
}
