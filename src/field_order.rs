//! Field Order
//!
//! Display order of the task form sections.

use serde::{Deserialize, Serialize};

use leptos_dragdrop::move_index;

/// A reorderable section of the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Title,
    CustomField,
    DueDate,
    HighPriority,
    Notes,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Title,
        FieldKey::CustomField,
        FieldKey::DueDate,
        FieldKey::HighPriority,
        FieldKey::Notes,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::CustomField => "custom_field",
            FieldKey::DueDate => "due_date",
            FieldKey::HighPriority => "high_priority",
            FieldKey::Notes => "notes",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.token() == token)
    }
}

/// Ordered form sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOrder(Vec<FieldKey>);

impl Default for FieldOrder {
    fn default() -> Self {
        Self(FieldKey::ALL.to_vec())
    }
}

impl FieldOrder {
    pub fn new(keys: Vec<FieldKey>) -> Self {
        Self(keys)
    }

    /// Order from persisted tokens.
    ///
    /// Unknown and repeated tokens are dropped and missing keys appended in
    /// default order. Returns None when no known token is present.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let mut keys: Vec<FieldKey> = Vec::with_capacity(FieldKey::ALL.len());
        for key in tokens.iter().filter_map(|t| FieldKey::from_token(t.as_ref())) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        if keys.is_empty() {
            return None;
        }
        for key in FieldKey::ALL {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Some(Self(keys))
    }

    pub fn tokens(&self) -> Vec<String> {
        self.0.iter().map(|k| k.token().to_string()).collect()
    }

    pub fn keys(&self) -> &[FieldKey] {
        &self.0
    }

    pub fn position(&self, key: FieldKey) -> Option<usize> {
        self.0.iter().position(|k| *k == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drag reorder: take the key at `from` and reinsert it at `to`
    pub fn moved(&self, from: usize, to: usize) -> Option<Self> {
        let mut keys = self.0.clone();
        move_index(&mut keys, from, to).then(|| Self(keys))
    }

    /// Swap `index` with its predecessor
    pub fn moved_up(&self, index: usize) -> Option<Self> {
        if index == 0 || index >= self.0.len() {
            return None;
        }
        let mut keys = self.0.clone();
        keys.swap(index - 1, index);
        Some(Self(keys))
    }

    /// Swap `index` with its successor
    pub fn moved_down(&self, index: usize) -> Option<Self> {
        if index + 1 >= self.0.len() {
            return None;
        }
        let mut keys = self.0.clone();
        keys.swap(index, index + 1);
        Some(Self(keys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(
            FieldOrder::default().tokens(),
            vec!["title", "custom_field", "due_date", "high_priority", "notes"]
        );
    }

    #[test]
    fn test_drag_move() {
        let order = FieldOrder::new(vec![FieldKey::Title, FieldKey::CustomField]);
        let moved = order.moved(0, 1).unwrap();
        assert_eq!(moved.tokens(), vec!["custom_field", "title"]);

        let moved = FieldOrder::default().moved(4, 1).unwrap();
        assert_eq!(
            moved.tokens(),
            vec!["title", "notes", "custom_field", "due_date", "high_priority"]
        );

        assert!(FieldOrder::default().moved(2, 2).is_none());
    }

    #[test]
    fn test_swap_boundaries() {
        let order = FieldOrder::default();
        assert!(order.moved_up(0).is_none());
        assert!(order.moved_down(4).is_none());

        let up = order.moved_up(2).unwrap();
        assert_eq!(up.keys()[1], FieldKey::DueDate);
        assert_eq!(up.keys()[2], FieldKey::CustomField);

        let down = order.moved_down(0).unwrap();
        assert_eq!(down.keys()[0], FieldKey::CustomField);
        assert_eq!(down.keys()[1], FieldKey::Title);
    }

    #[test]
    fn test_position_follows_moves() {
        let order = FieldOrder::default();
        assert_eq!(order.position(FieldKey::Notes), Some(4));

        let order = order.moved_up(4).unwrap().moved_up(3).unwrap();
        assert_eq!(order.position(FieldKey::Notes), Some(2));
        assert_eq!(order.position(FieldKey::DueDate), Some(3));
        assert_eq!(FieldOrder::new(vec![FieldKey::Title]).position(FieldKey::Notes), None);
    }

    #[test]
    fn test_from_tokens_normalizes() {
        assert!(FieldOrder::from_tokens::<&str>(&[]).is_none());
        assert!(FieldOrder::from_tokens(&["priority", "color"]).is_none());

        let order = FieldOrder::from_tokens(&["notes", "title", "notes", "color"]).unwrap();
        assert_eq!(
            order.tokens(),
            vec!["notes", "title", "custom_field", "due_date", "high_priority"]
        );
    }

    #[test]
    fn test_tokens_match_serde() {
        for key in FieldKey::ALL {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json, serde_json::Value::String(key.token().to_string()));
        }
    }
}
