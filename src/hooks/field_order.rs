//! Field Order Hook
//!
//! Reactive field order loaded from and saved to the settings endpoint.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::AuthContext;
use crate::field_order::{FieldKey, FieldOrder};

/// Destination for a changed field order
pub trait OrderSink: Send + Sync {
    fn save(&self, tokens: Vec<String>);
}

/// Saves through `PUT /settings` in the background
struct SettingsSink {
    auth: AuthContext,
}

impl OrderSink for SettingsSink {
    fn save(&self, tokens: Vec<String>) {
        let client = self.auth.client();
        spawn_local(async move {
            if let Err(err) = api::save_field_order(&client, tokens).await {
                tracing::error!("error saving field order: {}", err);
            }
        });
    }
}

/// Persisted field order handle
#[derive(Clone, Copy)]
pub struct FieldOrderHandle {
    order: RwSignal<FieldOrder>,
    sink: StoredValue<Arc<dyn OrderSink>>,
}

impl FieldOrderHandle {
    /// Handle on the default order
    pub fn new(sink: Arc<dyn OrderSink>) -> Self {
        Self {
            order: RwSignal::new(FieldOrder::default()),
            sink: StoredValue::new(sink),
        }
    }

    /// Current order (tracked)
    pub fn keys(&self) -> Vec<FieldKey> {
        self.order.with(|o| o.keys().to_vec())
    }

    /// Position of `key` in the current order (tracked)
    pub fn index_of(&self, key: FieldKey) -> Option<usize> {
        self.order.with(|o| o.position(key))
    }

    pub fn len(&self) -> usize {
        self.order.with(FieldOrder::len)
    }

    /// Replace the order with one loaded from settings. Nothing is saved back.
    pub fn load_saved<S: AsRef<str>>(&self, tokens: &[S]) {
        if let Some(saved) = FieldOrder::from_tokens(tokens) {
            self.order.try_set(saved);
        }
    }

    /// Drag-and-drop reorder
    pub fn reorder(&self, from: usize, to: usize) {
        self.apply(|o| o.moved(from, to));
    }

    pub fn move_up(&self, index: usize) {
        self.apply(|o| o.moved_up(index));
    }

    pub fn move_down(&self, index: usize) {
        self.apply(|o| o.moved_down(index));
    }

    /// Update local state first, then hand the full order to the sink
    fn apply(&self, change: impl FnOnce(&FieldOrder) -> Option<FieldOrder>) {
        let Some(next) = self.order.try_with_untracked(change).flatten() else {
            return;
        };
        let tokens = next.tokens();
        self.order.try_set(next);
        self.sink.try_with_value(|sink| sink.save(tokens));
    }
}

/// Field order starting from the default, replaced by the saved order once loaded
pub fn use_field_order(auth: AuthContext) -> FieldOrderHandle {
    let client = auth.client();
    let handle = FieldOrderHandle::new(Arc::new(SettingsSink { auth }));

    spawn_local(async move {
        match api::get_settings(&client).await {
            Ok(settings) => handle.load_saved(&settings.task_form_field_order),
            Err(err) => tracing::error!("error loading field order: {}", err),
        }
    });

    handle
}
