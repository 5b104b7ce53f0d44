//! Settings Endpoints
//!
//! Per-user preferences; currently only the task form field order.

use serde_json::Value;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::UserSettings;

pub async fn get_settings(client: &ApiClient) -> Result<UserSettings, ApiError> {
    client.get("/settings").await
}

/// Persist the full field order (`PUT /settings`)
pub async fn save_field_order(client: &ApiClient, order: Vec<String>) -> Result<(), ApiError> {
    let body = UserSettings { task_form_field_order: order };
    let _: Value = client.put("/settings", &body).await?;
    Ok(())
}
