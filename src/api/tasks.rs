//! Task Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{NewTask, Task};

pub async fn list_tasks(client: &ApiClient) -> Result<Vec<Task>, ApiError> {
    client.get("/tasks/").await
}

pub async fn create_task(client: &ApiClient, task: &NewTask) -> Result<Task, ApiError> {
    client.post("/tasks/", task).await
}
