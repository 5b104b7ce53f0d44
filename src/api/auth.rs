//! Auth Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, TokenPair};

/// Exchange credentials for an access token (`POST /token/`)
pub async fn obtain_token(client: &ApiClient, username: &str, password: &str) -> Result<TokenPair, ApiError> {
    client.post("/token/", &Credentials { username, password }).await
}
