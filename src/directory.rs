use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Result, UserDeskError};
use crate::responses::UserListResponse;
use crate::types::User;

const API_KEY_HEADER: &str = "x-api-key";

/// Read-only client for the remote user directory.
pub struct DirectoryClient {
    http: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl DirectoryClient {
    pub fn new(endpoint: Url, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.endpoint()?, config.api_key()))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the directory, reporting any failure.
    pub async fn try_fetch_users(&self) -> Result<Vec<User>> {
        debug!(endpoint = %self.endpoint, "fetching users");

        let mut request = self
            .http
            .get(self.endpoint.clone())
            .header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(UserDeskError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.text().await?;
        let users = parse_users(&body)?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    /// Fetch the initial population. Any failure degrades to an empty list.
    pub async fn fetch_initial_users(&self) -> Vec<User> {
        match self.try_fetch_users().await {
            Ok(users) => users,
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "could not fetch users");
                Vec::new()
            }
        }
    }
}

fn parse_users(body: &str) -> Result<Vec<User>> {
    let response: UserListResponse = serde_json::from_str(body)?;
    Ok(response.data.into_iter().map(User::from).collect())
}
