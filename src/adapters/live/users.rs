//! Live adapter for the `UserStore` port backed by an HTTP user directory.

use std::env;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::ports::users::{User, UserLookup, UserStore};

/// Environment variable naming the user directory base URL.
const STORE_URL_VAR: &str = "SCRIM_USER_STORE_URL";

/// Live user store that queries an HTTP user directory.
///
/// Records are fetched from `GET <base>/users/<name>`; a `404` response
/// means "no such user" rather than a failure.
pub struct HttpUserStore {
    client: Client,
    base_url: String,
}

impl HttpUserStore {
    /// Creates a store pointing at the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }

    /// Creates a store from the `SCRIM_USER_STORE_URL` environment
    /// variable, loading a `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let _ = dotenvy::dotenv();
        let base_url = env::var(STORE_URL_VAR)
            .map_err(|_| format!("{STORE_URL_VAR} environment variable not set"))?;
        Ok(Self::new(base_url))
    }

    fn user_url(&self, name: &str) -> String {
        format!("{}/users/{name}", self.base_url.trim_end_matches('/'))
    }
}

/// Error body returned by the user directory.
#[derive(Deserialize)]
struct StoreError {
    error: String,
}

impl UserStore for HttpUserStore {
    fn find_by_name(&self, name: &str) -> UserLookup<'_> {
        let url = self.user_url(name);

        Box::pin(async move {
            let response = self.client.get(&url).send().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("user store request failed: {e}").into()
                },
            )?;

            if response.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }

            let status = response.status();
            let body = response.text().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read user store response: {e}").into()
                },
            )?;

            if !status.is_success() {
                let msg = serde_json::from_str::<StoreError>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(format!("user store error ({}): {msg}", status.as_u16()).into());
            }

            let user: User = serde_json::from_str(&body).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to parse user store response: {e}").into()
                },
            )?;
            Ok(Some(user))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_url_joins_base_and_name() {
        let store = HttpUserStore::new("http://localhost:8080");
        assert_eq!(store.user_url("alice"), "http://localhost:8080/users/alice");
    }

    #[test]
    fn user_url_tolerates_a_trailing_slash() {
        let store = HttpUserStore::new("http://localhost:8080/");
        assert_eq!(store.user_url("bob"), "http://localhost:8080/users/bob");
    }
}
