use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{habit::ProfileSummary, lang::FALLBACK_NAME};

#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// POSTs the auth blob to `/api/user`. The backend answers with a sparse
    /// object; absent fields fall back per the display contract.
    pub async fn fetch(&self, init_data: &str) -> Result<ProfileSummary> {
        let response = self
            .client
            .post(format!("{}/api/user", self.base_url))
            .json(&json!({ "initData": init_data }))
            .send()
            .await
            .context("profile request failed")?
            .error_for_status()
            .context("profile request returned non-success status")?;

        let payload: ProfileResponse = response
            .json()
            .await
            .context("failed to parse profile payload")?;

        Ok(payload.into_summary())
    }
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    name: Option<String>,
    current_streak: Option<i64>,
    max_streak: Option<i64>,
}

impl ProfileResponse {
    fn into_summary(self) -> ProfileSummary {
        ProfileSummary {
            name: self
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_NAME.to_string()),
            current_streak: clamp_streak(self.current_streak),
            max_streak: clamp_streak(self.max_streak),
        }
    }
}

fn clamp_streak(value: Option<i64>) -> u32 {
    u32::try_from(value.unwrap_or(0).max(0)).unwrap_or(u32::MAX)
}
