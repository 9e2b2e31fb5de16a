use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::habit::RelapseEvent;

/// Parsed `/api/events` body. `Default` doubles as the degraded
/// "backend unavailable" value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsPayload {
    pub events: Vec<RelapseEvent>,
    pub chart: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct EventsClient {
    client: Client,
    base_url: String,
}

impl EventsClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, init_data: &str) -> Result<EventsPayload> {
        let response = self
            .client
            .post(format!("{}/api/events", self.base_url))
            .json(&json!({ "initData": init_data }))
            .send()
            .await
            .context("events request failed")?
            .error_for_status()
            .context("events request returned non-success status")?;

        let payload: EventsResponse = response
            .json()
            .await
            .context("failed to parse events payload")?;

        Ok(payload.into_payload())
    }

    /// Event history is nice-to-have: any failure degrades to the empty
    /// payload so the rest of the app keeps rendering.
    pub async fn fetch_or_empty(&self, init_data: &str) -> EventsPayload {
        self.fetch(init_data).await.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    events: Vec<EventRecord>,
    #[serde(default, rename = "chartData")]
    chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    datetime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartPoint {
    #[serde(default)]
    value: f64,
}

impl EventsResponse {
    fn into_payload(self) -> EventsPayload {
        EventsPayload {
            events: self
                .events
                .into_iter()
                .filter_map(|record| record.datetime)
                .map(RelapseEvent::new)
                .collect(),
            chart: self.chart_data.into_iter().map(|point| point.value).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blocks_default_to_empty() {
        let payload: EventsResponse = serde_json::from_str("{}").expect("valid json");
        assert_eq!(payload.into_payload(), EventsPayload::default());
    }

    #[test]
    fn records_without_datetime_are_dropped() {
        let raw = r#"{
            "events": [
                {"datetime": "2024-02-10T10:00:00Z"},
                {"datetime": null},
                {}
            ],
            "chartData": [{"value": 1.0}, {"value": 3.5}]
        }"#;
        let payload: EventsResponse = serde_json::from_str(raw).expect("valid json");
        let parsed = payload.into_payload();
        assert_eq!(
            parsed.events,
            vec![RelapseEvent::new("2024-02-10T10:00:00Z")]
        );
        assert_eq!(parsed.chart, vec![1.0, 3.5]);
    }
}
