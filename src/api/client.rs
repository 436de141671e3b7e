use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

const RECOMMEND_ENDPOINT: &str = "/recommend";

/// Shown when a success body carries no recommendation field.
const NO_RECOMMENDATION: &str = "No recommendation received.";

#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest {
    pub user_input: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RecommendResponse {
    recommendation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// POST the prompt to the recommendation service and return the answer text.
pub async fn fetch_recommendation(user_input: &str) -> Result<String, WidgetError> {
    let request = RecommendRequest {
        user_input: user_input.to_string(),
    };

    let response = Request::post(RECOMMEND_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&request).map_err(|e| {
            WidgetError::Transport(format!("Failed to serialize request: {}", e))
        })?)?
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !response.ok() {
        return Err(WidgetError::Transport(failure_message(status, &body)));
    }

    recommendation_from_body(&body)
}

/// Extract the recommendation from a success body. An unreadable body is a
/// transport failure; a readable body without the field gets fallback text.
fn recommendation_from_body(body: &str) -> Result<String, WidgetError> {
    let parsed: RecommendResponse = serde_json::from_str(body)
        .map_err(|e| WidgetError::Transport(format!("Failed to parse response: {}", e)))?;
    Ok(parsed
        .recommendation
        .unwrap_or_else(|| NO_RECOMMENDATION.to_string()))
}

/// Message for a non-success status, preferring the service's structured
/// error body over the generic fallback.
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("HTTP error {}", status))
}
