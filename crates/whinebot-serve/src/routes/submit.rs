//! Complaint submission endpoint: acknowledges a complaint with a witty
//! receipt and a case number.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use whinebot_core::submit;

use crate::error::ApiError;
use crate::llm::SamplingParams;
use crate::state::AppState;

const PARAMS: SamplingParams = SamplingParams::new(150, 0.9);

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    complaint: Option<String>,
    category: Option<String>,
    // The frontend sends camelCase for this one field only.
    #[serde(rename = "angerLevel")]
    anger_level: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    response: String,
    provider: &'static str,
    success: bool,
}

/// `POST /submit-complaint`
pub async fn submit_complaint(
    State(state): State<AppState>,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let complaint = super::required_text(body.complaint, "complaint")?;
    let category = body
        .category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| submit::DEFAULT_CATEGORY.to_string());
    let anger_level = body.anger_level.unwrap_or(submit::DEFAULT_ANGER_LEVEL);

    let system = submit::system_prompt(&category, anger_level);
    let user = submit::user_prompt(&complaint, &category, anger_level);
    let (response, provider) = match state.llm.complete(&system, &[], &user, &PARAMS).await {
        Some((text, provider)) => (text, provider.as_str()),
        None => (submit::fallback_receipt(&category, anger_level), "fallback"),
    };

    Ok(Json(SubmitResponse {
        response,
        provider,
        success: true,
    }))
}
