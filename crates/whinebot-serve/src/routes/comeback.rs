//! Comeback generation endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use whinebot_core::comeback;

use crate::error::ApiError;
use crate::llm::SamplingParams;
use crate::state::AppState;

const PARAMS: SamplingParams = SamplingParams::new(100, 0.8);

#[derive(Debug, Deserialize)]
pub struct ComebackRequest {
    complaint: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComebackResponse {
    complaint: String,
    comeback: String,
    provider: &'static str,
    success: bool,
}

/// `POST /generate-comeback`
pub async fn generate_comeback(
    State(state): State<AppState>,
    Json(body): Json<ComebackRequest>,
) -> Result<Json<ComebackResponse>, ApiError> {
    let complaint = super::required_text(body.complaint, "complaint")?;

    let user = format!("Generate a perfect comeback for this AI failure: {complaint}");
    let (comeback, provider) = match state
        .llm
        .complete(comeback::SYSTEM_PROMPT, &[], &user, &PARAMS)
        .await
    {
        Some((comeback, provider)) => (comeback, provider.as_str()),
        None => (
            comeback::fallback_comeback(&complaint).to_string(),
            "fallback",
        ),
    };

    Ok(Json(ComebackResponse {
        complaint,
        comeback,
        provider,
        success: true,
    }))
}
