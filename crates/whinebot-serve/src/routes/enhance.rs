//! Complaint enhancement endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use whinebot_core::enhance;

use crate::error::ApiError;
use crate::llm::SamplingParams;
use crate::state::AppState;

const PARAMS: SamplingParams = SamplingParams::new(150, 0.8);

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    text: Option<String>,
    style: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    original: String,
    enhanced: String,
    style: &'static str,
    provider: &'static str,
    success: bool,
}

/// `POST /enhance-complaint`
pub async fn enhance_complaint(
    State(state): State<AppState>,
    Json(body): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, ApiError> {
    let text = super::required_text(body.text, "text")?;
    let style = enhance::Style::parse(body.style.as_deref().unwrap_or_default());

    let system = enhance::system_prompt(style);
    let user = format!("Original complaint: {text}");

    let (enhanced, provider) = match state.llm.complete(&system, &[], &user, &PARAMS).await {
        Some((enhanced, provider)) => (enhanced, provider.as_str()),
        None => (enhance::fallback_enhancement(&text, style), "fallback"),
    };

    Ok(Json(EnhanceResponse {
        original: text,
        enhanced,
        style: style.as_str(),
        provider,
        success: true,
    }))
}
