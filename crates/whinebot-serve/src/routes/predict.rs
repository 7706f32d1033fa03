//! AI failure prediction endpoint.

use axum::Json;
use axum::extract::State;
use rand::Rng;
use serde::{Deserialize, Serialize};

use whinebot_core::predict;

use crate::error::ApiError;
use crate::llm::SamplingParams;
use crate::state::AppState;

const PARAMS: SamplingParams = SamplingParams::new(150, 0.9);

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    scenario: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    scenario: String,
    prediction: String,
    /// Comedic confidence score; the provider path scores slightly higher
    /// than the fallback.
    confidence: u8,
    provider: &'static str,
    success: bool,
}

/// `POST /predict-fail`
pub async fn predict_fail(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let scenario = super::required_text(body.scenario, "scenario")?;

    let user = format!("Predict what AI will probably mess up in this scenario: {scenario}");
    let (prediction, confidence, provider) = match state
        .llm
        .complete(predict::SYSTEM_PROMPT, &[], &user, &PARAMS)
        .await
    {
        Some((prediction, provider)) => (
            prediction,
            rand::thread_rng().gen_range(predict::PROVIDER_CONFIDENCE),
            provider.as_str(),
        ),
        None => (
            predict::fallback_prediction(&scenario).to_string(),
            rand::thread_rng().gen_range(predict::FALLBACK_CONFIDENCE),
            "fallback",
        ),
    };

    Ok(Json(PredictResponse {
        scenario,
        prediction,
        confidence,
        provider,
        success: true,
    }))
}
