//! Meme text generation endpoint.
//!
//! The provider path asks for a JSON object and parses it defensively; a
//! malformed completion counts as a provider failure and falls back to the
//! template pools like any other error.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use whinebot_core::meme;

use crate::error::ApiError;
use crate::llm::SamplingParams;
use crate::state::AppState;

const PARAMS: SamplingParams = SamplingParams {
    json_response: true,
    ..SamplingParams::new(100, 0.8)
};

#[derive(Debug, Deserialize)]
pub struct MemeRequest {
    complaint: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MemeResponse {
    top_text: String,
    bottom_text: String,
    meme_type: String,
    original_complaint: String,
    provider: &'static str,
    success: bool,
}

/// `POST /create-meme`
pub async fn create_meme(
    State(state): State<AppState>,
    Json(body): Json<MemeRequest>,
) -> Result<Json<MemeResponse>, ApiError> {
    let complaint = super::required_text(body.complaint, "complaint")?;

    let user = format!("Turn this into meme text: {complaint}");
    let provider_meme = state
        .llm
        .complete(meme::SYSTEM_PROMPT, &[], &user, &PARAMS)
        .await
        .and_then(|(text, provider)| {
            parse_meme_completion(&text).map(|parsed| (parsed, provider.as_str()))
        });

    let ((top_text, bottom_text, meme_type), provider) = match provider_meme {
        Some(result) => result,
        None => {
            let template = meme::fallback_meme(&complaint);
            (
                (
                    template.top_text.to_string(),
                    template.bottom_text.to_string(),
                    template.meme_type.to_string(),
                ),
                "fallback",
            )
        }
    };

    Ok(Json(MemeResponse {
        top_text,
        bottom_text,
        meme_type,
        original_complaint: complaint,
        provider,
        success: true,
    }))
}

/// Extract `(top_text, bottom_text, meme_type)` from a JSON completion.
/// Missing caption fields reject the completion; a missing format tag
/// defaults to "classic".
fn parse_meme_completion(text: &str) -> Option<(String, String, String)> {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "meme completion was not valid JSON, falling back");
            return None;
        }
    };
    let top = value["top_text"].as_str()?.to_string();
    let bottom = value["bottom_text"].as_str()?.to_string();
    let meme_type = value["meme_type"].as_str().unwrap_or("classic").to_string();
    Some((top, bottom, meme_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_completion_parses() {
        let parsed = parse_meme_completion(
            r#"{"top_text": "AI SAID TRUST ME", "bottom_text": "NARRATOR: IT LIED", "meme_type": "this_is_fine"}"#,
        )
        .unwrap();
        assert_eq!(parsed.0, "AI SAID TRUST ME");
        assert_eq!(parsed.2, "this_is_fine");
    }

    #[test]
    fn missing_meme_type_defaults_to_classic() {
        let parsed =
            parse_meme_completion(r#"{"top_text": "TOP", "bottom_text": "BOTTOM"}"#).unwrap();
        assert_eq!(parsed.2, "classic");
    }

    #[test]
    fn malformed_completions_are_rejected() {
        assert!(parse_meme_completion("not json at all").is_none());
        assert!(parse_meme_completion(r#"{"top_text": "only half a meme"}"#).is_none());
        assert!(parse_meme_completion(r#"{"top_text": 7, "bottom_text": "B"}"#).is_none());
    }
}
