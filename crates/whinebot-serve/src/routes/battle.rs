//! Complaint battle commentary endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use whinebot_core::battle;

use crate::error::ApiError;
use crate::llm::SamplingParams;
use crate::state::AppState;

const PARAMS: SamplingParams = SamplingParams::new(200, 0.9);

#[derive(Debug, Deserialize)]
pub struct BattleRequest {
    complaint1: Option<String>,
    complaint2: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BattleResponse {
    commentary: String,
    complaint1: String,
    complaint2: String,
    provider: &'static str,
    success: bool,
}

/// `POST /battle-commentary`
///
/// A battle needs both contenders, so the two fields validate together
/// behind one error message rather than naming whichever is missing.
pub async fn battle_commentary(
    State(state): State<AppState>,
    Json(body): Json<BattleRequest>,
) -> Result<Json<BattleResponse>, ApiError> {
    let complaint1 = body.complaint1.unwrap_or_default().trim().to_string();
    let complaint2 = body.complaint2.unwrap_or_default().trim().to_string();
    if complaint1.is_empty() || complaint2.is_empty() {
        return Err(ApiError::BadRequest(
            "Two complaints are required".to_string(),
        ));
    }

    let user = battle::user_prompt(&complaint1, &complaint2);
    let (commentary, provider) = match state
        .llm
        .complete(battle::SYSTEM_PROMPT, &[], &user, &PARAMS)
        .await
    {
        Some((text, provider)) => (text, provider.as_str()),
        None => (
            battle::fallback_commentary(&complaint1, &complaint2),
            "fallback",
        ),
    };

    Ok(Json(BattleResponse {
        commentary,
        complaint1,
        complaint2,
        provider,
        success: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn keyless_state() -> AppState {
        AppState::new(Config {
            bind_addr: "127.0.0.1:0".to_string(),
            openai_api_key: None,
            anthropic_api_key: None,
            openai_model: "gpt-4".to_string(),
            anthropic_model: "claude-3-haiku-20240307".to_string(),
            llm_timeout: std::time::Duration::from_secs(1),
            history_turns: 10,
        })
    }

    #[tokio::test]
    async fn one_empty_contender_is_rejected() {
        for (c1, c2) in [
            (Some("gps sent me to a lake".to_string()), Some(String::new())),
            (Some("   ".to_string()), Some("alexa ignores me".to_string())),
            (None, Some("alexa ignores me".to_string())),
        ] {
            let err = battle_commentary(
                State(keyless_state()),
                Json(BattleRequest {
                    complaint1: c1,
                    complaint2: c2,
                }),
            )
            .await
            .unwrap_err();
            assert_eq!(err.to_string(), "bad request: Two complaints are required");
        }
    }

    #[tokio::test]
    async fn keyless_battle_gets_fallback_commentary() {
        let Json(reply) = battle_commentary(
            State(keyless_state()),
            Json(BattleRequest {
                complaint1: Some("autocorrect ruined my email".to_string()),
                complaint2: Some("alexa ignores me".to_string()),
            }),
        )
        .await
        .unwrap();

        assert!(reply.success);
        assert_eq!(reply.provider, "fallback");
        assert!(!reply.commentary.is_empty());
    }
}
