//! WhineBot chat endpoint with per-conversation memory.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use whinebot_core::chat as persona;

use crate::error::ApiError;
use crate::llm::SamplingParams;
use crate::state::AppState;

/// Longest accepted chat message, in characters.
const MAX_MESSAGE_CHARS: usize = 500;

const PARAMS: SamplingParams = SamplingParams {
    // Claude chat runs slightly cooler than GPT, as the site always has.
    anthropic_temperature: Some(0.8),
    frequency_penalty: Some(0.5),
    presence_penalty: Some(0.3),
    ..SamplingParams::new(150, 0.9)
};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    message: Option<String>,
    conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    response: String,
    conversation_id: String,
    provider: &'static str,
    /// Wall time spent handling the request, seconds to 3 decimals.
    response_time: f64,
    timestamp: String,
    success: bool,
}

/// `POST /chat`
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let started = Instant::now();

    let message = super::required_text(body.message, "message")?;
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest("message too long".to_string()));
    }
    let conversation_id = body
        .conversation_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| "default".to_string());

    let context = state.history.context(&conversation_id);
    let (response, provider) = match state
        .llm
        .complete(persona::SYSTEM_PROMPT, &context, &message, &PARAMS)
        .await
    {
        Some((text, provider)) => {
            // Fallback turns are not recorded; only real provider turns
            // feed the next prompt's context.
            state.history.append(&conversation_id, &message, &text);
            (text, provider.as_str())
        }
        None => (persona::fallback_reply(&message).to_string(), "fallback"),
    };

    tracing::info!(
        conversation_id = %conversation_id,
        provider,
        message_chars = message.chars().count(),
        "chat turn"
    );

    Ok(Json(ChatResponse {
        response,
        conversation_id,
        provider,
        response_time: (started.elapsed().as_secs_f64() * 1000.0).round() / 1000.0,
        timestamp: chrono::Utc::now().to_rfc3339(),
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
    async fn keyless_chat_falls_back_to_a_topic_template() {
        let state = keyless_state();
        let Json(reply) = chat(
            State(state),
            Json(ChatRequest {
                message: Some("alexa is dumb".to_string()),
                conversation_id: None,
            }),
        )
        .await
        .unwrap();

        assert!(reply.success);
        assert_eq!(reply.provider, "fallback");
        assert_eq!(reply.conversation_id, "default");
        assert!(
            persona::templates(persona::Topic::VoiceAssistant).contains(&reply.response.as_str())
        );
    }

    #[tokio::test]
    async fn fallback_turns_leave_history_empty() {
        let state = keyless_state();
        let _ = chat(
            State(state.clone()),
            Json(ChatRequest {
                message: Some("hello there".to_string()),
                conversation_id: Some("c1".to_string()),
            }),
        )
        .await
        .unwrap();

        assert!(state.history.context("c1").is_empty());
    }

    #[tokio::test]
    async fn blank_and_oversized_messages_are_rejected() {
        let state = keyless_state();
        let err = chat(
            State(state.clone()),
            Json(ChatRequest {
                message: Some("   ".to_string()),
                conversation_id: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "bad request: message is required");

        let err = chat(
            State(state),
            Json(ChatRequest {
                message: Some("x".repeat(MAX_MESSAGE_CHARS + 1)),
                conversation_id: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "bad request: message too long");
    }
}
