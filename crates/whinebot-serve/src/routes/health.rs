//! Health and statistics endpoints.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// `GET /health`
///
/// Reports which providers are configured, not whether they are reachable;
/// the service is healthy either way because of the fallback engine.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "WhineBot Backend",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "api_providers": {
            "openai": state.llm.openai_configured(),
            "anthropic": state.llm.anthropic_configured(),
        },
    }))
}

/// `GET /stats`
pub async fn stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "active_conversations": state.history.conversation_count(),
        "total_messages": state.history.total_turns(),
    }))
}
