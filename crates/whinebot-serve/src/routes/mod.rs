//! API route definitions.
//!
//! ## Routes
//!
//! - `GET /health` - Health check with provider availability
//! - `GET /stats` - Conversation store statistics
//! - `POST /chat` - WhineBot chat with conversation memory
//! - `POST /enhance-complaint` - Rewrite a complaint in a comedic style
//! - `POST /predict-fail` - Predict the next AI failure for a scenario
//! - `POST /generate-comeback` - One-liner comeback for an AI failure
//! - `POST /create-meme` - Meme top/bottom text from a complaint
//! - `POST /battle-commentary` - Announcer commentary for two complaints
//! - `POST /submit-complaint` - Witty receipt for a complaint submission
//!
//! All POST bodies are JSON. Every handler degrades to the deterministic
//! fallback engine when no provider key is configured or the single
//! provider attempt fails; that path is always `success: true` with
//! `provider: "fallback"`.

mod battle;
mod chat;
mod comeback;
mod enhance;
mod health;
mod meme;
mod predict;
mod submit;

use axum::Router;
use axum::routing::{get, post};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/stats", get(health::stats))
        .route("/chat", post(chat::chat))
        .route("/enhance-complaint", post(enhance::enhance_complaint))
        .route("/predict-fail", post(predict::predict_fail))
        .route("/generate-comeback", post(comeback::generate_comeback))
        .route("/create-meme", post(meme::create_meme))
        .route("/battle-commentary", post(battle::battle_commentary))
        .route("/submit-complaint", post(submit::submit_complaint))
        .with_state(state)
}

/// Trimmed, non-empty text field or a 400-shaped error naming the field.
fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    let trimmed = value.unwrap_or_default().trim().to_string();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    Ok(trimmed)
}
