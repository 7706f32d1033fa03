//! WhineBot Serve - HTTP API for the WhineAboutAI backend.
//!
//! This crate exposes the site's humor endpoints over REST. Every generation
//! endpoint tries a single LLM completion (OpenAI preferred, Anthropic
//! otherwise) and degrades to the deterministic template engine in
//! `whinebot-core` when no key is configured or the attempt fails.
//!
//! # Architecture
//!
//! - **Config**: Environment-driven settings (bind address, provider keys,
//!   models, timeouts)
//! - **AppState**: Shared state (LLM client, conversation store)
//! - **Routes**: Endpoint handlers, one module per feature

mod config;
mod error;
mod llm;
mod routes;
mod state;

pub use self::config::Config;
pub use self::error::ApiError;
pub use self::llm::{LlmClient, Provider, SamplingParams};
pub use self::routes::router;
pub use self::state::AppState;
