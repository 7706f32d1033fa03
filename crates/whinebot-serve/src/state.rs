//! Application state shared across all request handlers.

use std::sync::Arc;

use whinebot_core::ConversationStore;

use crate::config::Config;
use crate::llm::LlmClient;

/// Capacity bound on tracked conversations. Conversation ids are
/// caller-controlled, so the store must evict rather than grow forever.
const MAX_CONVERSATIONS: u64 = 10_000;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// LLM completion client (or immediate fallback when unconfigured).
    pub llm: LlmClient,

    /// Per-conversation chat history, bounded both ways.
    pub history: Arc<ConversationStore>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let llm = LlmClient::new(&config);
        let history = Arc::new(ConversationStore::new(
            MAX_CONVERSATIONS,
            config.history_turns,
        ));

        tracing::info!(
            max_conversations = MAX_CONVERSATIONS,
            history_turns = config.history_turns,
            provider = ?llm.provider(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            llm,
            history,
        }
    }
}
