//! Bounded conversation history store.
//!
//! Maps a caller-supplied conversation id to the most recent turns of that
//! conversation, used only to build the next LLM prompt. Two bounds apply:
//! a cap on retained turns per conversation, and a capacity bound on the
//! number of tracked conversations (ids are caller-controlled, so the map
//! must not grow without limit). Evicted conversations simply lose their
//! context; the next message starts fresh.
//!
//! Each turn list sits behind its own mutex, so the append read-modify-write
//! is safe under concurrent requests sharing a conversation id.

use std::sync::Arc;

use moka::sync::Cache;
use parking_lot::Mutex;

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in a conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

type TurnList = Arc<Mutex<Vec<Turn>>>;

/// Per-conversation history with bounded retention.
pub struct ConversationStore {
    conversations: Cache<String, TurnList>,
    max_turns: usize,
}

impl ConversationStore {
    /// `max_conversations` bounds the number of tracked ids (LRU-ish
    /// eviction via moka); `max_turns` bounds the turns kept per id.
    pub fn new(max_conversations: u64, max_turns: usize) -> Self {
        Self {
            conversations: Cache::builder().max_capacity(max_conversations).build(),
            max_turns,
        }
    }

    /// The retained turns for a conversation, oldest first.
    pub fn context(&self, conversation_id: &str) -> Vec<Turn> {
        match self.conversations.get(conversation_id) {
            Some(turns) => turns.lock().clone(),
            None => Vec::new(),
        }
    }

    /// Record one request/response pair, dropping the oldest turns beyond
    /// the cap. Called only after a successful provider turn; fallback
    /// turns are not recorded.
    pub fn append(&self, conversation_id: &str, user: &str, assistant: &str) {
        let turns = self
            .conversations
            .get_with(conversation_id.to_string(), || {
                Arc::new(Mutex::new(Vec::new()))
            });
        let mut turns = turns.lock();
        turns.push(Turn {
            role: Role::User,
            content: user.to_string(),
        });
        turns.push(Turn {
            role: Role::Assistant,
            content: assistant.to_string(),
        });
        if turns.len() > self.max_turns {
            let excess = turns.len() - self.max_turns;
            turns.drain(..excess);
        }
    }

    /// Number of conversations currently tracked.
    pub fn conversation_count(&self) -> u64 {
        self.conversations.run_pending_tasks();
        self.conversations.entry_count()
    }

    /// Total turns retained across all conversations.
    pub fn total_turns(&self) -> usize {
        self.conversations.run_pending_tasks();
        self.conversations
            .iter()
            .map(|(_, turns)| turns.lock().len())
            .sum()
    }
}
