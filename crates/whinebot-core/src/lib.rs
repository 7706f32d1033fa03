//! Core logic for the WhineAboutAI backend.
//!
//! This crate provides everything the HTTP layer needs that is not HTTP:
//! - First-match keyword classification of free-text complaints
//! - Static template pools per feature, with uniform-random selection
//! - System prompts for the LLM-backed path of each feature
//! - A bounded, concurrency-safe conversation history store
//!
//! Every feature module (`chat`, `enhance`, `predict`, `comeback`, `meme`,
//! `battle`, `submit`) pairs its system prompt with its fallback table, so the
//! serving layer treats both as configuration data rather than duplicating
//! handler logic per endpoint.

pub mod battle;
pub mod chat;
mod classify;
pub mod comeback;
pub mod enhance;
pub mod history;
pub mod meme;
pub mod predict;
pub mod submit;

pub use classify::KeywordTable;
pub use history::{ConversationStore, Role, Turn};

/// Character cap applied to user text interpolated into fallback templates.
pub const INTERPOLATION_CHAR_CAP: usize = 50;

/// Truncate to at most `max` characters, on a char boundary.
///
/// Fallback templates quote user text back verbatim; this only bounds the
/// quoted length, it does not escape anything. Output is plain text.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub(crate) fn pick(pool: &'static [&'static str]) -> &'static str {
    use rand::seq::SliceRandom;
    pool.choose(&mut rand::thread_rng())
        .copied()
        .expect("template pools are non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_shorter_than_cap_is_identity() {
        assert_eq!(truncate_chars("alexa", 50), "alexa");
    }

    #[test]
    fn truncate_caps_at_char_count() {
        let long = "x".repeat(80);
        assert_eq!(truncate_chars(&long, 50).chars().count(), 50);
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let text = "🦆🦆🦆🦆";
        assert_eq!(truncate_chars(text, 2), "🦆🦆");
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_chars("", 50), "");
    }
}
