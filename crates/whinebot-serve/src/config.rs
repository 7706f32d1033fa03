//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// OpenAI API key; `None` when unset or empty.
    pub openai_api_key: Option<String>,

    /// Anthropic API key; `None` when unset or empty.
    pub anthropic_api_key: Option<String>,

    /// Model name for OpenAI chat completions.
    pub openai_model: String,

    /// Model name for Anthropic messages.
    pub anthropic_model: String,

    /// Request timeout for outbound LLM calls.
    pub llm_timeout: Duration,

    /// Turns retained per conversation for prompt context.
    pub history_turns: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (the service runs fully on fallbacks without provider keys)
    ///
    /// Optional:
    /// - `WHINEBOT_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `OPENAI_API_KEY`: enables the OpenAI provider
    /// - `ANTHROPIC_API_KEY`: enables the Anthropic provider
    /// - `WHINEBOT_OPENAI_MODEL`: OpenAI model (default: "gpt-4")
    /// - `WHINEBOT_ANTHROPIC_MODEL`: Anthropic model (default: "claude-3-haiku-20240307")
    /// - `WHINEBOT_LLM_TIMEOUT_SECS`: outbound request timeout (default: 30)
    /// - `WHINEBOT_HISTORY_TURNS`: turns kept per conversation (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("WHINEBOT_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let openai_api_key = non_empty_var("OPENAI_API_KEY");
        let anthropic_api_key = non_empty_var("ANTHROPIC_API_KEY");

        let openai_model =
            std::env::var("WHINEBOT_OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        let anthropic_model = std::env::var("WHINEBOT_ANTHROPIC_MODEL")
            .unwrap_or_else(|_| "claude-3-haiku-20240307".to_string());

        let llm_timeout_secs: u64 = std::env::var("WHINEBOT_LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let history_turns: usize = std::env::var("WHINEBOT_HISTORY_TURNS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        tracing::info!(
            bind_addr = %bind_addr,
            openai = openai_api_key.is_some(),
            anthropic = anthropic_api_key.is_some(),
            openai_model = %openai_model,
            anthropic_model = %anthropic_model,
            llm_timeout_secs,
            history_turns,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            openai_api_key,
            anthropic_api_key,
            openai_model,
            anthropic_model,
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            history_turns,
        })
    }
}

/// Read a variable, treating unset and empty/whitespace as absent.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "WHINEBOT_BIND_ADDR",
        "OPENAI_API_KEY",
        "ANTHROPIC_API_KEY",
        "WHINEBOT_OPENAI_MODEL",
        "WHINEBOT_ANTHROPIC_MODEL",
        "WHINEBOT_LLM_TIMEOUT_SECS",
        "WHINEBOT_HISTORY_TURNS",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert!(config.openai_api_key.is_none());
            assert!(config.anthropic_api_key.is_none());
            assert_eq!(config.openai_model, "gpt-4");
            assert_eq!(config.anthropic_model, "claude-3-haiku-20240307");
            assert_eq!(config.llm_timeout, Duration::from_secs(30));
            assert_eq!(config.history_turns, 10);
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("WHINEBOT_BIND_ADDR", "127.0.0.1:9090"),
                ("OPENAI_API_KEY", "sk-test"),
                ("WHINEBOT_OPENAI_MODEL", "gpt-4o-mini"),
                ("WHINEBOT_LLM_TIMEOUT_SECS", "5"),
                ("WHINEBOT_HISTORY_TURNS", "8"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
                assert_eq!(config.openai_model, "gpt-4o-mini");
                assert_eq!(config.llm_timeout, Duration::from_secs(5));
                assert_eq!(config.history_turns, 8);
            },
        );
    }

    #[test]
    fn config_blank_keys_are_absent() {
        with_env_vars(
            &[("OPENAI_API_KEY", "   "), ("ANTHROPIC_API_KEY", "")],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.openai_api_key.is_none());
                assert!(config.anthropic_api_key.is_none());
            },
        );
    }

    #[test]
    fn config_unparseable_numbers_fall_back_to_defaults() {
        with_env_vars(
            &[
                ("WHINEBOT_LLM_TIMEOUT_SECS", "soon"),
                ("WHINEBOT_HISTORY_TURNS", "-3"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.llm_timeout, Duration::from_secs(30));
                assert_eq!(config.history_turns, 10);
            },
        );
    }
}
