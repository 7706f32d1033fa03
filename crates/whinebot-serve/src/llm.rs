//! Single-attempt LLM completion client.
//!
//! Provider selection follows key presence: OpenAI when `OPENAI_API_KEY` is
//! configured, else Anthropic, else no provider at all. One request, no
//! retries, no backoff; every failure (transport, auth, rate limit,
//! malformed body, timeout) is logged and surfaced as `None` so the caller
//! falls back to the template engine. Errors never reach the client.

use reqwest::Client;
use serde_json::{Value, json};

use whinebot_core::Turn;

use crate::config::Config;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Which upstream produced a completion. The string forms match what the
/// site's frontend has always displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "claude",
        }
    }
}

/// Fixed sampling parameters for one endpoint's completion call.
#[derive(Clone, Copy, Debug)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f64,
    /// Anthropic-specific temperature when a call site tunes the providers
    /// differently; falls back to `temperature` when unset.
    pub anthropic_temperature: Option<f64>,
    pub frequency_penalty: Option<f64>,
    pub presence_penalty: Option<f64>,
    /// Request a JSON object response (OpenAI `response_format`; Anthropic
    /// has no equivalent, the caller must parse defensively either way).
    pub json_response: bool,
}

impl SamplingParams {
    pub const fn new(max_tokens: u32, temperature: f64) -> Self {
        Self {
            max_tokens,
            temperature,
            anthropic_temperature: None,
            frequency_penalty: None,
            presence_penalty: None,
            json_response: false,
        }
    }
}

/// HTTP client plus provider credentials.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    openai_api_key: Option<String>,
    anthropic_api_key: Option<String>,
    openai_model: String,
    anthropic_model: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.llm_timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            openai_api_key: config.openai_api_key.clone(),
            anthropic_api_key: config.anthropic_api_key.clone(),
            openai_model: config.openai_model.clone(),
            anthropic_model: config.anthropic_model.clone(),
        }
    }

    /// The provider a completion would use, by key presence.
    pub fn provider(&self) -> Option<Provider> {
        if self.openai_api_key.is_some() {
            Some(Provider::OpenAi)
        } else if self.anthropic_api_key.is_some() {
            Some(Provider::Anthropic)
        } else {
            None
        }
    }

    pub fn openai_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }

    pub fn anthropic_configured(&self) -> bool {
        self.anthropic_api_key.is_some()
    }

    /// Run one completion. `None` means "use the fallback" - whether because
    /// no key is configured or because the single attempt failed.
    pub async fn complete(
        &self,
        system: &str,
        history: &[Turn],
        user: &str,
        params: &SamplingParams,
    ) -> Option<(String, Provider)> {
        let provider = self.provider()?;
        let result = match provider {
            Provider::OpenAi => self.complete_openai(system, history, user, params).await,
            Provider::Anthropic => self.complete_anthropic(system, history, user, params).await,
        };
        match result {
            Ok(text) => Some((text, provider)),
            Err(err) => {
                tracing::warn!(provider = provider.as_str(), error = %err, "completion failed, falling back");
                None
            }
        }
    }

    async fn complete_openai(
        &self,
        system: &str,
        history: &[Turn],
        user: &str,
        params: &SamplingParams,
    ) -> anyhow::Result<String> {
        let api_key = self
            .openai_api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("OpenAI key not configured"))?;

        let body = openai_body(&self.openai_model, system, history, user, params);

        let response = self
            .http
            .post(OPENAI_URL)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error {status}: {body_text}");
        }

        let value: Value = response.json().await?;
        let text = value["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("no message content in OpenAI response"))?
            .trim()
            .to_string();
        if text.is_empty() {
            anyhow::bail!("empty completion from OpenAI");
        }
        Ok(text)
    }

    async fn complete_anthropic(
        &self,
        system: &str,
        history: &[Turn],
        user: &str,
        params: &SamplingParams,
    ) -> anyhow::Result<String> {
        let api_key = self
            .anthropic_api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Anthropic key not configured"))?;

        let body = anthropic_body(&self.anthropic_model, system, history, user, params);

        let response = self
            .http
            .post(ANTHROPIC_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Anthropic API error {status}: {body_text}");
        }

        let value: Value = response.json().await?;
        let text = value["content"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("no text content in Anthropic response"))?
            .trim()
            .to_string();
        if text.is_empty() {
            anyhow::bail!("empty completion from Anthropic");
        }
        Ok(text)
    }
}

fn turn_messages(history: &[Turn], user: &str) -> Vec<Value> {
    let mut messages: Vec<Value> = history
        .iter()
        .map(|turn| json!({"role": turn.role.as_str(), "content": turn.content}))
        .collect();
    messages.push(json!({"role": "user", "content": user}));
    messages
}

fn openai_body(
    model: &str,
    system: &str,
    history: &[Turn],
    user: &str,
    params: &SamplingParams,
) -> Value {
    let mut messages = vec![json!({"role": "system", "content": system})];
    messages.extend(turn_messages(history, user));

    let mut body = json!({
        "model": model,
        "messages": messages,
        "max_tokens": params.max_tokens,
        "temperature": params.temperature,
    });
    if let Some(penalty) = params.frequency_penalty {
        body["frequency_penalty"] = json!(penalty);
    }
    if let Some(penalty) = params.presence_penalty {
        body["presence_penalty"] = json!(penalty);
    }
    if params.json_response {
        body["response_format"] = json!({"type": "json_object"});
    }
    body
}

fn anthropic_body(
    model: &str,
    system: &str,
    history: &[Turn],
    user: &str,
    params: &SamplingParams,
) -> Value {
    let temperature = params.anthropic_temperature.unwrap_or(params.temperature);
    json!({
        "model": model,
        "max_tokens": params.max_tokens,
        // Anthropic temperature tops out at 1.0.
        "temperature": temperature.min(1.0),
        "system": system,
        "messages": turn_messages(history, user),
    })
}
