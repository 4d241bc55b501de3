//! Request dispatch to the configured LLM backends.
//!
//! One analysis request maps to exactly one HTTP round trip against one
//! provider. There is no retry, no fallback chaining and no streaming; a
//! failed call is reported verbatim to the caller.

use crate::config::Config;
use crate::log_debug;
use crate::prompts::resolve_system_prompt;
use crate::providers::{Provider, WireProtocol};
use reqwest::Client;
use serde_json::{Value, json};

/// Version header required by the Anthropic messages API
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Token cap for the Anthropic messages API, which makes the field mandatory
const ANTHROPIC_MAX_TOKENS: u32 = 4096;

/// A normalized analysis request
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Backend that will generate the documentation
    pub provider: Provider,
    /// Raw workflow document, expected (but not required) to be JSON
    pub document: String,
    /// Optional free-text notes about the workflow
    pub details: Option<String>,
    /// Requested output language; the configured default applies when absent
    pub language: Option<String>,
    /// Explicit system prompt; bypasses the prompt resolver entirely
    pub custom_prompt: Option<String>,
}

/// Generated documentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Markdown document produced by the provider
    pub markdown: String,
}

/// Dispatch failure taxonomy. None of these trigger a retry.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// Required credential absent; detected before any network call
    #[error("{0} API key not configured")]
    MissingApiKey(Provider),

    /// Upstream returned a non-success status
    #[error("{provider} API error (status {status}): {body}")]
    Api {
        provider: Provider,
        status: u16,
        body: String,
    },

    /// Upstream response parsed but the expected text field was absent
    #[error("malformed {provider} response: missing {path}")]
    MalformedResponse {
        provider: Provider,
        path: &'static str,
    },

    /// Transport-level failure from the HTTP client
    #[error("request to provider failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl AnalysisRequest {
    /// Target language for this request, falling back to the configured
    /// default
    pub fn target_language<'a>(&'a self, config: &'a Config) -> &'a str {
        self.language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(&config.default_language)
    }
}

/// System prompt for a request: the explicit override when present,
/// otherwise the catalog entry for the target language.
pub fn effective_system_prompt(custom_prompt: Option<&str>, language: &str) -> String {
    match custom_prompt {
        Some(prompt) => prompt.to_string(),
        None => resolve_system_prompt(language),
    }
}

/// User message embedding the workflow document, optional details and the
/// answer-in-this-language directive.
pub fn build_user_prompt(document: &str, details: Option<&str>, language: &str) -> String {
    let details_text = details.unwrap_or("Not provided");
    format!(
        "Workflow Details: {details_text}\n\n\
         Target Language: {language}\n\n\
         IMPORTANT: The entire analysis output must be in {language}.\n\n\
         Workflow JSON:\n```json\n{document}\n```"
    )
}

/// Analyzes a workflow document by calling the selected provider once.
pub async fn analyze(
    config: &Config,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AnalyzeError> {
    let provider = request.provider;
    log_debug!("Dispatching analysis request to provider: {}", provider);

    let settings = config.provider_settings(provider);
    let Some(api_key) = settings.api_key else {
        return Err(AnalyzeError::MissingApiKey(provider));
    };

    let language = request.target_language(config);
    let system_prompt = effective_system_prompt(request.custom_prompt.as_deref(), language);
    let user_prompt = build_user_prompt(&request.document, request.details.as_deref(), language);

    let model = config.effective_model(provider);
    let base_url = config.effective_base_url(provider);
    let client = Client::new();

    let markdown = match provider.wire_protocol() {
        WireProtocol::ChatCompletions => {
            send_chat_completions(
                &client,
                provider,
                &base_url,
                &api_key,
                &model,
                &system_prompt,
                &user_prompt,
            )
            .await?
        }
        WireProtocol::AnthropicMessages => {
            send_anthropic_messages(
                &client,
                provider,
                &base_url,
                &api_key,
                &model,
                &system_prompt,
                &user_prompt,
            )
            .await?
        }
    };

    log_debug!("Provider {} returned {} bytes", provider, markdown.len());
    Ok(AnalysisResult { markdown })
}

/// OpenAI-style chat completions call (openai, deepseek, grok, gemini shim)
async fn send_chat_completions(
    client: &Client,
    provider: Provider,
    base_url: &str,
    api_key: &str,
    model: &str,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, AnalyzeError> {
    let mut payload = json!({
        "model": model,
        "messages": [
            {"role": "system", "content": system_prompt},
            {"role": "user", "content": user_prompt}
        ]
    });
    if provider.sends_stream_flag() {
        payload["stream"] = json!(false);
    }

    let url = format!("{base_url}/chat/completions");
    let response = client
        .post(&url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await?;

    let body = check_status(provider, response).await?;
    extract_text(provider, &body, &["choices", "0", "message", "content"])
}

/// Anthropic messages call. The system prompt is concatenated ahead of the
/// user message rather than sent as a separate role.
async fn send_anthropic_messages(
    client: &Client,
    provider: Provider,
    base_url: &str,
    api_key: &str,
    model: &str,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, AnalyzeError> {
    let payload = json!({
        "model": model,
        "messages": [
            {"role": "user", "content": format!("{system_prompt}\n\n{user_prompt}")}
        ],
        "max_tokens": ANTHROPIC_MAX_TOKENS
    });

    let url = format!("{base_url}/messages");
    let response = client
        .post(&url)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&payload)
        .send()
        .await?;

    let body = check_status(provider, response).await?;
    extract_text(provider, &body, &["content", "0", "text"])
}

/// Turns a non-success upstream status into an [`AnalyzeError::Api`] carrying
/// the status and raw body, otherwise parses the body as JSON.
async fn check_status(
    provider: Provider,
    response: reqwest::Response,
) -> Result<Value, AnalyzeError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log_debug!("{} returned status {}: {}", provider, status, body);
        return Err(AnalyzeError::Api {
            provider,
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<Value>().await?)
}

/// Walks the provider's documented response path to the generated text.
fn extract_text(
    provider: Provider,
    body: &Value,
    path: &'static [&'static str],
) -> Result<String, AnalyzeError> {
    let mut value = body;
    for segment in path {
        value = match segment.parse::<usize>() {
            Ok(index) => &value[index],
            Err(_) => &value[*segment],
        };
    }
    value
        .as_str()
        .map(String::from)
        .ok_or(AnalyzeError::MalformedResponse {
            provider,
            path: response_path_label(path),
        })
}

const fn response_path_label(path: &'static [&'static str]) -> &'static str {
    // Labels used in error messages; keep aligned with the extraction paths
    match path.len() {
        4 => "choices[0].message.content",
        _ => "content[0].text",
    }
}
