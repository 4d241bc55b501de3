//! LLM provider configuration.
//!
//! Single source of truth for supported providers and their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire format spoken by a provider's endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireProtocol {
    /// OpenAI-style `POST {base}/chat/completions` with bearer auth.
    ChatCompletions,
    /// Anthropic `POST {base}/messages` with `x-api-key` + version headers.
    AnthropicMessages,
}

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAi,
    DeepSeek,
    Claude,
    Grok,
    Gemini,
}

impl Provider {
    /// All available providers
    pub const ALL: &'static [Provider] = &[
        Provider::OpenAi,
        Provider::DeepSeek,
        Provider::Claude,
        Provider::Grok,
        Provider::Gemini,
    ];

    /// Provider name as used in requests and CLI
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::DeepSeek => "deepseek",
            Self::Claude => "claude",
            Self::Grok => "grok",
            Self::Gemini => "gemini",
        }
    }

    /// Default model when no override is configured
    pub const fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-4o",
            Self::DeepSeek => "deepseek-chat",
            Self::Claude => "claude-3-5-sonnet-20241022",
            Self::Grok => "grok-beta",
            Self::Gemini => "gemini-1.5-pro",
        }
    }

    /// Environment variables accepted for the API key, in lookup order.
    ///
    /// Grok deliberately accepts two names; `XAI_API_KEY` wins when both
    /// are set.
    pub const fn api_key_envs(&self) -> &'static [&'static str] {
        match self {
            Self::OpenAi => &["OPENAI_API_KEY"],
            Self::DeepSeek => &["DEEPSEEK_API_KEY"],
            Self::Claude => &["ANTHROPIC_API_KEY"],
            Self::Grok => &["XAI_API_KEY", "GROK_API_KEY"],
            Self::Gemini => &["GOOGLE_API_KEY"],
        }
    }

    /// Environment variable for the model override
    pub const fn model_env(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_MODEL",
            Self::DeepSeek => "DEEPSEEK_MODEL",
            Self::Claude => "ANTHROPIC_MODEL",
            Self::Grok => "GROK_MODEL",
            Self::Gemini => "GEMINI_MODEL",
        }
    }

    /// Environment variable for the base-URL override
    pub const fn base_url_env(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_BASE_URL",
            Self::DeepSeek => "DEEPSEEK_BASE_URL",
            Self::Claude => "ANTHROPIC_BASE_URL",
            Self::Grok => "XAI_BASE_URL",
            Self::Gemini => "GEMINI_BASE_URL",
        }
    }

    /// Default API base URL. The wire-protocol endpoint path is appended
    /// to this by the dispatcher.
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::DeepSeek => "https://api.deepseek.com",
            Self::Claude => "https://api.anthropic.com/v1",
            Self::Grok => "https://api.x.ai/v1",
            // Google's OpenAI compatibility layer
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai",
        }
    }

    /// Wire format for this provider
    pub const fn wire_protocol(&self) -> WireProtocol {
        match self {
            Self::Claude => WireProtocol::AnthropicMessages,
            _ => WireProtocol::ChatCompletions,
        }
    }

    /// Whether the chat-completions payload carries an explicit
    /// `"stream": false` field
    pub const fn sends_stream_flag(&self) -> bool {
        matches!(self, Self::DeepSeek | Self::Grok)
    }

    /// Get all provider names as strings
    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::name).collect()
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|p| p.name() == lower)
            .copied()
            .ok_or_else(|| ProviderError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Provider selection error
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Unknown provider: {0}. Supported: openai, deepseek, claude, grok, gemini")]
    Unknown(String),
}
