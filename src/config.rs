use crate::log_debug;
use crate::providers::Provider;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Environment variable holding the default output language
pub const DEFAULT_LANGUAGE_ENV: &str = "DEFAULT_LANGUAGE";

/// Fallback output language when `DEFAULT_LANGUAGE` is unset
pub const FALLBACK_LANGUAGE: &str = "English (EN)";

/// Configuration for the flowdoc application
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Default output language for generated documentation
    pub default_language: String,
    /// Provider-specific configurations
    pub providers: HashMap<Provider, ProviderSettings>,
}

/// Provider-specific configuration structure
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ProviderSettings {
    /// API key for the provider; absent means the provider is unusable
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model override; falls back to the provider default
    pub model: Option<String>,
    /// Base-URL override; falls back to the provider default
    pub base_url: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// Reads, for each provider, the first present API-key variable from its
    /// accepted list plus optional model and base-URL overrides. Called per
    /// request; nothing is cached or written back.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut providers = HashMap::new();
        for provider in Provider::ALL {
            providers.insert(
                *provider,
                ProviderSettings {
                    api_key: resolve_api_key(*provider, &lookup),
                    model: lookup(provider.model_env()).filter(|v| !v.is_empty()),
                    base_url: lookup(provider.base_url_env()).filter(|v| !v.is_empty()),
                },
            );
        }

        let default_language = lookup(DEFAULT_LANGUAGE_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        log_debug!(
            "Configuration resolved: default_language={}, configured providers: {:?}",
            default_language,
            providers
                .iter()
                .filter(|(_, s)| s.api_key.is_some())
                .map(|(p, _)| p.name())
                .collect::<Vec<_>>()
        );

        Self {
            default_language,
            providers,
        }
    }

    /// Get the configuration for a specific provider
    pub fn provider_settings(&self, provider: Provider) -> ProviderSettings {
        self.providers.get(&provider).cloned().unwrap_or_default()
    }

    /// Effective model for a provider (override or default)
    pub fn effective_model(&self, provider: Provider) -> String {
        self.provider_settings(provider)
            .model
            .unwrap_or_else(|| provider.default_model().to_string())
    }

    /// Effective base URL for a provider (override or default), without a
    /// trailing slash
    pub fn effective_base_url(&self, provider: Provider) -> String {
        self.provider_settings(provider)
            .base_url
            .unwrap_or_else(|| provider.default_base_url().to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Report which providers have credentials configured
    pub fn available_providers(&self) -> Vec<(Provider, bool)> {
        Provider::ALL
            .iter()
            .map(|p| (*p, self.provider_settings(*p).api_key.is_some()))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: FALLBACK_LANGUAGE.to_string(),
            providers: HashMap::new(),
        }
    }
}

/// First non-empty API key from the provider's accepted env var list
fn resolve_api_key<F>(provider: Provider, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider
        .api_key_envs()
        .iter()
        .find_map(|key| lookup(key).filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn test_grok_key_fallback_order() {
        let config = Config::from_lookup(env(&[("GROK_API_KEY", "legacy")]));
        assert_eq!(
            config.provider_settings(Provider::Grok).api_key.as_deref(),
            Some("legacy")
        );

        let config = Config::from_lookup(env(&[
            ("XAI_API_KEY", "primary"),
            ("GROK_API_KEY", "legacy"),
        ]));
        assert_eq!(
            config.provider_settings(Provider::Grok).api_key.as_deref(),
            Some("primary")
        );
    }

    #[test]
    fn test_effective_values_fall_back_to_defaults() {
        let config = Config::from_lookup(env(&[]));
        assert_eq!(config.effective_model(Provider::OpenAi), "gpt-4o");
        assert_eq!(
            config.effective_base_url(Provider::DeepSeek),
            "https://api.deepseek.com"
        );
        assert_eq!(config.default_language, FALLBACK_LANGUAGE);
    }

    #[test]
    fn test_overrides_win_and_trailing_slash_is_trimmed() {
        let config = Config::from_lookup(env(&[
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("DEFAULT_LANGUAGE", "Español (ES)"),
        ]));
        assert_eq!(config.effective_model(Provider::OpenAi), "gpt-4o-mini");
        assert_eq!(
            config.effective_base_url(Provider::OpenAi),
            "http://localhost:8080/v1"
        );
        assert_eq!(config.default_language, "Español (ES)");
    }

    #[test]
    fn test_available_providers_reports_credentials() {
        let config = Config::from_lookup(env(&[("ANTHROPIC_API_KEY", "sk-test")]));
        let available: HashMap<_, _> = config.available_providers().into_iter().collect();
        assert_eq!(available.get(&Provider::Claude), Some(&true));
        assert_eq!(available.get(&Provider::OpenAi), Some(&false));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = Config::from_lookup(env(&[("OPENAI_API_KEY", "")]));
        assert!(config.provider_settings(Provider::OpenAi).api_key.is_none());
    }
}
