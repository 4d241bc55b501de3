use flowdoc::config::Config;
use flowdoc::llm::{AnalysisRequest, AnalyzeError, analyze};
use flowdoc::providers::Provider;
use mockito::Matcher;
use serde_json::json;

/// Config pointing a provider at a mock server, with a test credential
fn config_for(provider: Provider, server_url: &str) -> Config {
    let key_env = provider.api_key_envs()[0];
    let url_env = provider.base_url_env();
    let vars = vec![
        (key_env.to_string(), "test-key".to_string()),
        (url_env.to_string(), server_url.to_string()),
    ];
    Config::from_lookup(move |key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

fn request_for(provider: Provider) -> AnalysisRequest {
    AnalysisRequest {
        provider,
        document: r#"{"nodes":[],"connections":{}}"#.to_string(),
        details: None,
        language: None,
        custom_prompt: None,
    }
}

#[tokio::test]
async fn openai_uses_bearer_auth_and_chat_completions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({"model": "gpt-4o"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"choices": [{"message": {"content": "# Workflow Docs"}}]}).to_string(),
        )
        .create_async()
        .await;

    let config = config_for(Provider::OpenAi, &server.url());
    let result = analyze(&config, &request_for(Provider::OpenAi))
        .await
        .expect("analysis should succeed");

    assert_eq!(result.markdown, "# Workflow Docs");
    mock.assert_async().await;
}

#[tokio::test]
async fn deepseek_payload_disables_streaming() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "deepseek-chat",
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
        .create_async()
        .await;

    let config = config_for(Provider::DeepSeek, &server.url());
    analyze(&config, &request_for(Provider::DeepSeek))
        .await
        .expect("analysis should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn claude_uses_anthropic_headers_and_messages_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .match_header("x-api-key", "test-key")
        .match_header("anthropic-version", "2023-06-01")
        .match_body(Matcher::PartialJson(json!({
            "model": "claude-3-5-sonnet-20241022",
            "max_tokens": 4096
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"content": [{"text": "# Title\nBody"}]}).to_string())
        .create_async()
        .await;

    let config = config_for(Provider::Claude, &server.url());
    let result = analyze(&config, &request_for(Provider::Claude))
        .await
        .expect("analysis should succeed");

    assert_eq!(result.markdown, "# Title\nBody");
    mock.assert_async().await;
}

#[tokio::test]
async fn claude_concatenates_system_prompt_into_user_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .match_body(Matcher::Regex(
            "n8n Solutions Architect(?s:.)*Workflow JSON".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"content": [{"text": "ok"}]}).to_string())
        .create_async()
        .await;

    let config = config_for(Provider::Claude, &server.url());
    analyze(&config, &request_for(Provider::Claude))
        .await
        .expect("analysis should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn grok_and_gemini_speak_chat_completions() {
    for provider in [Provider::Grok, Provider::Gemini] {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
            .create_async()
            .await;

        let config = config_for(provider, &server.url());
        analyze(&config, &request_for(provider))
            .await
            .expect("analysis should succeed");

        mock.assert_async().await;
    }
}

#[tokio::test]
async fn missing_api_key_fails_without_any_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    // Base URL points at the mock, but no key is configured
    let url_env = Provider::OpenAi.base_url_env().to_string();
    let url = server.url();
    let config = Config::from_lookup(move |key| (key == url_env).then(|| url.clone()));

    let err = analyze(&config, &request_for(Provider::OpenAi))
        .await
        .expect_err("must fail without a key");

    assert!(matches!(err, AnalyzeError::MissingApiKey(Provider::OpenAi)));
    assert_eq!(err.to_string(), "openai API key not configured");
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_error_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let config = config_for(Provider::OpenAi, &server.url());
    let err = analyze(&config, &request_for(Provider::OpenAi))
        .await
        .expect_err("must surface the upstream failure");

    match err {
        AnalyzeError::Api {
            provider,
            status,
            body,
        } => {
            assert_eq!(provider, Provider::OpenAi);
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_response_is_reported_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(1)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": []}).to_string())
        .create_async()
        .await;

    let config = config_for(Provider::OpenAi, &server.url());
    let err = analyze(&config, &request_for(Provider::OpenAi))
        .await
        .expect_err("must fail on a malformed body");

    assert!(matches!(err, AnalyzeError::MalformedResponse { .. }));
    // Exactly one request: no retry on failure
    mock.assert_async().await;
}

#[tokio::test]
async fn custom_prompt_replaces_catalog_prompt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                {"role": "system", "content": "You are a terse reviewer."},
                {
                    "role": "user",
                    "content": "Workflow Details: Not provided\n\nTarget Language: English (EN)\n\nIMPORTANT: The entire analysis output must be in English (EN).\n\nWorkflow JSON:\n```json\n{}\n```"
                }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
        .create_async()
        .await;

    let config = config_for(Provider::OpenAi, &server.url());
    let request = AnalysisRequest {
        provider: Provider::OpenAi,
        document: "{}".to_string(),
        details: None,
        language: None,
        custom_prompt: Some("You are a terse reviewer.".to_string()),
    };
    analyze(&config, &request)
        .await
        .expect("analysis should succeed");

    mock.assert_async().await;
}

#[test]
fn unknown_provider_is_rejected_before_dispatch() {
    let err = "mistral".parse::<Provider>().expect_err("must reject");
    assert!(err.to_string().contains("Unknown provider: mistral"));
}
