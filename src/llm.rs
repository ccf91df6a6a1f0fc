//! LLM collaborators.
//!
//! One non-streaming call per question: prompt in, answer text out.
//! Failures are structured [`LlmError`] kinds so the answer composer can
//! branch on them instead of pattern-matching human-readable marker
//! strings in the response body.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::LlmConfig;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API key is not configured")]
    MissingApiKey,

    #[error("LLM service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("failed to reach LLM service: {0}")]
    Connect(String),

    #[error("LLM returned no usable completion")]
    EmptyCompletion,

    #[error("unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
}

/// Generate an answer for `prompt`. Single call, no retry, no streaming.
pub async fn generate(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String, LlmError> {
    match config.provider.as_str() {
        "gemini" => call_gemini(client, config, prompt).await,
        "ollama" => call_ollama(client, config, prompt).await,
        "openai" => call_openai(client, config, prompt).await,
        other => Err(LlmError::UnsupportedProvider(other.to_string())),
    }
}

fn timeout(config: &LlmConfig) -> Duration {
    Duration::from_secs(config.timeout_secs)
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let message = resp.text().await.unwrap_or_default();
    Err(LlmError::Service { status, message })
}

// ─── Gemini ──────────────────────────────────────────────

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

async fn call_gemini(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String, LlmError> {
    let api_key = config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={api_key}",
        config.base_url, config.chat_model
    );

    let req = GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: prompt.to_string(),
            }],
        }],
    };

    let resp = client
        .post(&url)
        .timeout(timeout(config))
        .json(&req)
        .send()
        .await
        .map_err(|e| LlmError::Connect(e.to_string()))?;
    let resp = check_status(resp).await?;

    let body: GeminiResponse = resp
        .json()
        .await
        .map_err(|e| LlmError::Connect(format!("malformed Gemini response: {e}")))?;

    extract_gemini_text(body)
}

fn extract_gemini_text(body: GeminiResponse) -> Result<String, LlmError> {
    body.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or(LlmError::EmptyCompletion)
}

// ─── Ollama ──────────────────────────────────────────────

#[derive(Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OllamaChatResponse {
    message: Message,
}

async fn call_ollama(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String, LlmError> {
    let url = format!("{}/api/chat", config.base_url);

    let req = OllamaChatRequest {
        model: config.chat_model.clone(),
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        stream: false,
    };

    let resp = client
        .post(&url)
        .timeout(timeout(config))
        .json(&req)
        .send()
        .await
        .map_err(|e| LlmError::Connect(e.to_string()))?;
    let resp = check_status(resp).await?;

    let body: OllamaChatResponse = resp
        .json()
        .await
        .map_err(|e| LlmError::Connect(format!("malformed Ollama response: {e}")))?;

    if body.message.content.trim().is_empty() {
        return Err(LlmError::EmptyCompletion);
    }
    Ok(body.message.content)
}

// ─── OpenAI-compatible ───────────────────────────────────

#[derive(Serialize)]
struct OpenAiChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: Message,
}

async fn call_openai(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String, LlmError> {
    let url = format!("{}/v1/chat/completions", config.base_url);
    let api_key = config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

    let req = OpenAiChatRequest {
        model: config.chat_model.clone(),
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: 0.3,
    };

    let resp = client
        .post(&url)
        .timeout(timeout(config))
        .header("Authorization", format!("Bearer {api_key}"))
        .json(&req)
        .send()
        .await
        .map_err(|e| LlmError::Connect(e.to_string()))?;
    let resp = check_status(resp).await?;

    let body: OpenAiChatResponse = resp
        .json()
        .await
        .map_err(|e| LlmError::Connect(format!("malformed OpenAI response: {e}")))?;

    body.choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .filter(|t| !t.trim().is_empty())
        .ok_or(LlmError::EmptyCompletion)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── Gemini response parsing ─────────────────────────

    #[test]
    fn test_gemini_extracts_first_candidate_text() {
        let body: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"An answer."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_gemini_text(body).unwrap(), "An answer.");
    }

    #[test]
    fn test_gemini_no_candidates_is_empty_completion() {
        let body: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            extract_gemini_text(body),
            Err(LlmError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_gemini_missing_candidates_key() {
        let body: GeminiResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            extract_gemini_text(body),
            Err(LlmError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_gemini_candidate_without_parts() {
        let body: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(
            extract_gemini_text(body),
            Err(LlmError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_gemini_blank_text_is_empty_completion() {
        let body: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            extract_gemini_text(body),
            Err(LlmError::EmptyCompletion)
        ));
    }

    // ─── Provider dispatch ───────────────────────────────

    #[tokio::test]
    async fn test_unknown_provider_rejected_without_network() {
        let config = LlmConfig {
            provider: "mystery".to_string(),
            ..LlmConfig::default()
        };
        let client = reqwest::Client::new();
        let err = generate(&client, &config, "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::UnsupportedProvider(p) if p == "mystery"));
    }

    #[tokio::test]
    async fn test_gemini_without_api_key_fails_before_request() {
        let config = LlmConfig {
            provider: "gemini".to_string(),
            api_key: None,
            ..LlmConfig::default()
        };
        let client = reqwest::Client::new();
        let err = generate(&client, &config, "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
