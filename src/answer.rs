//! Answer composition: prompt building, the LLM call, and the fallback.
//!
//! The caller of `/ask_assistant` never sees a raw LLM failure. Anything
//! that goes wrong past retrieval degrades to the fixed pointer-to-repository
//! answer.

use std::fmt::Write;

use crate::config::LlmConfig;
use crate::llm;
use crate::models::Chunk;

/// Returned when retrieval finds nothing or the LLM yields nothing usable.
pub fn fallback_answer(username: &str) -> String {
    format!(
        "More information: visit the author's ({username}) repository host directly: \
         https://github.com/{username}"
    )
}

/// Build the single-turn prompt: role instructions, the retrieved excerpts,
/// then the literal question.
pub fn build_prompt(question: &str, chunks: &[Chunk]) -> String {
    let mut context = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            context.push_str("\n\n");
        }
        write!(context, "Project: {}\nExcerpt: {}", chunk.project, chunk.content).unwrap();
    }

    format!(
        "You are a professional interview assistant who answers questions about a \
         candidate's GitHub projects.\n\
         Answer concisely and accurately, strictly from the project excerpts below.\n\
         If the excerpts cannot answer the question, say so honestly.\n\n\
         GitHub project excerpts:\n\
         ---\n\
         {context}\n\
         ---\n\n\
         Question: {question}"
    )
}

/// Produce the final answer for `question` given the retrieved `chunks`.
///
/// Empty retrieval short-circuits to the fallback without touching the LLM.
/// Otherwise the LLM is called once; any [`llm::LlmError`] kind is logged
/// and converted to the same fallback.
pub async fn compose(
    client: &reqwest::Client,
    config: &LlmConfig,
    question: &str,
    chunks: &[Chunk],
    username: &str,
) -> String {
    if chunks.is_empty() {
        return fallback_answer(username);
    }

    let prompt = build_prompt(question, chunks);
    match llm::generate(client, config, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("LLM call failed, returning fallback answer: {e}");
            fallback_answer(username)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;

    fn chunk(content: &str, project: &str) -> Chunk {
        Chunk {
            content: content.to_string(),
            project: project.to_string(),
        }
    }

    #[test]
    fn test_fallback_names_the_user_and_host() {
        let answer = fallback_answer("octocat");
        assert_eq!(
            answer,
            "More information: visit the author's (octocat) repository host directly: \
             https://github.com/octocat"
        );
    }

    #[test]
    fn test_prompt_formats_each_chunk() {
        let chunks = vec![
            chunk("Hello World", "Hello-World"),
            chunk("a web server", "my-server"),
        ];
        let prompt = build_prompt("what is it?", &chunks);
        assert!(prompt.contains("Project: Hello-World\nExcerpt: Hello World"));
        assert!(prompt.contains("Project: my-server\nExcerpt: a web server"));
    }

    #[test]
    fn test_prompt_separates_chunks_with_blank_line() {
        let chunks = vec![chunk("one", "a"), chunk("two", "b")];
        let prompt = build_prompt("q", &chunks);
        assert!(prompt.contains("Excerpt: one\n\nProject: b"));
    }

    #[test]
    fn test_prompt_ends_with_the_literal_question() {
        let prompt = build_prompt("does it scale?", &[chunk("text", "p")]);
        assert!(prompt.ends_with("Question: does it scale?"));
    }

    #[test]
    fn test_prompt_carries_role_instructions() {
        let prompt = build_prompt("q", &[chunk("text", "p")]);
        assert!(prompt.contains("interview assistant"));
        assert!(prompt.contains("say so honestly"));
    }

    #[tokio::test]
    async fn test_empty_retrieval_short_circuits_without_llm() {
        // base_url points nowhere routable; if compose tried the LLM this
        // would hang or error instead of returning instantly.
        let config = LlmConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..LlmConfig::default()
        };
        let client = reqwest::Client::new();
        let answer = compose(&client, &config, "hello", &[], "octocat").await;
        assert_eq!(answer, fallback_answer("octocat"));
    }

    #[tokio::test]
    async fn test_llm_failure_degrades_to_fallback() {
        // Gemini provider with no API key: generate fails before any
        // network traffic, and compose must swallow it.
        let config = LlmConfig {
            provider: "gemini".to_string(),
            api_key: None,
            ..LlmConfig::default()
        };
        let client = reqwest::Client::new();
        let chunks = vec![chunk("Hello World", "Hello-World")];
        let answer = compose(&client, &config, "hello", &chunks, "octocat").await;
        assert_eq!(answer, fallback_answer("octocat"));
    }
}
