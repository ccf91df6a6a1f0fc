use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// GitHub API configuration
    pub github: GithubConfig,
    /// LLM provider configuration
    pub llm: LlmConfig,
    /// Characters per README chunk
    pub chunk_size: usize,
    /// Maximum chunks returned by retrieval
    pub retrieval_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Base URL for the GitHub REST API
    pub base_url: String,
    /// Personal access token (raises the unauthenticated rate limit)
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Delay between consecutive README fetches in milliseconds.
    /// Mandatory: the sequential load relies on it to stay under the
    /// GitHub rate limit.
    pub pacing_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "gemini", "ollama" or "openai"
    pub provider: String,
    /// Base URL for the LLM API
    pub base_url: String,
    /// Model name for answer generation
    pub chat_model: String,
    /// API key (required for cloud providers)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9000".to_string(),
            github: GithubConfig::default(),
            llm: LlmConfig::default(),
            chunk_size: 500,
            retrieval_limit: 5,
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 30,
            pacing_delay_ms: 500,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            chat_model: "gemini-2.0-flash".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("REPO_ASSISTANT_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(val) = std::env::var("REPO_ASSISTANT_CHUNK_SIZE") {
            if let Ok(v) = val.parse() {
                if v > 0 {
                    config.chunk_size = v;
                }
            }
        }
        if let Ok(val) = std::env::var("REPO_ASSISTANT_RETRIEVAL_LIMIT") {
            if let Ok(v) = val.parse() {
                config.retrieval_limit = v;
            }
        }
        if let Ok(val) = std::env::var("REPO_ASSISTANT_PACING_DELAY_MS") {
            if let Ok(v) = val.parse() {
                config.github.pacing_delay_ms = v;
            }
        }

        if let Ok(url) = std::env::var("GITHUB_BASE_URL") {
            config.github.base_url = url;
        }
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            config.github.token = Some(token);
        }
        if let Ok(val) = std::env::var("GITHUB_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.github.timeout_secs = v;
            }
        }

        if let Ok(provider) = std::env::var("LLM_PROVIDER") {
            config.llm.provider = provider;
        }
        if let Ok(url) = std::env::var("LLM_BASE_URL") {
            config.llm.base_url = url;
        }
        if let Ok(model) = std::env::var("LLM_CHAT_MODEL") {
            config.llm.chat_model = model;
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            config.llm.api_key = Some(key);
        }
        if let Ok(val) = std::env::var("LLM_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.llm.timeout_secs = v;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.retrieval_limit, 5);
        assert_eq!(config.github.pacing_delay_ms, 500);
        assert_eq!(config.llm.timeout_secs, 60);
        assert_eq!(config.github.base_url, "https://api.github.com");
    }
}
