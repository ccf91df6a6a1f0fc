use thiserror::Error;

/// Failure modes of a whole load operation.
///
/// `RateLimited` is fatal wherever it occurs; per-repository upstream
/// errors are swallowed by the loader and never reach this type.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("GitHub user '{0}' not found or has no public repositories")]
    UserNotFound(String),

    #[error("GitHub API rate limit exhausted")]
    RateLimited,

    #[error("GitHub API error: {message}")]
    Upstream {
        /// Upstream HTTP status, if the request got that far.
        status: Option<u16>,
        message: String,
    },

    #[error("no readable README content found in any repository")]
    NoContent,
}

impl LoadError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}

/// Failure modes of a question request. LLM failures are not here:
/// they are recovered into the fallback answer before the handler sees them.
#[derive(Debug, Error, PartialEq)]
pub enum AskError {
    #[error("project data has not been loaded yet; load a GitHub user first")]
    StoreEmpty,

    #[error("question must not be empty")]
    EmptyQuestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages_name_the_user() {
        let err = LoadError::UserNotFound("octocat".to_string());
        assert!(err.to_string().contains("octocat"));
    }

    #[test]
    fn test_upstream_constructor_keeps_status() {
        let err = LoadError::upstream(Some(502), "bad gateway");
        match err {
            LoadError::Upstream { status, .. } => assert_eq!(status, Some(502)),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
