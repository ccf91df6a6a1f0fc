use serde::{Deserialize, Serialize};

/// A fixed-size slice of a README, tagged with its source project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub project: String,
}

/// Full raw README text of a successfully loaded repository.
/// Retained as metadata; retrieval reads chunks, not this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub content: String,
}

/// One entry from `GET /users/{username}/repos`. Only the name is consumed;
/// the rest of the GitHub payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
}

/// Load request
#[derive(Debug, Clone, Deserialize)]
pub struct LoadRequest {
    pub username: String,
}

/// Load response
#[derive(Debug, Clone, Serialize)]
pub struct LoadResponse {
    pub message: String,
    pub projects_count: usize,
}

/// Question request
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub username: String,
}

/// Answer response
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_summary_ignores_extra_fields() {
        let json = r#"{"name":"Hello-World","id":1296269,"private":false,"fork":false}"#;
        let repo: RepoSummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "Hello-World");
    }

    #[test]
    fn test_load_response_serializes_count() {
        let resp = LoadResponse {
            message: "ok".to_string(),
            projects_count: 3,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["projects_count"], 3);
    }

    #[test]
    fn test_ask_request_deserializes() {
        let json = r#"{"question":"what does it do?","username":"octocat"}"#;
        let req: AskRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.question, "what does it do?");
        assert_eq!(req.username, "octocat");
    }
}
