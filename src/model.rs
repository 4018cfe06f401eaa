use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// GitHub profile as resolved by the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    /// Display order, as returned by the backend
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub homepage: Option<String>,
    /// Absent when the backend could not produce a summary
    #[serde(default)]
    pub ai_summary: Option<String>,
}

/// Successful payload of the generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub success: bool,
    pub user: UserProfile,
    pub repositories: Vec<Repository>,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateRequest {
    /// Trimmed GitHub username
    pub username: String,
}

/// Optional strings from the backend count as present only when non-empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
