use reqwest::StatusCode;
use thiserror::Error;

/// Normalized description of a failed generation attempt.
///
/// Built by the client from whatever went wrong on the wire, then mapped to a
/// [`GenerateError`] by [`GenerateError::from_failure`]. Keeping the two apart
/// lets the message mapping be exercised without a network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    /// Status of the backend response, if one arrived
    pub status: Option<StatusCode>,
    /// Whether the client-side deadline elapsed
    pub timed_out: bool,
    /// `detail` string from the failure body
    pub detail: Option<String>,
    /// Diagnostic text for logs, never shown to the user
    pub cause: Option<String>,
}

impl Failure {
    pub fn status(status: StatusCode, detail: Option<String>) -> Self {
        Self {
            status: Some(status),
            detail,
            ..Self::default()
        }
    }

    pub fn timeout() -> Self {
        Self {
            timed_out: true,
            ..Self::default()
        }
    }

    pub fn other(cause: impl Into<String>) -> Self {
        Self {
            cause: Some(cause.into()),
            ..Self::default()
        }
    }

    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::timeout();
        }
        Self {
            status: err.status(),
            cause: Some(err.to_string()),
            ..Self::default()
        }
    }
}

/// User-facing failure taxonomy. `Display` is the exact message shown in the
/// form's error slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("GitHub user \"{username}\" not found. Please check the username and try again.")]
    NotFound { username: String },

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("{0}")]
    BackendReported(String),

    #[error("Failed to generate website. Please try again later.")]
    Unknown { cause: Option<String> },
}

impl GenerateError {
    /// First match wins: 404, then timeout, then a backend `detail`, then the
    /// generic message.
    pub fn from_failure(failure: Failure, username: &str) -> Self {
        if failure.status == Some(StatusCode::NOT_FOUND) {
            return Self::NotFound {
                username: username.to_string(),
            };
        }
        if failure.timed_out {
            return Self::Timeout;
        }
        match failure.detail.filter(|detail| !detail.is_empty()) {
            Some(detail) => Self::BackendReported(detail),
            None => Self::Unknown {
                cause: failure
                    .cause
                    .or_else(|| failure.status.map(|s| format!("unexpected status {s}"))),
            },
        }
    }

    /// Short label used for log fields and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Timeout => "timeout",
            Self::BackendReported(_) => "backend_reported",
            Self::Unknown { .. } => "unknown",
        }
    }
}

/// Pulls a string `detail` out of a failure body, if there is one.
pub fn detail_from_body(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("detail")?.as_str().map(String::from)
}
