use tracing::{info, instrument, warn};

use crate::{client::Generate, error::GenerateError, model::GenerateResponse};

/// Where the page currently is in the generate workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Waiting for input, possibly showing the error from the last attempt.
    Idle { error: Option<String> },
    /// A request for `username` is in flight.
    Loading { username: String },
    Success { data: Box<GenerateResponse> },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&GenerateResponse> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }
}

/// Owns the request lifecycle and is the only writer of [`ViewState`].
#[derive(Debug)]
pub struct Orchestrator<G> {
    generator: G,
    state: ViewState,
}

impl<G: Generate> Orchestrator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Moves from idle to loading. Returns the trimmed username to request, or
    /// `None` when the submission is ignored (blank input, or not idle).
    pub fn begin(&mut self, username: &str) -> Option<String> {
        if !matches!(self.state, ViewState::Idle { .. }) {
            warn!("Ignoring submission while not idle");
            return None;
        }
        let username = username.trim();
        if username.is_empty() {
            return None;
        }

        self.state = ViewState::Loading {
            username: username.to_string(),
        };
        Some(username.to_string())
    }

    /// Settles an in-flight request. Does nothing unless loading.
    pub fn finish(&mut self, outcome: Result<GenerateResponse, GenerateError>) {
        let ViewState::Loading { username } = &self.state else {
            warn!("Dropping a result that arrived while not loading");
            return;
        };

        self.state = match outcome {
            Ok(data) => {
                info!(
                    "Generated preview for {username} with {} repositories",
                    data.repositories.len()
                );
                ViewState::Success {
                    data: Box::new(data),
                }
            }
            Err(err) => {
                warn!(kind = err.kind(), ?err, "Generation failed for {username}");
                ViewState::Idle {
                    error: Some(err.to_string()),
                }
            }
        };
    }

    /// Submits `username` and waits for the outcome. Returns whether a request
    /// was issued.
    #[instrument(skip(self))]
    pub async fn submit(&mut self, username: &str) -> bool {
        if self.begin(username).is_none() {
            return false;
        }
        self.settle().await
    }

    /// Issues the request for the username being loaded and records its
    /// outcome. Returns `false` without a request unless loading.
    pub async fn settle(&mut self) -> bool {
        let ViewState::Loading { username } = &self.state else {
            return false;
        };
        let username = username.clone();

        let outcome = self
            .generator
            .generate(&username)
            .await
            .map_err(|failure| GenerateError::from_failure(failure, &username));
        self.finish(outcome);
        true
    }

    /// Clears a displayed result. A no-op unless a result is showing.
    pub fn reset(&mut self) {
        if matches!(self.state, ViewState::Success { .. }) {
            self.state = ViewState::default();
        }
    }
}
