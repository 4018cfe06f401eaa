use color_eyre::eyre::{Result, WrapErr};
use opentelemetry::{global, metrics::Counter, KeyValue};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    config::Config,
    error::{detail_from_body, Failure},
    model::{GenerateRequest, GenerateResponse},
};

/// Upper bound on a generation request before it counts as timed out.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(600_000);

/// Anything that can resolve a username into a generated site payload.
pub trait Generate {
    fn generate(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<GenerateResponse, Failure>> + Send;
}

#[derive(Debug, Clone)]
pub struct GeneratorClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
    requests: Counter<u64>,
}

impl GeneratorClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config.generate_url.clone(), REQUEST_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("landgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to create HTTP client")?;
        let requests = global::meter("landgen")
            .u64_counter("generate_requests")
            .with_description("Generation requests sent to the backend, by outcome")
            .build();

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
            requests,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, username: &str) -> Result<GenerateResponse, Failure> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&GenerateRequest {
                username: username.to_string(),
            })
            .send()
            .await
            .map_err(|e| Failure::from_reqwest(&e))?;

        let status = response.status();
        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| Failure::from_reqwest(&e))?;
            return serde_json::from_str(&text).map_err(|e| {
                warn!("Malformed generate response for {username}: {e}");
                Failure::other(format!("Malformed response body: {e}"))
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(Failure::timeout()),
            Err(e) => {
                debug!("Failed to read failure body: {e}");
                String::new()
            }
        };
        warn!("Backend returned {status} for {username}");
        Err(Failure::status(status, detail_from_body(&body)))
    }
}

impl Generate for GeneratorClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn generate(&self, username: &str) -> Result<GenerateResponse, Failure> {
        let result = self.send(username).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(failure) if failure.timed_out => "timeout",
            Err(failure) if failure.status.is_some() => "http_error",
            Err(_) => "transport_error",
        };
        self.requests.add(1, &[KeyValue::new("outcome", outcome)]);
        debug!("Generate request finished: {outcome}");

        result
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::{routing::post, Router};
    use std::net::SocketAddr;

    /// Serves `router` on an ephemeral local port and returns its address.
    pub async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    /// Stand-in backend mounted at `/api/generate`.
    pub async fn spawn_backend<H, T>(handler: H) -> String
    where
        H: axum::handler::Handler<T, ()>,
        T: 'static,
    {
        let addr = spawn(Router::new().route("/api/generate", post(handler))).await;
        format!("http://{addr}/api/generate")
    }
}
