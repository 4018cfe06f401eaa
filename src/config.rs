use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use std::env;
use std::net::IpAddr;

/// Path of the generation endpoint on the backend.
const GENERATE_PATH: &str = "/api/generate";
/// Backend address while developing against a locally running API.
const DEVELOPMENT_BACKEND: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Development,
    Production,
}

impl Deployment {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => bail!("APP_ENV must be `development` or `production`, got `{other}`"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub deployment: Deployment,
    /// Absolute URL the generation request is POSTed to
    pub generate_url: String,
    /// Export logs, traces and metrics over OTLP
    pub otlp_enabled: bool,
}

impl Config {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host: IpAddr = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .wrap_err("Invalid host IP address")?;
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .wrap_err_with(|| format!("Invalid PORT value: {port}"))?,
            None => 3000,
        };
        let deployment = match lookup("APP_ENV") {
            Some(value) => Deployment::parse(&value)?,
            None => Deployment::Development,
        };

        let generate_url = match (lookup("GENERATE_URL"), deployment) {
            (Some(url), _) => url,
            (None, Deployment::Development) => format!("{DEVELOPMENT_BACKEND}{GENERATE_PATH}"),
            (None, Deployment::Production) => {
                let site = lookup("SITE_URL").ok_or_else(|| {
                    eyre!("SITE_URL environment variable must be set in production")
                })?;
                format!("{}{GENERATE_PATH}", site.trim_end_matches('/'))
            }
        };
        reqwest::Url::parse(&generate_url)
            .wrap_err_with(|| format!("Invalid generation endpoint: {generate_url}"))?;

        Ok(Self {
            host,
            port,
            deployment,
            generate_url,
            otlp_enabled: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").is_some_and(|v| !v.is_empty()),
        })
    }
}
