//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub request_timeout: Duration,
    /// OTLP collector endpoint; telemetry export is off when unset.
    pub otlp_endpoint: Option<String>,
    pub log_format: LogFormat,
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?;

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string());

        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://db/payments.db?mode=rwc".to_string());

        let timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "15".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a number of seconds: {}", e))?;

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be `pretty` or `json`, got `{}`", other),
        };

        Ok(Self {
            port,
            bind_address,
            database_url,
            request_timeout: Duration::from_secs(timeout_secs),
            otlp_endpoint,
            log_format,
        })
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
