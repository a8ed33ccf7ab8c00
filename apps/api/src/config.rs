use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Loading runs before anything user-facing starts, so a missing or empty
/// remote-service credential halts the process with a specific message.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub catalog_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_api_key = require_env("OPENAI_API_KEY")?;
        if openai_api_key.trim().is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY is set but empty. Configure the OpenAI API key before starting."
            );
        }

        Ok(Config {
            openai_api_key,
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/jobs.csv".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
