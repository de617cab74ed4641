use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::models::{Template, Theme};

/// Application configuration loaded from environment variables.
/// Everything is defaulted; a `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional path to a saved form snapshot (JSON). Empty form otherwise.
    pub form_snapshot: Option<PathBuf>,
    pub template: Template,
    pub theme: Theme,
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let template = match std::env::var("CV_TEMPLATE") {
            Ok(value) => Template::from_str(&value)
                .map_err(anyhow::Error::msg)
                .context("CV_TEMPLATE must be one of modern, classic, creative")?,
            Err(_) => Template::default(),
        };

        let defaults = Theme::default();
        let theme = Theme {
            primary_color: env_or("PRIMARY_COLOR", &defaults.primary_color),
            accent_color: env_or("ACCENT_COLOR", &defaults.accent_color),
            font_family: env_or("FONT_FAMILY", &defaults.font_family),
        };

        Ok(Config {
            form_snapshot: std::env::var("FORM_SNAPSHOT").ok().map(PathBuf::from),
            template,
            theme,
            output_dir: PathBuf::from(env_or("OUTPUT_DIR", "out")),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
