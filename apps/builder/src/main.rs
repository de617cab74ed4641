mod config;
mod controller;
mod errors;
mod export;
mod form;
mod models;
mod render;
mod reorder;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::controller::ChangeController;
use crate::export::{write_artifact, ExportOptions, PrintableHtmlExporter};
use crate::form::FormSnapshot;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV builder v{}", env!("CARGO_PKG_VERSION"));

    // Load the form snapshot, or start from an empty form.
    let form = match &config.form_snapshot {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading form snapshot {}", path.display()))?;
            let form: FormSnapshot = serde_json::from_str(&raw)
                .with_context(|| format!("parsing form snapshot {}", path.display()))?;
            info!("Loaded form snapshot from {}", path.display());
            form
        }
        None => FormSnapshot::new(),
    };

    let controller = ChangeController::with_form(form, config.template, config.theme.clone());
    info!("Initial preview rendered (template: {})", config.template.as_str());

    let mut state = AppState {
        controller,
        exporter: Arc::new(PrintableHtmlExporter),
        config,
    };

    // Persist the preview markup.
    let preview_path = state.config.output_dir.join("preview.html");
    std::fs::create_dir_all(&state.config.output_dir)?;
    std::fs::write(&preview_path, state.controller.preview().to_html())?;
    info!("Preview written to {}", preview_path.display());

    // Run the export boundary. A failure leaves the session state intact,
    // so it is reported rather than propagated.
    let exporter = Arc::clone(&state.exporter);
    match state
        .controller
        .export_document(exporter.as_ref(), &ExportOptions::default())
        .await
    {
        Ok(exported) => {
            let path = write_artifact(&state.config.output_dir, &exported.file_name, &exported.bytes)?;
            info!("Exported document written to {}", path.display());
        }
        Err(err) => {
            error!("Export failed: {err}");
        }
    }

    Ok(())
}
