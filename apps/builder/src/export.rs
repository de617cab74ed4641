//! Export Adapter boundary.
//!
//! The paginating PDF renderer is an external collaborator consumed
//! through the `ExportAdapter` trait; this module carries the contract,
//! the artifact naming rule and a printable-HTML stand-in adapter used by
//! the binary. The adapter is held as `Arc<dyn ExportAdapter>` in
//! `AppState`, so swapping backends touches nothing but the wiring.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::render::VisualTree;

/// Failures at the export boundary. None are fatal: the session stays
/// interactive and the trigger control is restored either way.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export backend unavailable: {0}")]
    Unavailable(String),

    #[error("export rendering failed: {0}")]
    RenderFailed(String),
}

/// Options handed through to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub scale: f32,
    pub background: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            scale: 2.0,
            background: "#ffffff".to_string(),
        }
    }
}

/// The finished artifact plus the name it should be persisted under.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub bytes: Bytes,
    pub file_name: String,
}

/// External renderer contract: visual tree in, paginated document out.
#[async_trait]
pub trait ExportAdapter: Send + Sync {
    async fn export(&self, tree: &VisualTree, options: &ExportOptions)
        -> Result<Bytes, ExportError>;
}

/// Derives the download name from the person's full name: whitespace runs
/// become underscores, suffixed `_CV.pdf`; an empty name falls back to the
/// literal base "CV" (`CV_CV.pdf`).
pub fn export_file_name(full_name: &str) -> String {
    let base = if full_name.is_empty() { "CV" } else { full_name };
    let mut name = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                name.push('_');
                in_whitespace = true;
            }
        } else {
            name.push(ch);
            in_whitespace = false;
        }
    }
    format!("{name}_CV.pdf")
}

/// Writes an exported artifact under `dir` and returns the full path.
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &Bytes) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

// ────────────────────────────────────────────────────────────────────────────
// Printable-HTML stand-in adapter
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the rendered tree into a standalone printable page. Stands in for
/// the external PDF pipeline in the binary and in examples; the trait is
/// the real contract.
pub struct PrintableHtmlExporter;

#[async_trait]
impl ExportAdapter for PrintableHtmlExporter {
    async fn export(
        &self,
        tree: &VisualTree,
        options: &ExportOptions,
    ) -> Result<Bytes, ExportError> {
        let page = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <style>body {{ background: {}; margin: 0; }}</style>\n</head>\n\
             <body>\n{}\n</body>\n</html>\n",
            options.background,
            tree.to_html()
        );
        Ok(Bytes::from(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::el;

    #[test]
    fn test_file_name_replaces_whitespace_runs() {
        assert_eq!(export_file_name("Ada Lovelace"), "Ada_Lovelace_CV.pdf");
        assert_eq!(export_file_name("Ada  King\tLovelace"), "Ada_King_Lovelace_CV.pdf");
    }

    #[test]
    fn test_file_name_empty_defaults_to_cv() {
        assert_eq!(export_file_name(""), "CV_CV.pdf");
    }

    #[test]
    fn test_options_default() {
        let options = ExportOptions::default();
        assert_eq!(options.scale, 2.0);
        assert_eq!(options.background, "#ffffff");
    }

    #[tokio::test]
    async fn test_printable_exporter_embeds_tree_and_background() {
        let tree = VisualTree::new(el("div").class("cv-preview").text("hello"));
        let options = ExportOptions {
            background: "#fafafa".to_string(),
            ..ExportOptions::default()
        };
        let bytes = PrintableHtmlExporter.export(&tree, &options).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("background: #fafafa"));
        assert!(page.contains("<div class=\"cv-preview\">hello</div>"));
    }

    #[test]
    fn test_write_artifact_persists_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = Bytes::from_static(b"artifact");
        let path = write_artifact(dir.path(), "Ada_CV.pdf", &bytes).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"artifact");
    }
}
