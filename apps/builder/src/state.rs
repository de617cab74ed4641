use std::sync::Arc;

use crate::config::Config;
use crate::controller::ChangeController;
use crate::export::ExportAdapter;

/// Application state wired up at startup.
pub struct AppState {
    /// Sole owner of the document model and the displayed visual tree.
    pub controller: ChangeController,
    /// Pluggable export backend. Default: `PrintableHtmlExporter`; the real
    /// paginating PDF renderer plugs in here.
    pub exporter: Arc<dyn ExportAdapter>,
    pub config: Config,
}
