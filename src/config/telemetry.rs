use std::path::Path;

use tracing::{debug, info};

use super::ConfigDocument;

pub fn log_resolved(path: &Path, from_override: bool) {
    if from_override {
        info!(
            target: "supernova::config",
            path = %path.display(),
            "Using configuration file from --config override"
        );
    } else {
        debug!(
            target: "supernova::config",
            path = %path.display(),
            "Using most specific default configuration file"
        );
    }
}

pub fn log_loaded(document: &ConfigDocument) {
    info!(
        target: "supernova::config",
        path = %document.source_path().display(),
        environments = document.environments().count(),
        "Configuration file loaded successfully"
    );
}
