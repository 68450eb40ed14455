use std::fs;
use std::path::Path;

use client_logging::{client_error, client_info, client_warn};
use serde::{Deserialize, Serialize};
use translator_engine::AtomicFileWriter;

const STATE_FILENAME: &str = ".translator_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    last_location: Option<String>,
}

/// Fragment the previous session ended on, if any was saved.
pub(crate) fn load_last_location(dir: &Path) -> Option<String> {
    let path = dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            client_warn!("Failed to read persisted state from {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str::<PersistedState>(&content) {
        Ok(state) => {
            client_info!("Loaded persisted location from {:?}", path);
            state.last_location.filter(|fragment| !fragment.is_empty())
        }
        Err(err) => {
            client_warn!("Failed to parse persisted state from {:?}: {}", path, err);
            None
        }
    }
}

pub(crate) fn save_last_location(dir: &Path, fragment: &str) {
    let state = PersistedState {
        last_location: Some(fragment.to_string()),
    };
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(dir.to_path_buf());
    if let Err(err) = writer.write(STATE_FILENAME, content.as_bytes()) {
        client_error!("Failed to write persisted state to {:?}: {}", dir, err);
    }
}
