//! Shared application state for the editor server.

use editor::config::EditorConfig;

/// Shared state accessible from all request handlers.
///
/// Holds only the immutable configuration; there is no other shared mutable
/// state in the process.
#[derive(Clone)]
pub struct AppState {
    pub config: EditorConfig,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }
}
