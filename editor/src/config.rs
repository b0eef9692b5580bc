//! Immutable server configuration resolved once at startup.

use std::path::PathBuf;

/// Fixed filesystem roots and dataset name for the process lifetime.
///
/// Constructed once at startup and passed into the resolvers and the dataset
/// store; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Directory containing the editor UI, static assets and the dataset file.
    pub project_root: PathBuf,
    /// Directory containing card image binaries; independently configured and
    /// may lie outside the project root. Must be absolute to be servable.
    pub image_root: PathBuf,
    /// Dedicated root for server-rendered template fragments.
    pub templates_root: PathBuf,
    /// Dataset filename relative to the project root.
    pub cards_file: String,
}

impl EditorConfig {
    pub const DEFAULT_CARDS_FILE: &'static str = "cards.json";
    pub const IMAGES_DIR: &'static str = "card_images";
    pub const TEMPLATES_DIR: &'static str = "templates";

    /// Build a config with the default image root, template root and dataset
    /// filename, all colocated with the project.
    pub fn new(project_root: PathBuf) -> Self {
        let image_root = project_root.join(Self::IMAGES_DIR);
        let templates_root = project_root.join(Self::TEMPLATES_DIR);
        Self {
            project_root,
            image_root,
            templates_root,
            cards_file: Self::DEFAULT_CARDS_FILE.to_string(),
        }
    }

    /// Path to the dataset file.
    pub fn cards_path(&self) -> PathBuf {
        self.project_root.join(&self.cards_file)
    }

    /// Path to the editor main page.
    pub fn edit_page_path(&self) -> PathBuf {
        self.project_root.join("edit.html")
    }
}
