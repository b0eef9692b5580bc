//! Filesystem resolution for classified requests.

use std::path::PathBuf;

use tracing::debug;

use crate::config::EditorConfig;
use crate::core::assets::{AssetPath, AssetRoot};
use crate::error::ServeError;

/// Resolve a classified asset path to an absolute file under the project
/// root. The caller streams the bytes with a content type inferred from the
/// extension.
///
/// `templates/` resolves under the dedicated template root, which may differ
/// from `<project_root>/templates` in the deployed layout.
pub fn resolve_asset(config: &EditorConfig, asset: &AssetPath) -> Result<PathBuf, ServeError> {
    let full = match asset {
        AssetPath::Dataset => config.cards_path(),
        AssetPath::Static {
            root: AssetRoot::Templates,
            rel,
        } => config.templates_root.join(rel),
        AssetPath::Static { root, rel } => config.project_root.join(root.dir_name()).join(rel),
    };
    if !full.is_file() {
        return Err(ServeError::NotFound);
    }
    debug!(path = %full.display(), "resolved asset");
    Ok(full)
}

/// Resolve a decoded image filename against the configured image root.
///
/// A non-absolute image root is a configuration error, reported distinctly
/// from "not found".
pub fn resolve_image(config: &EditorConfig, decoded: &str) -> Result<PathBuf, ServeError> {
    if !config.image_root.is_absolute() {
        return Err(ServeError::Configuration(format!(
            "image root {} is not an absolute path",
            config.image_root.display()
        )));
    }
    let full = config.image_root.join(decoded);
    if !full.is_file() {
        return Err(ServeError::NotFound);
    }
    debug!(path = %full.display(), "resolved image");
    Ok(full)
}
