//! Classification of static-asset request paths against the allow-list.

use crate::error::ServeError;

/// Closed set of project sub-directories servable over HTTP.
///
/// Each variant maps to exactly one base directory, so the traversal-safety
/// argument holds per variant instead of per string prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRoot {
    Styles,
    Scripts,
    Templates,
    CardImages,
    Fonts,
}

impl AssetRoot {
    /// Directory name as it appears in request paths.
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetRoot::Styles => "css",
            AssetRoot::Scripts => "js",
            AssetRoot::Templates => "templates",
            AssetRoot::CardImages => "card_images",
            AssetRoot::Fonts => "fonts",
        }
    }

    fn from_dir_name(name: &str) -> Option<Self> {
        match name {
            "css" => Some(AssetRoot::Styles),
            "js" => Some(AssetRoot::Scripts),
            "templates" => Some(AssetRoot::Templates),
            "card_images" => Some(AssetRoot::CardImages),
            "fonts" => Some(AssetRoot::Fonts),
            _ => None,
        }
    }
}

/// A request path that passed classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPath {
    /// The dataset document itself.
    Dataset,
    /// A file below one of the allowed sub-directories.
    Static { root: AssetRoot, rel: String },
}

impl AssetPath {
    /// Classify a URL-decoded relative request path.
    ///
    /// Every rejection is [`ServeError::NotFound`]: the caller must not be
    /// able to distinguish "disallowed" from "absent". The traversal screen
    /// runs before the allow-list check, so a path like
    /// `css/../../etc/passwd` is rejected even though its prefix is allowed.
    pub fn parse(path: &str, dataset_filename: &str) -> Result<Self, ServeError> {
        if !is_clean_relative(path) {
            return Err(ServeError::NotFound);
        }
        if path == dataset_filename {
            return Ok(AssetPath::Dataset);
        }
        let Some((dir, rest)) = path.split_once('/') else {
            return Err(ServeError::NotFound);
        };
        let Some(root) = AssetRoot::from_dir_name(dir) else {
            return Err(ServeError::NotFound);
        };
        if rest.is_empty() {
            return Err(ServeError::NotFound);
        }
        Ok(AssetPath::Static {
            root,
            rel: rest.to_string(),
        })
    }
}

/// Syntactic screen, independent of the allow-list: the path must be
/// relative, `/`-delimited, and free of empty, `.` and `..` segments.
fn is_clean_relative(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.contains('\\') {
        return false;
    }
    path.split('/')
        .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}
