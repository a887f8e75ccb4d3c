//! Image reference resolution

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Where a hotspot image can be found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum ImageHandle {
    /// Existing file on disk
    Local(PathBuf),
    /// Absolute URL, fetched by the display
    Remote(String),
    /// Resolved path does not exist
    Missing(PathBuf),
    /// Record has no image reference
    Unspecified,
}

impl ImageHandle {
    pub fn is_available(&self) -> bool {
        matches!(self, ImageHandle::Local(_) | ImageHandle::Remote(_))
    }
}

/// Resolves relative image references against an image root
#[derive(Debug, Clone)]
pub struct ImageResolver {
    image_root: PathBuf,
}

impl ImageResolver {
    pub fn new(image_root: impl Into<PathBuf>) -> Self {
        Self {
            image_root: image_root.into(),
        }
    }

    pub fn image_root(&self) -> &Path {
        &self.image_root
    }

    pub fn resolve(&self, reference: &str) -> ImageHandle {
        let reference = reference.trim();
        if reference.is_empty() {
            return ImageHandle::Unspecified;
        }

        if is_url(reference) {
            return ImageHandle::Remote(reference.to_string());
        }

        let path = Path::new(reference);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.image_root.join(path)
        };

        if path.is_file() {
            ImageHandle::Local(path)
        } else {
            warn!("Image not found: {}", path.display());
            ImageHandle::Missing(path)
        }
    }
}

fn is_url(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
