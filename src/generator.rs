// SPDX-License-Identifier: MPL-2.0
//! Produces the full set of app icons into one directory.

use crate::config::IconTarget;
use crate::error::{Error, Result};
use crate::icon::IconRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const ICONS_DIR_NAME: &str = "icons";

/// Icons written by [`generate_icons`] when no other targets are given.
pub const DEFAULT_TARGETS: [IconTarget; 2] = [
    IconTarget::new(512, "icon-512x512.png"),
    IconTarget::new(192, "icon-192x192.png"),
];

/// The `icons` directory next to the crate sources.
///
/// The path is fixed at compile time, so a copied binary still writes into
/// the source tree it was built from rather than beside the executable.
pub fn default_icons_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(ICONS_DIR_NAME)
}

/// Renders every target into `dir`, in order, and returns the written paths.
///
/// `dir` is created (with its parents) before the first icon is drawn.
///
/// # Errors
///
/// Stops at the first target that cannot be rendered or written.
pub fn generate_icons(
    dir: &Path,
    targets: &[IconTarget],
    renderer: &IconRenderer,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| Error::io_at(dir, e))?;

    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        let path = dir.join(target.file_name);
        renderer.render(target.size, &path)?;
        written.push(path);
    }
    info!(count = written.len(), dir = %dir.display(), "icon set written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconStyle;
    use resvg::usvg::fontdb;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn bitmap_renderer() -> IconRenderer {
        IconRenderer::with_fonts(IconStyle::default(), Arc::new(fontdb::Database::new()))
    }

    #[test]
    fn default_targets_are_512_then_192() {
        assert_eq!(DEFAULT_TARGETS[0].size, 512);
        assert_eq!(DEFAULT_TARGETS[0].file_name, "icon-512x512.png");
        assert_eq!(DEFAULT_TARGETS[1].size, 192);
        assert_eq!(DEFAULT_TARGETS[1].file_name, "icon-192x192.png");
    }

    #[test]
    fn default_dir_is_named_icons() {
        assert_eq!(default_icons_dir().file_name().and_then(|n| n.to_str()), Some("icons"));
    }

    #[test]
    fn stops_at_first_invalid_target() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let targets = [
            IconTarget::new(16, "ok.png"),
            IconTarget::new(0, "broken.png"),
            IconTarget::new(16, "never.png"),
        ];
        let err = generate_icons(temp_dir.path(), &targets, &bitmap_renderer())
            .expect_err("zero size must fail");

        assert_eq!(err, Error::InvalidSize(0));
        assert!(temp_dir.path().join("ok.png").exists());
        assert!(!temp_dir.path().join("broken.png").exists());
        assert!(!temp_dir.path().join("never.png").exists());
    }

    #[test]
    fn empty_target_list_still_creates_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("icons");
        let written = generate_icons(&dir, &[], &bitmap_renderer()).expect("generate");
        assert!(written.is_empty());
        assert!(dir.is_dir());
    }
}
