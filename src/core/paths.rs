//! Platform config directory.

use std::path::PathBuf;

use crate::core::app;

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Override config dir for tests via env var. Set `TEST_CONFIG_DIR` before key operations.
#[cfg(test)]
fn test_config_dir_override() -> Option<PathBuf> {
    std::env::var("TEST_CONFIG_DIR").ok().map(PathBuf::from)
}

/// Config directory (~/.config/quizgen/).
/// In tests, set `TEST_CONFIG_DIR` env var to override.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(test)]
    if let Some(p) = test_config_dir_override() {
        return Some(p);
    }
    project_dirs().map(|d| d.config_dir().to_path_buf())
}
