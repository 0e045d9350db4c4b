// Cache path utilities.
// Resolves the platform cache directory and the documentation cache file.

use std::path::PathBuf;

use directories::ProjectDirs;

/// File name of the persisted documentation set.
pub const PROPS_CACHE_FILE: &str = "cssPropsCache.json";

/// Get the base cache directory (~/.cache/wpdocs on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wpdocs").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the persisted documentation set.
pub fn props_cache_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(PROPS_CACHE_FILE))
}
