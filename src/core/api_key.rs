//! Stored OpenRouter key, used when OPENROUTER_API_KEY is not in the environment.
//!
//! Kept in `<config dir>/api-key`, mode 0o600 on Unix.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::core::paths;

#[derive(Debug, thiserror::Error)]
pub enum ApiKeyError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("API key is empty")]
    Empty,
    #[error("Failed to store API key: {0}")]
    Io(#[from] io::Error),
}

pub fn credentials_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join("api-key"))
}

/// Stored key, or `None` if the file is absent, blank, or unreadable.
pub fn load_api_key() -> Option<String> {
    let content = fs::read_to_string(credentials_path()?).ok()?;
    let key = content.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// Write the key (trimmed) to the config directory, creating it if needed.
pub fn store_api_key(key: &str) -> Result<PathBuf, ApiKeyError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ApiKeyError::Empty);
    }
    let path = credentials_path().ok_or(ApiKeyError::NoConfigDir)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut file = fs::File::create(&path)?;
    writeln!(file, "{}", key)?;

    #[cfg(unix)]
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;

    Ok(path)
}

/// Key with everything but the last four characters hidden, for display.
pub fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
