use std::fs;
use std::path::Path;

use super::types::StartupProfile;
use crate::error::{EvalError, Result};

/// On-disk encodings a profile may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Yaml,
    Json,
}

impl ProfileFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(ProfileFormat::Yaml),
            Some("json") => Ok(ProfileFormat::Json),
            _ => Err(EvalError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse profile text. `path` is only used for error messages.
pub fn parse_profile(content: &str, format: ProfileFormat, path: &Path) -> Result<StartupProfile> {
    let parsed = match format {
        ProfileFormat::Yaml => serde_saphyr::from_str(content).map_err(|e| e.to_string()),
        ProfileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| EvalError::ProfileParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Load a profile from a YAML or JSON file.
pub fn load_profile(path: &Path) -> Result<StartupProfile> {
    let format = ProfileFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| EvalError::ProfileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profile(&content, format, path)
}

/// Async variant of [`load_profile`] used when loading many files at once.
pub async fn load_profile_async(path: &Path) -> Result<StartupProfile> {
    let format = ProfileFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| EvalError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
    parse_profile(&content, format, path)
}
