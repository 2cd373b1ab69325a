use std::path::Path;

use artset_util::errors::{ArtsetError, ArtsetResult};
use serde::{Deserialize, Serialize};

/// How an artifact view reads an artifact set, loaded from the `[view]`
/// table of a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactViewConfig {
    /// Whether file-level results (local file dependencies) are wanted.
    #[serde(default = "default_include_files", rename = "include-files")]
    pub include_files: bool,
    /// Tolerate visit failures, logging them instead of failing the read.
    #[serde(default)]
    pub lenient: bool,
}

impl Default for ArtifactViewConfig {
    fn default() -> Self {
        Self {
            include_files: default_include_files(),
            lenient: false,
        }
    }
}

fn default_include_files() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    view: Option<ArtifactViewConfig>,
}

impl ArtifactViewConfig {
    /// Parse the `[view]` table of a TOML document. A missing table yields defaults.
    pub fn from_toml_str(content: &str) -> ArtsetResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ArtsetError::Config {
            message: format!("Failed to parse artifact view config: {e}"),
        })?;
        Ok(file.view.unwrap_or_default())
    }

    /// Load the configuration from a TOML file.
    pub fn from_path(path: &Path) -> ArtsetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtsetError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }
}
