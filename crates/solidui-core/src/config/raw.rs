//! The persisted `ui.config.json` record and its validation

use crate::error::{FieldError, ValidationError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub const DEFAULT_CSS_FILE: &str = "src/app.css";
pub const DEFAULT_TAILWIND_PREFIX: &str = "";
pub const DEFAULT_COMPONENTS: &str = "~/components/ui";
pub const DEFAULT_UTILS: &str = "~/lib/utils";

/// Tailwind settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindConfig {
    /// Path of the global CSS file, relative to the working directory
    pub css: String,

    /// Class prefix; empty means no prefix
    #[serde(default)]
    pub prefix: String,
}

/// Import aliases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    pub components: String,
    pub utils: String,
}

/// User preferences as written to `ui.config.json`, before path resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Whether the project uses TypeScript
    pub tsx: bool,

    pub tailwind: TailwindConfig,

    pub aliases: AliasConfig,
}

impl RawConfig {
    /// Check every field, collecting all failures rather than stopping at the first
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.schema.trim().is_empty() {
            errors.push(field_error("$schema", "must not be empty"));
        }
        if self.tailwind.css.trim().is_empty() {
            errors.push(field_error("tailwind.css", "must not be empty"));
        }
        if self.aliases.components.trim().is_empty() {
            errors.push(field_error("aliases.components", "must not be empty"));
        }
        if self.aliases.utils.trim().is_empty() {
            errors.push(field_error("aliases.utils", "must not be empty"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }

    /// Parse and validate a config from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let config: RawConfig =
            serde_json::from_str(content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the config to `path`, replacing any existing file
    pub async fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.to_json_pretty()?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn field_error(field: &'static str, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_string(),
    }
}
