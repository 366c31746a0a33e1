//! Save and load label documents.
//!
//! A label file is JSON holding the [`LabelConfig`] plus a small header.
//! Bare `LabelConfig` JSON, as exchanged with the hosting views, loads too.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::LabelConfig;

/// Label file format version
const FILE_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFile {
    pub version: String,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub label: LabelConfig,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelDocument {
    File(LabelFile),
    Bare(LabelConfig),
}

impl LabelFile {
    pub fn new(name: impl Into<String>, label: LabelConfig) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            name: name.into(),
            created: now,
            modified: now,
            label,
        }
    }

    /// Save label to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize label")?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write label file {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load label from file, accepting bare label JSON as well
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read label file {}", path.as_ref().display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let document: LabelDocument =
            serde_json::from_str(content).context("Failed to parse label file")?;
        Ok(match document {
            LabelDocument::File(mut file) => {
                file.modified = Utc::now();
                file
            }
            LabelDocument::Bare(label) => Self::new("Untitled", label),
        })
    }
}

/// Writes `label` to `path` as a label file named after the file stem.
pub fn save_label(label: &LabelConfig, path: impl AsRef<Path>) -> Result<()> {
    let name = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string());
    LabelFile::new(name, label.clone()).save_to_file(path)
}

pub fn load_label(path: impl AsRef<Path>) -> Result<LabelConfig> {
    Ok(LabelFile::load_from_file(path)?.label)
}
