use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LabelError;

pub const DEFAULT_PREDICTIONS_PATH: &str = "training_result.txt";
pub const DEFAULT_LABELS_PATH: &str = "labels.csv";
pub const DEFAULT_FILE_MARKER: &str = "檔案:";
pub const DEFAULT_CLASS_MARKER: &str = "預測類別:";
pub const DEFAULT_CHAIR_MARKER: &str = "chair_";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Paths and marker strings for both tools.
///
/// Every field has a default matching the fixed values the tools have always
/// used, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    #[serde(default)]
    pub identifiers: IdentifierConfig,
}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReconcileConfig {
    #[serde(default = "default_predictions")]
    pub predictions: PathBuf,
    #[serde(default = "default_labels")]
    pub labels: PathBuf,
    #[serde(default = "default_file_marker")]
    pub file_marker: String,
    #[serde(default = "default_class_marker")]
    pub class_marker: String,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            predictions: default_predictions(),
            labels: default_labels(),
            file_marker: default_file_marker(),
            class_marker: default_class_marker(),
        }
    }
}

impl ReconcileConfig {
    pub fn markers(&self) -> Markers {
        Markers {
            file_marker: self.file_marker.clone(),
            class_marker: self.class_marker.clone(),
        }
    }
}

/// Marker substrings that locate a prediction inside a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub file_marker: String,
    pub class_marker: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            file_marker: default_file_marker(),
            class_marker: default_class_marker(),
        }
    }
}

// ---------------------------------------------------------------------------
// Identifier extractor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifierConfig {
    #[serde(default = "default_labels")]
    pub labels: PathBuf,
    #[serde(default = "default_chair_marker")]
    pub marker: String,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            marker: default_chair_marker(),
        }
    }
}

fn default_predictions() -> PathBuf {
    PathBuf::from(DEFAULT_PREDICTIONS_PATH)
}

fn default_labels() -> PathBuf {
    PathBuf::from(DEFAULT_LABELS_PATH)
}

fn default_file_marker() -> String {
    DEFAULT_FILE_MARKER.into()
}

fn default_class_marker() -> String {
    DEFAULT_CLASS_MARKER.into()
}

fn default_chair_marker() -> String {
    DEFAULT_CHAIR_MARKER.into()
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl LabelConfig {
    pub fn from_toml(input: &str) -> Result<Self, LabelError> {
        let config: LabelConfig =
            toml::from_str(input).map_err(|e| LabelError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. Relative input paths resolve against the
    /// directory holding the config file.
    pub fn load(path: &Path) -> Result<Self, LabelError> {
        let text = std::fs::read_to_string(path).map_err(|e| LabelError::io(path, e))?;
        let mut config = Self::from_toml(&text)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        config.rebase(base_dir);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        self.reconcile.markers().validate()?;
        if self.identifiers.marker.is_empty() {
            return Err(LabelError::ConfigValidation(
                "identifiers.marker must not be empty".into(),
            ));
        }
        Ok(())
    }

    fn rebase(&mut self, base_dir: &Path) {
        for path in [
            &mut self.reconcile.predictions,
            &mut self.reconcile.labels,
            &mut self.identifiers.labels,
        ] {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
    }
}

impl Markers {
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.file_marker.is_empty() {
            return Err(LabelError::ConfigValidation(
                "file_marker must not be empty".into(),
            ));
        }
        if self.class_marker.is_empty() {
            return Err(LabelError::ConfigValidation(
                "class_marker must not be empty".into(),
            ));
        }
        if self.file_marker == self.class_marker {
            return Err(LabelError::ConfigValidation(format!(
                "file_marker and class_marker are both '{}'",
                self.file_marker
            )));
        }
        Ok(())
    }
}
