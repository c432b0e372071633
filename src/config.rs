use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FilterError;

const DEFAULT_MODEL_PATH: &str = "model.onnx";
const DEFAULT_INPUT_SIZE: u32 = 320;
const DEFAULT_SCORE_FLOOR: f32 = 0.2;
const DEFAULT_IOU_THRESHOLD: f32 = 0.45;

#[derive(Debug, Deserialize, Default)]
struct FilterConfigFile {
    model_path: Option<PathBuf>,
    input_size: Option<u32>,
    score_floor: Option<f32>,
    iou_threshold: Option<f32>,
}

/// Detector runtime settings.
///
/// Policy thresholds are fixed in [`crate::policy`] and intentionally
/// absent here; this only covers how the model is run.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Path to the nudity-detection ONNX model.
    pub model_path: PathBuf,
    /// Square model input side length in pixels.
    pub input_size: u32,
    /// Per-anchor class-score floor applied before NMS.
    pub score_floor: f32,
    /// IoU above which overlapping detections are suppressed.
    pub iou_threshold: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            input_size: DEFAULT_INPUT_SIZE,
            score_floor: DEFAULT_SCORE_FLOOR,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
        }
    }
}

impl FilterConfig {
    /// Resolve settings from an optional TOML file plus an optional
    /// model-path override; the override has highest precedence.
    pub fn load(
        config_path: Option<&Path>,
        model_override: Option<&Path>,
    ) -> Result<Self, FilterError> {
        let file_cfg = match config_path {
            Some(path) => read_config_file(path)?,
            None => FilterConfigFile::default(),
        };

        let mut cfg = Self::default();
        if let Some(model_path) = file_cfg.model_path {
            cfg.model_path = model_path;
        }
        if let Some(input_size) = file_cfg.input_size {
            cfg.input_size = input_size;
        }
        if let Some(score_floor) = file_cfg.score_floor {
            cfg.score_floor = score_floor;
        }
        if let Some(iou_threshold) = file_cfg.iou_threshold {
            cfg.iou_threshold = iou_threshold;
        }
        if let Some(model_path) = model_override {
            cfg.model_path = model_path.to_path_buf();
        }

        if cfg.input_size == 0 {
            return Err(FilterError::Config("input_size must be >= 1".to_string()));
        }
        Ok(cfg)
    }
}

fn read_config_file(path: &Path) -> Result<FilterConfigFile, FilterError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| FilterError::Config(format!("read {}: {e}", path.display())))?;
    toml::from_str(&raw).map_err(|e| FilterError::Config(format!("parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_a_config_file() -> Result<(), FilterError> {
        let cfg = FilterConfig::load(None, None)?;
        assert_eq!(cfg.model_path, PathBuf::from("model.onnx"));
        assert_eq!(cfg.input_size, 320);
        Ok(())
    }

    #[test]
    fn config_file_overrides_defaults() -> Result<(), FilterError> {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "model_path = \"detector/nudenet.onnx\"").expect("write config");
        writeln!(file, "input_size = 640").expect("write config");

        let cfg = FilterConfig::load(Some(file.path()), None)?;
        assert_eq!(cfg.model_path, PathBuf::from("detector/nudenet.onnx"));
        assert_eq!(cfg.input_size, 640);
        assert_eq!(cfg.iou_threshold, DEFAULT_IOU_THRESHOLD);
        Ok(())
    }

    #[test]
    fn cli_model_override_wins_over_config_file() -> Result<(), FilterError> {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "model_path = \"from-file.onnx\"").expect("write config");

        let cfg = FilterConfig::load(Some(file.path()), Some(Path::new("from-flag.onnx")))?;
        assert_eq!(cfg.model_path, PathBuf::from("from-flag.onnx"));
        Ok(())
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "input_size = \"not a number\"").expect("write config");

        let err = FilterConfig::load(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }

    #[test]
    fn zero_input_size_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "input_size = 0").expect("write config");

        let err = FilterConfig::load(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }
}
