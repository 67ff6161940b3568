// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pipeline configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! model_path = "./model/resnet50v2.onnx"
//! labels_path = "./labels/imagenet-simple-labels.json"
//! images_dir = "./images"
//! topic = "demo/onnx"
//! bridge_url = "http://127.0.0.1:1884"
//! publish_timeout_secs = 5
//! pace_interval_secs = 5
//! fail_fast = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the classification loop.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Path to the ONNX model artifact.
    pub model_path: PathBuf,
    /// Path to the JSON label file.
    pub labels_path: PathBuf,
    /// Directory of input images, re-scanned every pass.
    pub images_dir: PathBuf,
    /// Topic the results are published to.
    pub topic: String,
    /// Base URL of the local broker bridge.
    pub bridge_url: String,
    /// Bounded wait for the publish acknowledgment, in seconds.
    #[serde(default = "default_publish_timeout_secs")]
    pub publish_timeout_secs: u64,
    /// Pause after each published message, in seconds.
    #[serde(default = "default_pace_interval_secs")]
    pub pace_interval_secs: u64,
    /// Abort the loop on the first per-image failure instead of skipping.
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_publish_timeout_secs() -> u64 {
    5
}

fn default_pace_interval_secs() -> u64 {
    5
}

impl PipelineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::RuntimeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::RuntimeError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::RuntimeError> {
        toml::from_str(toml_str)
            .map_err(|e| super::RuntimeError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::RuntimeError> {
        toml::to_string_pretty(self)
            .map_err(|e| super::RuntimeError::Config(format!("TOML serialise error: {e}")))
    }

    /// The publish acknowledgment wait as a [`Duration`].
    pub fn publish_timeout(&self) -> Duration {
        Duration::from_secs(self.publish_timeout_secs)
    }

    /// The post-publish pause as a [`Duration`].
    pub fn pace_interval(&self) -> Duration {
        Duration::from_secs(self.pace_interval_secs)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("./model/resnet50v2.onnx"),
            labels_path: PathBuf::from("./labels/imagenet-simple-labels.json"),
            images_dir: PathBuf::from("./images"),
            topic: "demo/onnx".to_string(),
            bridge_url: "http://127.0.0.1:1884".to_string(),
            publish_timeout_secs: 5,
            pace_interval_secs: 5,
            fail_fast: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = PipelineConfig::default();
        assert_eq!(c.topic, "demo/onnx");
        assert_eq!(c.publish_timeout_secs, 5);
        assert_eq!(c.pace_interval_secs, 5);
        assert!(!c.fail_fast);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
model_path = "/opt/models/resnet50v2.onnx"
labels_path = "/opt/labels.json"
images_dir = "/var/images"
topic = "edge/results"
bridge_url = "http://localhost:9000"
pace_interval_secs = 1
fail_fast = true
"#;
        let c = PipelineConfig::from_toml(toml).unwrap();
        assert_eq!(c.model_path, PathBuf::from("/opt/models/resnet50v2.onnx"));
        assert_eq!(c.topic, "edge/results");
        assert_eq!(c.pace_interval_secs, 1);
        // Omitted field falls back to its default.
        assert_eq!(c.publish_timeout_secs, 5);
        assert!(c.fail_fast);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(PipelineConfig::from_toml("not valid toml [").is_err());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = PipelineConfig::default();
        let toml = c.to_toml().unwrap();
        let back = PipelineConfig::from_toml(&toml).unwrap();
        assert_eq!(back.topic, c.topic);
        assert_eq!(back.images_dir, c.images_dir);
        assert_eq!(back.pace_interval_secs, c.pace_interval_secs);
    }

    #[test]
    fn test_durations() {
        let c = PipelineConfig {
            publish_timeout_secs: 3,
            pace_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(c.publish_timeout(), Duration::from_secs(3));
        assert!(c.pace_interval().is_zero());
    }
}
