// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The classification engine with type-state–enforced loading.
//!
//! ```text
//! ClassifierEngine<Idle>
//!     │  .load()
//!     ▼
//! ClassifierEngine<Ready>
//!     │  .classify()
//!     ▼
//!   InferenceResult
//! ```
//!
//! `load()` consumes the idle engine and returns a ready one, so calling
//! `classify()` before the model and labels exist is a compile error. The
//! label vocabulary and model artifact are loaded exactly once and reused
//! for every inference; there is no hidden per-call reinitialization.

use crate::{ClassifierError, InferenceResult, LabelTable, ModelHandle};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tensor_prep::{normalize, scoring};

// ── Type-state markers ─────────────────────────────────────────

/// Engine is created but no artifacts are loaded.
#[derive(Debug)]
pub struct Idle;

/// Labels and model are loaded; the engine can classify.
#[derive(Debug)]
pub struct Ready;

/// Sealed trait for engine states.
pub trait EngineState: std::fmt::Debug {}
impl EngineState for Idle {}
impl EngineState for Ready {}

// ── Classifier seam ────────────────────────────────────────────

/// The seam the supervision loop consumes: classify one image file.
///
/// Implemented by [`ClassifierEngine<Ready>`]; test harnesses substitute
/// stubs so loop semantics can be exercised without model artifacts.
pub trait ImageClassifier {
    /// Decodes and classifies the image at `path`.
    fn classify_path(&self, path: &Path) -> Result<InferenceResult, ClassifierError>;
}

// ── Engine ─────────────────────────────────────────────────────

/// The classification engine.
///
/// `S` is a type-state marker enforcing load-before-classify at compile
/// time.
///
/// # Example
/// ```no_run
/// use classifier_core::{ClassifierEngine, ImageClassifier};
/// use std::path::Path;
///
/// # fn example() -> Result<(), classifier_core::ClassifierError> {
/// let engine = ClassifierEngine::new(
///     "./model/resnet50v2.onnx",
///     "./labels/imagenet-simple-labels.json",
/// )
/// .load()?;
/// let result = engine.classify_path(Path::new("./images/kitten.jpg"))?;
/// println!("{} ({:.2} ms)", result.label, result.inference_time_ms);
/// # Ok(())
/// # }
/// ```
pub struct ClassifierEngine<S: EngineState = Idle> {
    model_path: PathBuf,
    labels_path: PathBuf,
    _state: std::marker::PhantomData<S>,
    // Populated on the Idle → Ready transition:
    model: Option<ModelHandle>,
    labels: Option<LabelTable>,
}

impl ClassifierEngine<Idle> {
    /// Creates an idle engine pointing at the model and label artifacts.
    pub fn new(model_path: impl Into<PathBuf>, labels_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            labels_path: labels_path.into(),
            _state: std::marker::PhantomData,
            model: None,
            labels: None,
        }
    }

    /// Loads the label table and model artifact. Transitions to `Ready`.
    ///
    /// Fails loudly if the label count does not equal the model's output
    /// class dimension; every later index lookup would be wrong.
    pub fn load(self) -> Result<ClassifierEngine<Ready>, ClassifierError> {
        let labels = LabelTable::from_file(&self.labels_path)?;
        tracing::info!(
            "loaded {} class labels from '{}'",
            labels.len(),
            self.labels_path.display(),
        );

        let model = ModelHandle::load(&self.model_path)?;

        if labels.len() != model.num_classes() {
            return Err(ClassifierError::LabelCountMismatch {
                labels: labels.len(),
                classes: model.num_classes(),
            });
        }

        Ok(ClassifierEngine {
            model_path: self.model_path,
            labels_path: self.labels_path,
            _state: std::marker::PhantomData,
            model: Some(model),
            labels: Some(labels),
        })
    }
}

impl ClassifierEngine<Ready> {
    /// Classifies a decoded image.
    ///
    /// Pipeline: resolve to RGB8 → normalize into the model's CHW input →
    /// forward pass (timed) → softmax → argmax → label lookup.
    pub fn classify(&self, image: &DynamicImage) -> Result<InferenceResult, ClassifierError> {
        let rgb = image.to_rgb8();
        let input = normalize::to_model_input(&rgb)?;

        let (logits, elapsed) = self.model().run(input)?;

        let probabilities = scoring::softmax(&logits);
        let index = scoring::argmax(&probabilities).ok_or(ClassifierError::EmptyOutput)?;

        let result = InferenceResult::assemble(index, self.labels(), elapsed)?;
        tracing::debug!(
            "classified as '{}' in {:.2} ms",
            result.label,
            result.inference_time_ms,
        );
        Ok(result)
    }

    /// Returns the loaded label table.
    pub fn labels(&self) -> &LabelTable {
        self.labels.as_ref().expect("labels exist in Ready state")
    }

    /// Returns the loaded model handle.
    pub fn model(&self) -> &ModelHandle {
        self.model.as_ref().expect("model exists in Ready state")
    }
}

impl ImageClassifier for ClassifierEngine<Ready> {
    fn classify_path(&self, path: &Path) -> Result<InferenceResult, ClassifierError> {
        let image = image::open(path).map_err(|source| ClassifierError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        self.classify(&image)
    }
}

impl<S: EngineState> std::fmt::Debug for ClassifierEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierEngine")
            .field("state", &std::any::type_name::<S>())
            .field("model_path", &self.model_path)
            .field("labels_path", &self.labels_path)
            .field("has_model", &self.model.is_some())
            .field("has_labels", &self.labels.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_labels_is_fatal() {
        let engine = ClassifierEngine::new("/nonexistent/model.onnx", "/nonexistent/labels.json");
        let err = engine.load().unwrap_err();
        assert!(matches!(err, ClassifierError::LabelRead { .. }));
    }

    #[test]
    fn test_load_missing_model_is_fatal() {
        // Valid labels, missing model: labels load first, then the model
        // load must fail.
        let dir = tempfile::tempdir().unwrap();
        let labels = dir.path().join("labels.json");
        std::fs::write(&labels, r#"["cat", "dog"]"#).unwrap();

        let engine = ClassifierEngine::new("/nonexistent/model.onnx", &labels);
        let err = engine.load().unwrap_err();
        assert!(matches!(err, ClassifierError::ModelLoad { .. }));
    }

    #[test]
    fn test_debug_format() {
        let engine = ClassifierEngine::new("m.onnx", "l.json");
        let debug = format!("{engine:?}");
        assert!(debug.contains("ClassifierEngine"));
        assert!(debug.contains("Idle"));
    }
}
