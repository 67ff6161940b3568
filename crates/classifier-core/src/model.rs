// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! ONNX model loading and execution via tract.
//!
//! [`ModelHandle`] wraps an optimized, runnable tract plan pinned to the
//! fixed `[1, 3, 224, 224]` `f32` input fact. The artifact is parsed and
//! optimized exactly once; the handle is then reused for every inference.
//! Runtime resources live inside the plan and are released when the handle
//! is dropped.

use crate::ClassifierError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tensor_prep::{CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
use tract_onnx::prelude::*;

/// A runnable tract plan over a typed graph.
pub type RunnablePlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// A loaded, ready-to-run classification model.
///
/// Immutable after [`ModelHandle::load`]; safe to share behind a reference
/// across sequential inference calls.
pub struct ModelHandle {
    plan: RunnablePlan,
    input_name: String,
    num_classes: usize,
    path: PathBuf,
}

impl ModelHandle {
    /// Loads and optimizes an ONNX model artifact.
    ///
    /// Steps:
    /// 1. Parse the ONNX graph.
    /// 2. Pin the single input to `[1, 3, 224, 224]` `f32`.
    /// 3. Optimize into a typed graph and read the output class dimension.
    /// 4. Build the runnable plan.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let load_err = |detail: String| ClassifierError::ModelLoad {
            path: path.to_path_buf(),
            detail,
        };

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(
                    0,
                    InferenceFact::dt_shape(
                        f32::datum_type(),
                        tvec!(1, CHANNELS, INPUT_HEIGHT as usize, INPUT_WIDTH as usize),
                    ),
                )
            })
            .map_err(|e| load_err(e.to_string()))?;

        let input_outlet = model
            .input_outlets()
            .map_err(|e| load_err(e.to_string()))?
            .first()
            .copied()
            .ok_or_else(|| load_err("model declares no input tensor".into()))?;
        let input_name = model.node(input_outlet.node).name.clone();

        let typed = model.into_optimized().map_err(|e| load_err(e.to_string()))?;

        let output_fact = typed
            .output_fact(0)
            .map_err(|e| load_err(e.to_string()))?;
        let num_classes = output_fact
            .shape
            .as_concrete()
            .and_then(|dims| dims.last().copied())
            .ok_or_else(|| load_err("output shape is not concrete".into()))?;

        let plan = typed.into_runnable().map_err(|e| load_err(e.to_string()))?;

        tracing::info!(
            "model '{}' loaded: input '{}', {} output classes",
            path.display(),
            input_name,
            num_classes,
        );

        Ok(Self {
            plan,
            input_name,
            num_classes,
            path: path.to_path_buf(),
        })
    }

    /// Executes one forward pass over normalized CHW input data.
    ///
    /// Returns the raw, unnormalized output scores flattened to one
    /// dimension, plus the elapsed wall-clock time of the execution call
    /// only (tensor construction and flattening are excluded).
    pub fn run(&self, input: Vec<f32>) -> Result<(Vec<f32>, Duration), ClassifierError> {
        let array = tract_ndarray::Array4::from_shape_vec(
            (1, CHANNELS, INPUT_HEIGHT as usize, INPUT_WIDTH as usize),
            input,
        )
        .map_err(|e| ClassifierError::Execution(e.to_string()))?;
        let tensor = Tensor::from(array);

        let start = Instant::now();
        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ClassifierError::Execution(e.to_string()))?;
        let elapsed = start.elapsed();

        let output = outputs.first().ok_or(ClassifierError::EmptyOutput)?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Execution(e.to_string()))?;

        Ok((view.iter().copied().collect(), elapsed))
    }

    /// Name of the model's single input tensor.
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Size of the model's output class dimension.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Path the model was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("path", &self.path)
            .field("input_name", &self.input_name)
            .field("num_classes", &self.num_classes)
            .finish()
    }
}
