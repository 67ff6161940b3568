// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the classification engine.

use std::path::PathBuf;

/// Errors that can occur while loading artifacts or classifying an image.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The label file could not be read.
    #[error("failed to read label file '{path}': {source}")]
    LabelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The label file is not a JSON array of strings.
    #[error("failed to parse label file: {0}")]
    LabelParse(#[from] serde_json::Error),

    /// The model artifact is missing or malformed.
    #[error("failed to load model '{path}': {detail}")]
    ModelLoad { path: PathBuf, detail: String },

    /// The label table does not line up with the model's output dimension.
    ///
    /// Index lookup would be semantically wrong for every prediction, so
    /// this is checked once at load time and is fatal.
    #[error("label table has {labels} entries but model emits {classes} classes")]
    LabelCountMismatch { labels: usize, classes: usize },

    /// The input image could not be decoded.
    #[error("failed to decode image '{path}': {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image does not match the model's fixed input grid.
    #[error(transparent)]
    Prep(#[from] tensor_prep::PrepError),

    /// The forward pass failed inside the inference runtime.
    #[error("inference execution failed: {0}")]
    Execution(String),

    /// The model produced an empty score vector.
    #[error("model produced no output scores")]
    EmptyOutput,

    /// A predicted index fell outside the label table.
    #[error("predicted class index {index} exceeds label table bounds ({len} entries)")]
    LabelIndexOutOfRange { index: usize, len: usize },
}
