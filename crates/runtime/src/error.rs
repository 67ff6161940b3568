// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the classification loop.

use std::path::PathBuf;

/// Errors that can occur while running the supervised loop.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The classification pipeline failed for an image.
    #[error("classifier error: {0}")]
    Classifier(#[from] classifier_core::ClassifierError),

    /// Publishing a result to the bridge failed.
    #[error("publish error: {0}")]
    Publish(#[from] broker_bridge::PublishError),

    /// The image directory could not be enumerated.
    #[error("failed to scan image directory '{path}': {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result could not be serialized into a payload.
    #[error("failed to serialize result payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
