// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor preparation.

/// Errors that can occur while preparing model input.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// The decoded image does not match the model's fixed input grid.
    ///
    /// The pipeline performs no resizing; an image that does not decode to
    /// exactly the expected dimensions is rejected.
    #[error("input image must be {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    ShapeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}
