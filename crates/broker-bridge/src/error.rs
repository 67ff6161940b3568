// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for topic publishing.

use std::time::Duration;

/// Errors that can occur while publishing to the broker bridge.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The bridge did not acknowledge the message within the bounded wait.
    #[error("publish not acknowledged within {timeout:?}")]
    AckTimeout { timeout: Duration },

    /// The bridge acknowledged with a non-success status.
    #[error("bridge rejected publish with status {status}")]
    Rejected { status: u16 },

    /// The HTTP transport failed below the bridge protocol.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
