// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # runtime
//!
//! The supervision layer around the classification pipeline.
//!
//! The runtime takes:
//! - A ready classifier from `classifier-core`.
//! - A publisher from `broker-bridge`.
//! - A [`PipelineConfig`] describing the artifacts, topic, and pacing.
//!
//! And drives the edge loop: enumerate the image directory, classify each
//! file, publish the result, pause, repeat forever, until a shutdown
//! signal arrives.
//!
//! # Cancellation
//! The loop checks a `tokio::sync::watch` channel at every await point,
//! so Ctrl-C stops it after the in-flight image instead of mid-publish.
//!
//! # Error Policy
//! Artifact loading happens before the loop and is fatal. Per-image
//! failures (decode, shape, publish) are logged and skipped by default;
//! `fail_fast = true` restores abort-on-first-error behavior.

mod config;
mod error;
mod metrics;
mod runner;

pub use config::PipelineConfig;
pub use error::RuntimeError;
pub use metrics::PassMetrics;
pub use runner::PipelineRunner;
