// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-pass loop metrics.
//!
//! [`PassMetrics`] aggregates one full sweep over the image directory:
//! how many files were seen, published, or skipped, and the forward pass
//! latency distribution across the published ones.

use classifier_core::InferenceResult;
use std::time::Duration;

/// Aggregate metrics for one directory pass.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PassMetrics {
    /// Files encountered during the pass.
    pub images_seen: usize,
    /// Results published to the bridge.
    pub published: usize,
    /// Files skipped due to per-image failures.
    pub skipped: usize,
    /// Sum of forward pass latencies over published results, in ms.
    pub total_inference_ms: f64,
    /// Fastest forward pass, in ms (0 when nothing was published).
    pub min_inference_ms: f64,
    /// Slowest forward pass, in ms (0 when nothing was published).
    pub max_inference_ms: f64,
    /// Wall-clock duration of the whole pass, including pacing.
    pub pass_duration: Duration,
}

impl PassMetrics {
    /// Creates an empty metrics container.
    pub fn new() -> Self {
        Self {
            images_seen: 0,
            published: 0,
            skipped: 0,
            total_inference_ms: 0.0,
            min_inference_ms: 0.0,
            max_inference_ms: 0.0,
            pass_duration: Duration::ZERO,
        }
    }

    /// Records a file encountered in the directory listing.
    pub fn record_seen(&mut self) {
        self.images_seen += 1;
    }

    /// Records a successfully published result.
    pub fn record_published(&mut self, result: &InferenceResult) {
        let ms = result.inference_time_ms;
        if self.published == 0 {
            self.min_inference_ms = ms;
            self.max_inference_ms = ms;
        } else {
            self.min_inference_ms = self.min_inference_ms.min(ms);
            self.max_inference_ms = self.max_inference_ms.max(ms);
        }
        self.total_inference_ms += ms;
        self.published += 1;
    }

    /// Records a per-image failure that was skipped.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Finalises the metrics with the pass wall-clock time.
    pub fn finalise(&mut self, pass_duration: Duration) {
        self.pass_duration = pass_duration;
    }

    /// Mean forward pass latency over published results, in ms.
    pub fn avg_inference_ms(&self) -> f64 {
        if self.published == 0 {
            return 0.0;
        }
        self.total_inference_ms / self.published as f64
    }

    /// Returns a human-readable summary suitable for logging.
    pub fn summary(&self) -> String {
        format!(
            "Pass: {} images, {} published, {} skipped, \
             inference {:.2} ms avg ({:.2} min / {:.2} max), pass took {:.1} s",
            self.images_seen,
            self.published,
            self.skipped,
            self.avg_inference_ms(),
            self.min_inference_ms,
            self.max_inference_ms,
            self.pass_duration.as_secs_f64(),
        )
    }
}

impl Default for PassMetrics {
    fn default() -> Self {
        Self::new()
    }
}
