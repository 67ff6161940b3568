// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The supervised classification loop.
//!
//! [`PipelineRunner`] owns the classifier, the publisher, and the
//! configuration, all constructed once at startup. One *pass* enumerates
//! the image directory in whatever order the OS returns it, classifies
//! each file, publishes the serialized result, and pauses one pace
//! interval before the next file. Passes repeat indefinitely; the same
//! images are re-processed every pass.
//!
//! The loop is cancellable at every await point via a `watch` channel: a
//! `true` value (or a dropped sender) stops the loop after the current
//! image, so the process can shut down without killing an in-flight
//! publish.

use crate::{PassMetrics, PipelineConfig, RuntimeError};
use broker_bridge::Publish;
use classifier_core::{ImageClassifier, InferenceResult};
use std::path::Path;
use std::time::Instant;
use tokio::sync::watch;

/// Drives classify → publish → pause over a directory, forever.
pub struct PipelineRunner<C, P> {
    classifier: C,
    publisher: P,
    config: PipelineConfig,
}

impl<C: ImageClassifier, P: Publish> PipelineRunner<C, P> {
    /// Creates a runner from already-constructed collaborators.
    pub fn new(classifier: C, publisher: P, config: PipelineConfig) -> Self {
        Self {
            classifier,
            publisher,
            config,
        }
    }

    /// Returns the runner's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs directory passes until `shutdown` turns `true`.
    ///
    /// Load errors and (with `fail_fast`) per-image errors propagate out;
    /// otherwise the loop only ends on shutdown.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<(), RuntimeError> {
        tracing::info!(
            "classification loop started: dir '{}', topic '{}', pace {:?}",
            self.config.images_dir.display(),
            self.config.topic,
            self.config.pace_interval(),
        );

        loop {
            let metrics = self.run_pass(&mut shutdown).await?;
            tracing::info!("{}", metrics.summary());

            if is_shutdown(&shutdown) {
                tracing::info!("shutdown requested, loop stopped");
                return Ok(());
            }

            // An empty directory yields no per-image pauses; pace here so
            // the rescan loop does not spin hot.
            if metrics.images_seen == 0 && self.pace(&mut shutdown).await {
                tracing::info!("shutdown requested, loop stopped");
                return Ok(());
            }
        }
    }

    /// Runs a single pass over the image directory.
    ///
    /// Per-image failures are logged and skipped unless `fail_fast` is
    /// set, in which case the first failure aborts the pass. The pace
    /// pause applies after every attempted file, successful or not.
    pub async fn run_pass(
        &self,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<PassMetrics, RuntimeError> {
        let pass_start = Instant::now();
        let mut metrics = PassMetrics::new();

        // Directory order is whatever the OS returns: unsorted, no dedup.
        let entries = std::fs::read_dir(&self.config.images_dir).map_err(|source| {
            RuntimeError::Scan {
                path: self.config.images_dir.clone(),
                source,
            }
        })?;

        for entry in entries {
            if is_shutdown(shutdown) {
                break;
            }

            let entry = entry.map_err(|source| RuntimeError::Scan {
                path: self.config.images_dir.clone(),
                source,
            })?;
            let path = entry.path();
            match entry.file_type() {
                Ok(t) if t.is_file() => {}
                _ => continue,
            }

            metrics.record_seen();
            match self.process_one(&path).await {
                Ok(result) => metrics.record_published(&result),
                Err(e) if self.config.fail_fast => return Err(e),
                Err(e) => {
                    tracing::warn!("skipping '{}': {e}", path.display());
                    metrics.record_skipped();
                }
            }

            if self.pace(shutdown).await {
                break;
            }
        }

        metrics.finalise(pass_start.elapsed());
        Ok(metrics)
    }

    /// Classifies one file and publishes the serialized result.
    async fn process_one(&self, path: &Path) -> Result<InferenceResult, RuntimeError> {
        let result = self.classifier.classify_path(path)?;
        let payload = serde_json::to_string(&result)?;

        self.publisher.publish(&self.config.topic, &payload).await?;
        tracing::info!("published '{}': {payload}", path.display());

        Ok(result)
    }

    /// Pauses one pace interval, returning `true` on shutdown.
    async fn pace(&self, shutdown: &mut watch::Receiver<bool>) -> bool {
        let interval = self.config.pace_interval();
        if interval.is_zero() {
            return is_shutdown(shutdown);
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => is_shutdown(shutdown),
            changed = shutdown.changed() => changed.map(|_| *shutdown.borrow()).unwrap_or(true),
        }
    }
}

fn is_shutdown(shutdown: &watch::Receiver<bool>) -> bool {
    // A dropped sender means nobody can ever cancel us; stop.
    *shutdown.borrow() || shutdown.has_changed().is_err()
}
