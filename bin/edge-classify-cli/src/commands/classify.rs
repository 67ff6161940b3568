// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `edge-classify classify` command: one-shot classification.
//!
//! Loads the artifacts, classifies a single image, and prints the exact
//! payload the loop would publish. Nothing is sent to the bridge.

use classifier_core::{ClassifierEngine, ImageClassifier};
use std::path::PathBuf;

pub async fn execute(model: PathBuf, labels: PathBuf, image: PathBuf) -> anyhow::Result<()> {
    let engine = ClassifierEngine::new(&model, &labels).load()?;

    let result = engine.classify_path(&image)?;

    println!("  Image:          {}", image.display());
    println!("  Label:          {}", result.label);
    println!("  Inference time: {:.2} ms", result.inference_time_ms);
    println!();
    println!("  Payload: {}", serde_json::to_string(&result)?);

    Ok(())
}
