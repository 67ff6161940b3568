// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `edge-classify inspect` command: display artifact details.
//!
//! Loads the label table and the model independently, prints what each
//! declares, and verifies the label/model class-count invariant the loop
//! relies on.

use classifier_core::{LabelTable, ModelHandle};
use std::path::PathBuf;

pub async fn execute(model: PathBuf, labels: PathBuf) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║         edge-classify · Artifact Inspector         ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Labels ─────────────────────────────────────────────────
    let table = LabelTable::from_file(&labels)
        .map_err(|e| anyhow::anyhow!("failed to load labels from '{}': {e}", labels.display()))?;

    println!("  Labels: {}", labels.display());
    println!("   Classes: {}", table.len());
    let preview: Vec<&str> = table.iter().take(5).collect();
    println!("   First:   {preview:?}");
    println!();

    // ── Model ──────────────────────────────────────────────────
    let handle = ModelHandle::load(&model)
        .map_err(|e| anyhow::anyhow!("failed to load model from '{}': {e}", model.display()))?;

    println!("  Model: {}", model.display());
    println!("   Input:   '{}' [1, 3, 224, 224] f32", handle.input_name());
    println!("   Outputs: {} classes", handle.num_classes());
    println!();

    // ── Invariant ──────────────────────────────────────────────
    if table.len() == handle.num_classes() {
        println!("  OK: label table and model output dimension agree.");
    } else {
        println!(
            "  MISMATCH: {} labels vs {} model classes — predictions would be wrong.",
            table.len(),
            handle.num_classes(),
        );
        anyhow::bail!("label/model mismatch");
    }

    Ok(())
}
