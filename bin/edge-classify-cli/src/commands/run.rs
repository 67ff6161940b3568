// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `edge-classify run` command: the supervised classify/publish loop.
//!
//! Loads the label table and model once, connects the bridge publisher,
//! and drives the loop until Ctrl-C:
//! ```text
//! ClassifierEngine<Idle> → load → <Ready> → classify → publish → pause → ...
//! ```

use broker_bridge::{BridgePublisher, LogPublisher, Publish};
use classifier_core::{ClassifierEngine, Ready};
use runtime::{PipelineConfig, PipelineRunner};
use tokio::sync::watch;

pub async fn execute(config: PipelineConfig, dry_run: bool) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║         edge-classify · Classification Loop        ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Config:");
    println!("   Model:    {}", config.model_path.display());
    println!("   Labels:   {}", config.labels_path.display());
    println!("   Images:   {}", config.images_dir.display());
    println!("   Topic:    {}", config.topic);
    println!(
        "   Bridge:   {}",
        if dry_run { "<dry run>" } else { &config.bridge_url },
    );
    println!("   Pace:     {}s", config.pace_interval_secs);
    println!();

    // Load artifacts once, before the loop; any failure here is fatal.
    println!("  [1/2] Loading labels and model...");
    let engine = ClassifierEngine::new(&config.model_path, &config.labels_path).load()?;
    println!(
        "        {} classes, input '{}'",
        engine.labels().len(),
        engine.model().input_name(),
    );
    println!();

    println!("  [2/2] Entering loop (Ctrl-C to stop)...");
    println!();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl-C received, shutting down");
            let _ = shutdown_tx.send(true);
        }
    });

    if dry_run {
        run_loop(engine, LogPublisher, config, shutdown_rx).await
    } else {
        let publisher = BridgePublisher::new(&config.bridge_url, config.publish_timeout())?;
        run_loop(engine, publisher, config, shutdown_rx).await
    }
}

async fn run_loop<P: Publish>(
    engine: ClassifierEngine<Ready>,
    publisher: P,
    config: PipelineConfig,
    shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let runner = PipelineRunner::new(engine, publisher, config);
    runner.run(shutdown).await?;

    println!();
    println!("  Loop stopped cleanly.");
    Ok(())
}
