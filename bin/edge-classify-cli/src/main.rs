// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # edge-classify
//!
//! Command-line interface for the edge classification loop.
//!
//! ## Usage
//! ```bash
//! # Run the publish loop against the local broker bridge
//! edge-classify run --images ./images --topic demo/onnx
//!
//! # Classify a single image and print the payload
//! edge-classify classify ./images/kitten.jpg
//!
//! # Inspect the model and label artifacts
//! edge-classify inspect
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "edge-classify",
    about = "ONNX image classification loop for edge devices",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (overrides CLI arguments).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the classify/publish loop until Ctrl-C.
    Run {
        /// Path to the ONNX model artifact.
        #[arg(short, long)]
        model: Option<std::path::PathBuf>,

        /// Path to the JSON label file.
        #[arg(short, long)]
        labels: Option<std::path::PathBuf>,

        /// Directory of input images.
        #[arg(short, long)]
        images: Option<std::path::PathBuf>,

        /// Topic to publish results to.
        #[arg(short, long)]
        topic: Option<String>,

        /// Base URL of the local broker bridge.
        #[arg(long)]
        bridge_url: Option<String>,

        /// Seconds to pause after each published message.
        #[arg(long)]
        interval: Option<u64>,

        /// Abort on the first per-image failure instead of skipping.
        #[arg(long)]
        fail_fast: bool,

        /// Log results instead of publishing to the bridge.
        #[arg(long)]
        dry_run: bool,
    },

    /// Classify a single image and print the result payload.
    Classify {
        /// Path to the image file.
        image: std::path::PathBuf,

        /// Path to the ONNX model artifact.
        #[arg(short, long)]
        model: Option<std::path::PathBuf>,

        /// Path to the JSON label file.
        #[arg(short, long)]
        labels: Option<std::path::PathBuf>,
    },

    /// Inspect the model and label artifacts and verify they line up.
    Inspect {
        /// Path to the ONNX model artifact.
        #[arg(short, long)]
        model: Option<std::path::PathBuf>,

        /// Path to the JSON label file.
        #[arg(short, long)]
        labels: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    // A config file, when given, is the baseline; flags override it.
    let base = match &cli.config {
        Some(path) => runtime::PipelineConfig::from_file(path)?,
        None => runtime::PipelineConfig::default(),
    };

    match cli.command {
        Commands::Run {
            model,
            labels,
            images,
            topic,
            bridge_url,
            interval,
            fail_fast,
            dry_run,
        } => {
            let mut config = base;
            if let Some(v) = model {
                config.model_path = v;
            }
            if let Some(v) = labels {
                config.labels_path = v;
            }
            if let Some(v) = images {
                config.images_dir = v;
            }
            if let Some(v) = topic {
                config.topic = v;
            }
            if let Some(v) = bridge_url {
                config.bridge_url = v;
            }
            if let Some(v) = interval {
                config.pace_interval_secs = v;
            }
            if fail_fast {
                config.fail_fast = true;
            }
            commands::run::execute(config, dry_run).await
        }
        Commands::Classify {
            image,
            model,
            labels,
        } => {
            let model = model.unwrap_or(base.model_path);
            let labels = labels.unwrap_or(base.labels_path);
            commands::classify::execute(model, labels, image).await
        }
        Commands::Inspect { model, labels } => {
            let model = model.unwrap_or(base.model_path);
            let labels = labels.unwrap_or(base.labels_path);
            commands::inspect::execute(model, labels).await
        }
    }
}
