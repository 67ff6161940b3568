// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-prep
//!
//! The numeric contract of the classification pipeline: turning decoded
//! pixels into a model input tensor, and raw model scores into a
//! probability distribution.
//!
//! Two halves:
//! - [`normalize`] — channel-last pixel grid → channel-first `f32` data,
//!   normalized with the fixed ImageNet mean/stddev constants the model
//!   weights were trained against. The math here must stay bit-compatible
//!   with those weights; see [`normalize::to_model_input`].
//! - [`scoring`] — numerically stable softmax and first-wins argmax over
//!   the raw output logits.
//!
//! This crate deliberately has no inference-runtime dependency. The caller
//! owns the `[1, 3, 224, 224]` tensor construction; this crate only
//! guarantees the element values and their CHW ordering.

mod error;
pub mod normalize;
pub mod scoring;

pub use error::PrepError;
pub use normalize::{CHANNELS, CHANNEL_MEAN, CHANNEL_STDDEV, INPUT_HEIGHT, INPUT_WIDTH};
