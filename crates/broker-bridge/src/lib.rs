// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # broker-bridge
//!
//! Topic publishing to the local broker bridge.
//!
//! The classification loop treats messaging as an external collaborator:
//! it hands a serialized payload and a topic to a [`Publish`]er and waits
//! for the acknowledgment before moving on. This crate provides:
//!
//! - [`Publish`] — the async publisher seam.
//! - [`BridgePublisher`] — HTTP client for the bridge's `POST /publish`
//!   endpoint with a bounded acknowledgment wait (default 5 s, no retry).
//! - [`LogPublisher`] — log-only implementation for dry runs and tests.
//! - [`Qos`] / [`PublishEnvelope`] — the delivery guarantee and wire
//!   envelope.

mod error;
mod http;
mod publisher;

pub use error::PublishError;
pub use http::{BridgePublisher, DEFAULT_ACK_TIMEOUT};
pub use publisher::{LogPublisher, Publish, PublishEnvelope, Qos};
