// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The publisher seam and the wire envelope.
//!
//! The inference loop only needs "send this payload to this topic and wait
//! for the acknowledgment". [`Publish`] captures exactly that; the HTTP
//! bridge client implements it for production and [`LogPublisher`] stands
//! in for dry runs and tests.

use crate::PublishError;
use std::future::Future;

/// Delivery guarantee requested from the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qos {
    /// Fire-and-forget.
    AtMostOnce,
    /// The broker must acknowledge; duplicates are possible.
    #[default]
    AtLeastOnce,
}

/// The JSON envelope posted to the bridge.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PublishEnvelope {
    /// Destination topic identifier.
    pub topic: String,
    /// Requested delivery guarantee.
    pub qos: Qos,
    /// Message payload, already serialized by the caller.
    pub payload: String,
}

/// Publishes one payload to one topic, blocking until acknowledged.
///
/// Sends are strictly one-at-a-time: a publish call does not return until
/// the bridge has acknowledged (or the bounded wait elapsed), which is the
/// only backpressure the loop applies.
pub trait Publish: Send + Sync {
    /// Publishes `payload` to `topic` and waits for the acknowledgment.
    fn publish(
        &self,
        topic: &str,
        payload: &str,
    ) -> impl Future<Output = Result<(), PublishError>> + Send;
}

/// A publisher that only logs; used for dry runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPublisher;

impl Publish for LogPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), PublishError> {
        tracing::info!("dry-run publish to '{topic}': {payload}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qos_default_is_at_least_once() {
        assert_eq!(Qos::default(), Qos::AtLeastOnce);
    }

    #[test]
    fn test_envelope_serialization() {
        let envelope = PublishEnvelope {
            topic: "demo/onnx".into(),
            qos: Qos::AtLeastOnce,
            payload: r#"{"label":"tabby","inference_time":42.17}"#.into(),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains(r#""topic":"demo/onnx""#));
        assert!(json.contains(r#""qos":"at_least_once""#));
        assert!(json.contains("tabby"));
    }

    #[tokio::test]
    async fn test_log_publisher_always_acknowledges() {
        let publisher = LogPublisher;
        publisher.publish("demo/onnx", "{}").await.unwrap();
    }
}
