// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! HTTP client for the local broker bridge.
//!
//! The bridge exposes a single endpoint, `POST {base_url}/publish`,
//! accepting a [`PublishEnvelope`] and answering 2xx once the message has
//! been handed to the broker with the requested QoS. The client waits for
//! that acknowledgment up to a bounded timeout and never retries; delivery
//! beyond the acknowledgment is the broker's concern.

use crate::{Publish, PublishEnvelope, PublishError, Qos};
use std::time::Duration;

/// Default bounded wait for the bridge acknowledgment.
pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_secs(5);

/// Publishes to a local broker bridge over HTTP.
#[derive(Debug, Clone)]
pub struct BridgePublisher {
    client: reqwest::Client,
    endpoint: String,
    qos: Qos,
    ack_timeout: Duration,
}

impl BridgePublisher {
    /// Creates a publisher for the bridge at `base_url` (no trailing
    /// slash), acknowledging within `ack_timeout`.
    pub fn new(base_url: &str, ack_timeout: Duration) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(ack_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/publish", base_url.trim_end_matches('/')),
            qos: Qos::AtLeastOnce,
            ack_timeout,
        })
    }

    /// Overrides the requested delivery guarantee.
    pub fn with_qos(mut self, qos: Qos) -> Self {
        self.qos = qos;
        self
    }

    /// The resolved publish endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Publish for BridgePublisher {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), PublishError> {
        let envelope = PublishEnvelope {
            topic: topic.to_string(),
            qos: self.qos,
            payload: payload.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PublishError::AckTimeout {
                        timeout: self.ack_timeout,
                    }
                } else {
                    PublishError::Transport(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!("published to '{topic}' ({} bytes)", payload.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalization() {
        let p = BridgePublisher::new("http://127.0.0.1:1884/", DEFAULT_ACK_TIMEOUT).unwrap();
        assert_eq!(p.endpoint(), "http://127.0.0.1:1884/publish");

        let p = BridgePublisher::new("http://127.0.0.1:1884", DEFAULT_ACK_TIMEOUT).unwrap();
        assert_eq!(p.endpoint(), "http://127.0.0.1:1884/publish");
    }

    #[tokio::test]
    async fn test_unreachable_bridge_is_transport_error() {
        // Nothing listens on this port; connection must be refused.
        let publisher =
            BridgePublisher::new("http://127.0.0.1:1", Duration::from_millis(500)).unwrap();
        let err = publisher.publish("demo/onnx", "{}").await.unwrap_err();
        assert!(matches!(
            err,
            PublishError::Transport(_) | PublishError::AckTimeout { .. }
        ));
    }

    #[tokio::test]
    async fn test_silent_bridge_times_out() {
        use tokio::io::AsyncReadExt;

        // A listener that accepts but never answers: the bounded wait must
        // elapse and surface as an acknowledgment timeout.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                // Drain the request, then hold the connection open.
                let _ = socket.read(&mut buf).await;
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
        });

        let publisher = BridgePublisher::new(
            &format!("http://{addr}"),
            Duration::from_millis(200),
        )
        .unwrap();
        let err = publisher.publish("demo/onnx", "{}").await.unwrap_err();
        assert!(matches!(err, PublishError::AckTimeout { .. }));
    }
}
