// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Assembly of the final classification result.

use crate::{ClassifierError, LabelTable};
use std::time::Duration;

/// The outcome of one classification: the predicted label and the forward
/// pass latency.
///
/// Serializes to the wire payload `{"label": ..., "inference_time": ...}`
/// with the latency in milliseconds, rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InferenceResult {
    /// Human-readable class name.
    pub label: String,
    /// Forward pass wall-clock time in milliseconds, two decimals.
    #[serde(rename = "inference_time")]
    pub inference_time_ms: f64,
}

impl InferenceResult {
    /// Builds a result from a predicted class index and the execution time.
    ///
    /// An index outside the label table signals a label/model mismatch and
    /// fails rather than wrapping.
    pub fn assemble(
        index: usize,
        labels: &LabelTable,
        inference_time: Duration,
    ) -> Result<Self, ClassifierError> {
        let label = labels.label_for(index)?.to_string();
        Ok(Self {
            label,
            inference_time_ms: round2(inference_time.as_secs_f64() * 1000.0),
        })
    }
}

/// Rounds to two decimal places.
fn round2(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensor_prep::scoring;

    fn table() -> LabelTable {
        LabelTable::from_json(r#"["cat", "dog"]"#).unwrap()
    }

    #[test]
    fn test_assemble_rounds_to_two_decimals() {
        let result =
            InferenceResult::assemble(0, &table(), Duration::from_secs_f64(0.01234)).unwrap();
        assert_eq!(result.inference_time_ms, 12.34);
    }

    #[test]
    fn test_assemble_zero_duration() {
        let result = InferenceResult::assemble(0, &table(), Duration::ZERO).unwrap();
        assert_eq!(result.inference_time_ms, 0.0);
        assert!(result.inference_time_ms >= 0.0);
    }

    #[test]
    fn test_assemble_out_of_range_index() {
        let err = InferenceResult::assemble(5, &table(), Duration::ZERO).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::LabelIndexOutOfRange { index: 5, len: 2 }
        ));
    }

    #[test]
    fn test_payload_field_names() {
        let result = InferenceResult {
            label: "dog".into(),
            inference_time_ms: 12.34,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"label":"dog","inference_time":12.34}"#);
    }

    #[test]
    fn test_postprocess_selects_dog() {
        // Raw logits [1.0, 3.0] against ["cat", "dog"] must classify "dog".
        let probs = scoring::softmax(&[1.0, 3.0]);
        let index = scoring::argmax(&probs).unwrap();
        let result =
            InferenceResult::assemble(index, &table(), Duration::from_millis(7)).unwrap();
        assert_eq!(result.label, "dog");
        assert_eq!(result.inference_time_ms, 7.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
    }
}
