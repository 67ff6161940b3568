// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Score math over raw model output: softmax and argmax.
//!
//! The model emits one unnormalized score (logit) per class. [`softmax`]
//! turns the flattened logit vector into a probability distribution using
//! the numerically stable variant (`exp(x - max) / sum`), and [`argmax`]
//! selects the predicted class index with a deterministic first-wins tie
//! break.

/// Computes a numerically stable softmax over a flat logit slice.
///
/// Subtracts the maximum before exponentiation so large logits do not
/// overflow. An empty slice yields an empty vector.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    if logits.is_empty() {
        return Vec::new();
    }

    let max_val = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let mut out: Vec<f32> = logits.iter().map(|&x| (x - max_val).exp()).collect();
    let sum: f32 = out.iter().sum();

    if sum > 0.0 {
        let inv_sum = 1.0 / sum;
        for v in &mut out {
            *v *= inv_sum;
        }
    }

    out
}

/// Returns the index of the maximum value, or `None` for an empty slice.
///
/// Ties resolve to the lowest index: the scan only replaces the current
/// best on a strictly greater value.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let sum: f32 = probs.iter().sum();
        assert!(approx_eq(sum, 1.0));
    }

    #[test]
    fn test_softmax_uniform() {
        let probs = softmax(&[1.0, 1.0, 1.0, 1.0]);
        for &p in &probs {
            assert!(approx_eq(p, 0.25));
        }
    }

    #[test]
    fn test_softmax_empty() {
        assert!(softmax(&[]).is_empty());
    }

    #[test]
    fn test_softmax_shift_invariant() {
        // Adding a constant to every logit must not change the output.
        let base = softmax(&[0.1, 0.7, 0.2]);
        let shifted = softmax(&[100.1, 100.7, 100.2]);
        for (a, b) in base.iter().zip(shifted.iter()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_softmax_large_values_stay_finite() {
        let probs = softmax(&[1000.0, 1001.0, 1002.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        let sum: f32 = probs.iter().sum();
        assert!(approx_eq(sum, 1.0));
    }

    #[test]
    fn test_softmax_monotonic() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        assert!(probs[0] < probs[1]);
        assert!(probs[1] < probs[2]);
    }

    #[test]
    fn test_argmax_basic() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), Some(1));
    }

    #[test]
    fn test_argmax_first_max_wins() {
        assert_eq!(argmax(&[0.5, 0.9, 0.9]), Some(1));
        assert_eq!(argmax(&[0.9, 0.9, 0.9]), Some(0));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_single() {
        assert_eq!(argmax(&[42.0]), Some(0));
    }

    #[test]
    fn test_argmax_negative_values() {
        assert_eq!(argmax(&[-3.0, -1.0, -2.0]), Some(1));
    }
}
