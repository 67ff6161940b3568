// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pixel normalization: channel-last RGB → channel-first model input.
//!
//! The model expects a `[1, 3, 224, 224]` `f32` tensor where every pixel
//! has been scaled to `[0, 1]` and normalized per channel:
//!
//! ```text
//! normalized = (raw / 255.0 - mean[c]) / stddev[c]
//! ```
//!
//! with the ImageNet constants below. These values are baked into the
//! pretrained weights; changing them silently degrades every prediction.

use crate::PrepError;
use image::RgbImage;

/// Fixed input height the model was exported with.
pub const INPUT_HEIGHT: u32 = 224;

/// Fixed input width the model was exported with.
pub const INPUT_WIDTH: u32 = 224;

/// Number of color channels (RGB).
pub const CHANNELS: usize = 3;

/// Per-channel mean, RGB order.
pub const CHANNEL_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation, RGB order.
pub const CHANNEL_STDDEV: [f32; 3] = [0.229, 0.224, 0.225];

/// Converts a decoded 224x224 RGB image into normalized CHW `f32` data.
///
/// The returned vector has length `3 * 224 * 224`, laid out as all R
/// values, then all G values, then all B values, each plane in row-major
/// order. Prepending the batch dimension is the caller's job.
///
/// No resizing is performed. The reference pipeline feeds pre-sized
/// images and so does this one; anything else is a [`PrepError::ShapeMismatch`].
pub fn to_model_input(image: &RgbImage) -> Result<Vec<f32>, PrepError> {
    let (width, height) = image.dimensions();
    if width != INPUT_WIDTH || height != INPUT_HEIGHT {
        return Err(PrepError::ShapeMismatch {
            expected_width: INPUT_WIDTH,
            expected_height: INPUT_HEIGHT,
            actual_width: width,
            actual_height: height,
        });
    }

    let num_pixels = (width * height) as usize;
    let mut chw = vec![0.0f32; CHANNELS * num_pixels];

    for (i, pixel) in image.pixels().enumerate() {
        for c in 0..CHANNELS {
            chw[c * num_pixels + i] =
                (pixel[c] as f32 / 255.0 - CHANNEL_MEAN[c]) / CHANNEL_STDDEV[c];
        }
    }

    Ok(chw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(r: u8, g: u8, b: u8) -> RgbImage {
        RgbImage::from_pixel(INPUT_WIDTH, INPUT_HEIGHT, image::Rgb([r, g, b]))
    }

    #[test]
    fn test_output_length() {
        let out = to_model_input(&solid_image(0, 0, 0)).unwrap();
        assert_eq!(out.len(), 3 * 224 * 224);
    }

    #[test]
    fn test_rejects_wrong_dimensions() {
        let img = RgbImage::new(100, 100);
        let err = to_model_input(&img).unwrap_err();
        assert!(matches!(
            err,
            PrepError::ShapeMismatch {
                actual_width: 100,
                actual_height: 100,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_one_axis_off() {
        let img = RgbImage::new(224, 223);
        assert!(to_model_input(&img).is_err());
    }

    #[test]
    fn test_normalization_formula() {
        // A solid white image: every channel value is (1.0 - mean) / std.
        let out = to_model_input(&solid_image(255, 255, 255)).unwrap();
        let n = 224 * 224;
        for c in 0..3 {
            let expected = (1.0 - CHANNEL_MEAN[c]) / CHANNEL_STDDEV[c];
            assert!((out[c * n] - expected).abs() < 1e-6, "channel {c}");
            assert!((out[c * n + n - 1] - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_chw_ordering() {
        // Distinct channel values must land in distinct planes.
        let out = to_model_input(&solid_image(255, 0, 0)).unwrap();
        let n = 224 * 224;

        let red = (1.0 - CHANNEL_MEAN[0]) / CHANNEL_STDDEV[0];
        let green = (0.0 - CHANNEL_MEAN[1]) / CHANNEL_STDDEV[1];
        let blue = (0.0 - CHANNEL_MEAN[2]) / CHANNEL_STDDEV[2];

        assert!((out[0] - red).abs() < 1e-6);
        assert!((out[n] - green).abs() < 1e-6);
        assert!((out[2 * n] - blue).abs() < 1e-6);
    }

    #[test]
    fn test_zero_pixel() {
        // Black input: normalized value is -mean/std per channel.
        let out = to_model_input(&solid_image(0, 0, 0)).unwrap();
        let n = 224 * 224;
        for c in 0..3 {
            let expected = -CHANNEL_MEAN[c] / CHANNEL_STDDEV[c];
            assert!((out[c * n] - expected).abs() < 1e-6);
        }
    }
}
