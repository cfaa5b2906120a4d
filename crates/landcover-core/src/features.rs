//! Feature pipeline: raw image file → model-ready tensor.
//!
//! Stages run in a fixed order (the paired model was trained on exactly
//! this ordering; in particular the code map is quantized before the
//! resize, never after):
//!   1. decode, force 8-bit grayscale
//!   2. 3×3 Gaussian smoothing
//!   3. uniform LBP, radius 3, 24 sample points
//!   4. min-max stretch of the code map to [0, 255], truncating to u8
//!   5. Lanczos3 resize to 100×100 (aspect distortion accepted)
//!   6. scale to [0, 1] f32, shaped (1, 100, 100, 1)

use std::path::Path;

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::error::Error;
use crate::tensor::{NormalizedTensor, INPUT_SIDE};
use crate::texture::{gaussian_blur_3x3, uniform_lbp};

/// Linearly stretch a code map to fill [0, 255] and truncate to u8,
/// as `v * scale + shift`. A constant map has no range and maps to zeros.
fn stretch_to_u8(codes: &[u8]) -> Vec<u8> {
    let min = codes.iter().copied().min().unwrap_or(0);
    let max = codes.iter().copied().max().unwrap_or(0);
    if max == min {
        return vec![0; codes.len()];
    }
    let scale = 255.0 / (max - min) as f64;
    let shift = -(min as f64) * scale;
    codes.iter().map(|&v| (v as f64 * scale + shift) as u8).collect()
}

/// Deterministic feature extraction: read one image file and produce the
/// classifier's input tensor.
///
/// The only side effect is the single file read. An unreadable or
/// undecodable path is `Error::Load`; every decodable image, down to a
/// single pixel, extracts without error.
pub fn extract(path: impl AsRef<Path>) -> Result<NormalizedTensor, Error> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?
        .to_luma8();
    let (width, height) = (img.width() as usize, img.height() as usize);

    let smoothed = gaussian_blur_3x3(img.as_raw(), width, height);
    let codes = uniform_lbp(&smoothed, width, height);
    let stretched = stretch_to_u8(&codes);

    let code_map = GrayImage::from_raw(img.width(), img.height(), stretched)
        .expect("code map matches source dimensions");
    let resized = imageops::resize(
        &code_map,
        INPUT_SIDE as u32,
        INPUT_SIDE as u32,
        FilterType::Lanczos3,
    );

    let data = resized.into_raw().into_iter().map(|v| v as f32 / 255.0).collect();
    NormalizedTensor::from_vec(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ClassLabel, Classifier, Model};
    use crate::geo::annotate;
    use crate::tensor::INPUT_LEN;
    use image::Luma;
    use std::path::PathBuf;

    fn temp_image(name: &str, width: u32, height: u32, value: u8) -> PathBuf {
        let path = std::env::temp_dir().join(format!("landcover-{name}.png"));
        GrayImage::from_pixel(width, height, Luma([value]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn gray_image_yields_full_unit_range_tensor() {
        let path = temp_image("gray-50", 50, 50, 128);
        let tensor = extract(&path).unwrap();
        assert_eq!(tensor.shape(), [1, 100, 100, 1]);
        assert_eq!(tensor.as_slice().len(), INPUT_LEN);
        assert!(tensor.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn extraction_is_deterministic() {
        let path = temp_image("repeat", 40, 30, 90);
        let a = extract(&path).unwrap();
        let b = extract(&path).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_path_is_a_load_failure() {
        let err = extract("does/not/exist.png").unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }

    #[test]
    fn one_pixel_image_is_accepted() {
        // Pinned policy: a 1×1 image processes without error. The blur is
        // the identity, every circle sample reads zero, and the constant
        // code map stretches to all zeros before the upscale.
        let path = temp_image("one-pixel", 1, 1, 200);
        let tensor = extract(&path).unwrap();
        assert_eq!(tensor.as_slice().len(), INPUT_LEN);
        assert!(tensor.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn stretch_spans_the_full_byte_range() {
        let out = stretch_to_u8(&[5, 10, 15]);
        assert_eq!(out, vec![0, 127, 255]);
    }

    #[test]
    fn stretch_of_constant_map_is_all_zeros() {
        assert_eq!(stretch_to_u8(&[9, 9, 9, 9]), vec![0, 0, 0, 0]);
    }

    /// A stub that ignores the tensor and returns a fixed distribution.
    struct FixedModel(Vec<f32>);

    impl Model for FixedModel {
        fn probabilities(&self, _tensor: &NormalizedTensor) -> Result<Vec<f32>, Error> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn gray_image_round_trip_through_stub_classifier() {
        let path = temp_image("round-trip", 50, 50, 128);
        let tensor = extract(&path).unwrap();

        let classifier = Classifier::new(FixedModel(vec![0.1, 0.7, 0.1, 0.1]));
        let label = classifier.classify(&tensor).unwrap();
        assert_eq!(label, ClassLabel::Desert);

        let marker = annotate(label).unwrap();
        assert_eq!((marker.latitude, marker.longitude), (-7.92967, 112.96586));
    }
}
