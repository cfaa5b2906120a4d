//! Classifier adapter: opaque model in, land-cover label out.
//!
//! The trained model is injected through the [`Model`] trait (a single
//! capability: tensor → probability vector) so tests run against
//! deterministic stubs and the real ONNX session stays behind the `onnx`
//! feature.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tensor::NormalizedTensor;

/// Cardinality of the closed label set; the model must emit exactly this
/// many probabilities.
pub const NUM_CLASSES: usize = 4;

/// The closed land-cover label set, in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    Cloudy,
    Desert,
    #[serde(rename = "Green Area")]
    GreenArea,
    Water,
}

impl ClassLabel {
    /// Fixed index ↔ label table: probability index i maps to `ALL[i]`.
    pub const ALL: [ClassLabel; NUM_CLASSES] = [
        ClassLabel::Cloudy,
        ClassLabel::Desert,
        ClassLabel::GreenArea,
        ClassLabel::Water,
    ];

    /// Human-readable class name.
    pub fn name(self) -> &'static str {
        match self {
            ClassLabel::Cloudy => "Cloudy",
            ClassLabel::Desert => "Desert",
            ClassLabel::GreenArea => "Green Area",
            ClassLabel::Water => "Water",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The opaque trained model: maps a fixed-shape tensor to a probability
/// vector over the label set. Assumed deterministic for a fixed tensor.
pub trait Model {
    fn probabilities(&self, tensor: &NormalizedTensor) -> Result<Vec<f32>, Error>;
}

/// Wraps a model instance for repeated classification calls.
///
/// Construct once, use many: the model is loaded by the caller and passed
/// in explicitly, so its lifetime is caller-visible rather than ambient
/// process state.
pub struct Classifier<M> {
    model: M,
}

impl<M: Model> Classifier<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Classify a model-ready tensor.
    ///
    /// Re-validates the input contract (a violation here is an internal
    /// bug, not user error), invokes the model once, and selects the label
    /// by first argmax: on exact ties the lowest index wins.
    pub fn classify(&self, tensor: &NormalizedTensor) -> Result<ClassLabel, Error> {
        tensor.validate()?;
        let probs = self.model.probabilities(tensor)?;
        if probs.len() != NUM_CLASSES {
            return Err(Error::BadProbabilityVector {
                expected: NUM_CLASSES,
                actual: probs.len(),
            });
        }
        Ok(ClassLabel::ALL[argmax(&probs)])
    }
}

/// Index of the maximum value; the first occurrence wins on exact ties.
fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
