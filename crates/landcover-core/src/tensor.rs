use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Side length of the model input, pixels.
pub const INPUT_SIDE: usize = 100;
/// Logical tensor shape expected by the classifier: batch of one,
/// 100×100 spatial, single channel.
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_SIDE, INPUT_SIDE, 1];
/// Total element count of the model input.
pub const INPUT_LEN: usize = INPUT_SIDE * INPUT_SIDE;

/// A model-ready tensor: 100×100 single-channel values in [0.0, 1.0],
/// row-major, logically shaped (1, 100, 100, 1).
///
/// Both invariants (length and value range) are enforced at construction;
/// a `NormalizedTensor` that exists is valid. `validate` re-checks them at
/// the classifier boundary, where a violation is a contract bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTensor(pub(crate) Vec<f32>);

impl NormalizedTensor {
    /// Wrap a row-major value buffer, rejecting length or range violations.
    pub fn from_vec(data: Vec<f32>) -> Result<Self, Error> {
        let tensor = Self(data);
        tensor.validate()?;
        Ok(tensor)
    }

    /// Re-check the classifier input contract.
    pub fn validate(&self) -> Result<(), Error> {
        if self.0.len() != INPUT_LEN {
            return Err(Error::CorruptInput {
                reason: format!("expected {} values, got {}", INPUT_LEN, self.0.len()),
            });
        }
        if let Some(v) = self.0.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(Error::CorruptInput {
                reason: format!("value {v} outside [0, 1]"),
            });
        }
        Ok(())
    }

    /// Logical shape, (batch, height, width, channels).
    pub fn shape(&self) -> [usize; 4] {
        INPUT_SHAPE
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_full_unit_range_buffer() {
        let t = NormalizedTensor::from_vec(vec![0.5; INPUT_LEN]).unwrap();
        assert_eq!(t.shape(), [1, 100, 100, 1]);
        assert_eq!(t.as_slice().len(), INPUT_LEN);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = NormalizedTensor::from_vec(vec![0.0; INPUT_LEN - 1]).unwrap_err();
        assert!(matches!(err, Error::CorruptInput { .. }));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut data = vec![0.0; INPUT_LEN];
        data[42] = 1.25;
        assert!(matches!(
            NormalizedTensor::from_vec(data),
            Err(Error::CorruptInput { .. })
        ));

        let mut data = vec![0.0; INPUT_LEN];
        data[7] = f32::NAN;
        assert!(matches!(
            NormalizedTensor::from_vec(data),
            Err(Error::CorruptInput { .. })
        ));
    }

    #[test]
    fn boundary_values_are_valid() {
        let mut data = vec![0.0; INPUT_LEN];
        data[0] = 1.0;
        assert!(NormalizedTensor::from_vec(data).is_ok());
    }
}
