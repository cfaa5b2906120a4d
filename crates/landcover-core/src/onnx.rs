//! ONNX-backed model implementation (feature `onnx`).
//!
//! Wraps an ONNX Runtime session over the trained artifact. The session is
//! created once at load and reused for every call; access is serialized
//! with a mutex because the runtime is not assumed reentrant.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ort::session::{builder::GraphOptimizationLevel, Session};

use crate::classifier::Model;
use crate::error::Error;
use crate::tensor::{NormalizedTensor, INPUT_SIDE};

/// Fixed on-disk artifact path consumed at startup.
pub const MODEL_FILE: &str = "model_satellite.onnx";

/// The trained land-cover classifier, loaded from an ONNX artifact.
#[derive(Debug)]
pub struct OnnxModel {
    session: Mutex<Session>,
    path: PathBuf,
}

impl OnnxModel {
    /// Load the artifact at `path`. Any failure here is fatal to the
    /// enclosing operation: the pipeline cannot proceed without a model
    /// and never retries.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let unavailable = |e: ort::Error| Error::ModelUnavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let session = Session::builder()
            .map_err(unavailable)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(unavailable)?
            .with_intra_threads(1)
            .map_err(unavailable)?
            .commit_from_file(path)
            .map_err(unavailable)?;

        Ok(Self {
            session: Mutex::new(session),
            path: path.to_path_buf(),
        })
    }

    fn unavailable(&self, message: String) -> Error {
        Error::ModelUnavailable {
            path: self.path.clone(),
            message,
        }
    }
}

impl Model for OnnxModel {
    fn probabilities(&self, tensor: &NormalizedTensor) -> Result<Vec<f32>, Error> {
        let shape = [1_i64, INPUT_SIDE as i64, INPUT_SIDE as i64, 1];
        let input = ort::value::Value::from_array((
            shape.as_slice(),
            tensor.as_slice().to_vec().into_boxed_slice(),
        ))
        .map_err(|e| self.unavailable(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| self.unavailable("model session lock poisoned".into()))?;
        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| self.unavailable(e.to_string()))?;

        let (_, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| self.unavailable(e.to_string()))?;
        Ok(data.to_vec())
    }
}
