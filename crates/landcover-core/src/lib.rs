//! Satellite land-cover classification pipeline.
//!
//! Three stages, composed sequentially with no shared mutable state:
//!   1. feature pipeline — image file → normalized (1, 100, 100, 1) tensor
//!      ([`features::extract`]);
//!   2. classifier adapter — tensor → one of four land-cover labels via an
//!      injected opaque model ([`classifier::Classifier`]);
//!   3. geo-annotator — label → optional fixed landmark marker
//!      ([`geo::annotate`]), rendered into a Leaflet map document
//!      ([`map::MapDocument`]).
//!
//! The real trained model lives behind the `onnx` feature; everything else
//! is pure and deterministic.

pub mod classifier;
pub mod error;
pub mod features;
pub mod geo;
pub mod map;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod tensor;
pub mod texture;

pub use classifier::{ClassLabel, Classifier, Model, NUM_CLASSES};
pub use error::Error;
pub use features::extract;
pub use geo::{annotate, MapAnnotation, MarkerColor};
pub use map::{MapDocument, MAP_CENTER, MAP_FILE, MAP_ZOOM};
pub use tensor::NormalizedTensor;
