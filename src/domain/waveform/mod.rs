//! Waveform aggregate: the immutable sample dataset and the pixel-space value objects it is drawn with.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
