use crate::domain::errors::{AppError, DatasetResult};
use std::sync::Arc;

/// Domain entity - ordered, immutable sequence of samples.
///
/// Samples are expected roughly in `[-100, 100]`; nothing clamps them, so
/// out-of-range values are drawn outside the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Arc<[f64]>,
}

impl Dataset {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples: samples.into() }
    }

    /// Parse a JSON array of numbers, e.g. a bundled `data.json`.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let samples: Vec<f64> = serde_json::from_str(json)
            .map_err(|e| AppError::DatasetError(format!("expected a JSON array of numbers: {}", e)))?;

        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AppError::DatasetError(format!("sample {} is not finite", index)));
        }

        Ok(Self::new(samples))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}
