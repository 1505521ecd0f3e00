mod frame;
mod linear;
mod loader;

pub use frame::{Column, FeatureFrame};
pub use linear::{FeatureSpec, LinearModel};
pub use loader::load;

use crate::Result;
use std::sync::Arc;

/// A trained regression model that maps a feature frame to a
/// `rows x targets` prediction matrix.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Vec<f64>>>;

    fn name(&self) -> &str;
}

/// Read-only model shared by every request handler.
pub type ModelHandle = Arc<dyn Regressor>;
