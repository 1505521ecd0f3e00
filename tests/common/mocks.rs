use predictimmo::{
    Error, Result,
    model::{FeatureFrame, Regressor},
};
use std::sync::{Arc, Mutex};

/// Mock regressor returning a fixed prediction matrix and recording its inputs
#[derive(Debug, Clone)]
pub struct MockRegressor {
    pub output: Vec<Vec<f64>>,
    pub error: Option<String>,
    pub calls: Arc<Mutex<Vec<FeatureFrame>>>,
}

impl MockRegressor {
    pub fn new(output: Vec<Vec<f64>>) -> Self {
        Self {
            output,
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<FeatureFrame> {
        self.calls.lock().unwrap().clone()
    }
}

impl Regressor for MockRegressor {
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Vec<f64>>> {
        self.calls.lock().unwrap().push(features.clone());

        match &self.error {
            Some(error) => Err(Error::model(error.clone())),
            None => Ok(self.output.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
