use super::{Column, FeatureFrame, Regressor};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureSpec {
    /// One-hot encoded input: each known category contributes its own weights.
    Categorical {
        name: String,
        categories: BTreeMap<String, Vec<f64>>,
    },
    Numeric {
        name: String,
        coefficients: Vec<f64>,
    },
}

impl FeatureSpec {
    pub fn name(&self) -> &str {
        match self {
            FeatureSpec::Categorical { name, .. } => name,
            FeatureSpec::Numeric { name, .. } => name,
        }
    }
}

/// Multi-target linear regression over numeric and one-hot categorical features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default = "default_model_name")]
    pub name: String,
    pub intercept: Vec<f64>,
    pub features: Vec<FeatureSpec>,
}

impl LinearModel {
    pub fn targets(&self) -> usize {
        self.intercept.len()
    }

    /// Checks the artifact is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.intercept.is_empty() {
            return Err(Error::model("intercept must have at least one target"));
        }

        let targets = self.targets();
        let mut seen = HashSet::new();

        for feature in &self.features {
            if !seen.insert(feature.name()) {
                return Err(Error::model(format!(
                    "duplicate feature '{}'",
                    feature.name()
                )));
            }

            match feature {
                FeatureSpec::Numeric { name, coefficients } => {
                    if coefficients.len() != targets {
                        return Err(Error::model(format!(
                            "feature '{}' has {} coefficients, expected {}",
                            name,
                            coefficients.len(),
                            targets
                        )));
                    }
                }
                FeatureSpec::Categorical { name, categories } => {
                    if categories.is_empty() {
                        return Err(Error::model(format!(
                            "categorical feature '{name}' has no categories"
                        )));
                    }
                    for (category, weights) in categories {
                        if weights.len() != targets {
                            return Err(Error::model(format!(
                                "category '{}' of feature '{}' has {} weights, expected {}",
                                category,
                                name,
                                weights.len(),
                                targets
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn accumulate(feature: &FeatureSpec, column: &Column, rows: &mut [Vec<f64>]) -> Result<()> {
        match (feature, column) {
            (FeatureSpec::Numeric { coefficients, .. }, Column::Numeric(values)) => {
                for (row, value) in rows.iter_mut().zip(values) {
                    for (out, coefficient) in row.iter_mut().zip(coefficients) {
                        *out += coefficient * value;
                    }
                }
            }
            (FeatureSpec::Categorical { name, categories }, Column::Categorical(values)) => {
                for (row, value) in rows.iter_mut().zip(values) {
                    let weights = categories.get(value).ok_or_else(|| {
                        Error::model(format!("unknown category '{value}' for feature '{name}'"))
                    })?;
                    for (out, weight) in row.iter_mut().zip(weights) {
                        *out += weight;
                    }
                }
            }
            (feature, column) => {
                return Err(Error::model(format!(
                    "feature '{}' cannot be computed from a {} column",
                    feature.name(),
                    column.kind()
                )));
            }
        }

        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Vec<f64>>> {
        let mut rows = vec![self.intercept.clone(); features.num_rows()];

        for feature in &self.features {
            let column = features.column(feature.name()).ok_or_else(|| {
                Error::model(format!("missing column '{}'", feature.name()))
            })?;
            Self::accumulate(feature, column, &mut rows)?;
        }

        Ok(rows)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn default_model_name() -> String {
    "linear".to_string()
}
