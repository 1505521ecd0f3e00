use crate::{
    Error, Result,
    model::{Column, FeatureFrame, Regressor},
};
use std::{fmt, str::FromStr};
use tracing::debug;

pub const TYPE_LOCAL: &str = "type_local";
pub const SURFACE_REELLE_BATI: &str = "surface_reelle_bati";
pub const NOMBRE_PIECES_PRINCIPALES: &str = "nombre_pieces_principales";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HousingType {
    House,
    Appartment,
}

impl HousingType {
    pub const ALL: [HousingType; 2] = [HousingType::House, HousingType::Appartment];

    /// Value submitted by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            HousingType::House => "house",
            HousingType::Appartment => "appartment",
        }
    }

    /// Category label the model was trained on.
    pub fn model_label(&self) -> &'static str {
        match self {
            HousingType::House => "Maison",
            HousingType::Appartment => "Appartement",
        }
    }
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HousingType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        HousingType::ALL
            .into_iter()
            .find(|housing_type| housing_type.as_str() == value)
            .ok_or_else(|| Error::UnknownHousingType {
                value: value.to_string(),
            })
    }
}

/// Raw form fields as submitted; nothing is checked until [`EstimateRequest::to_features`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateRequest {
    pub housing_type: Option<String>,
    pub surface: Option<String>,
    pub rooms: Option<String>,
}

/// Collects form pairs; the first value of a repeated field wins and unknown fields are ignored.
impl FromIterator<(String, String)> for EstimateRequest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut request = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "housing_type" => &mut request.housing_type,
                "surface" => &mut request.surface,
                "rooms" => &mut request.rooms,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        request
    }
}

impl EstimateRequest {
    pub fn new(
        housing_type: impl Into<String>,
        surface: impl Into<String>,
        rooms: impl Into<String>,
    ) -> Self {
        Self {
            housing_type: Some(housing_type.into()),
            surface: Some(surface.into()),
            rooms: Some(rooms.into()),
        }
    }

    /// Builds the single-row frame the model expects.
    pub fn to_features(&self) -> Result<FeatureFrame> {
        let housing_type: HousingType = required("housing_type", &self.housing_type)?.parse()?;
        let surface = parse_integer("surface", required("surface", &self.surface)?)?;
        let rooms = parse_integer("rooms", required("rooms", &self.rooms)?)?;

        FeatureFrame::new()
            .with_column(
                TYPE_LOCAL,
                Column::Categorical(vec![housing_type.model_label().to_string()]),
            )?
            .with_column(SURFACE_REELLE_BATI, Column::Numeric(vec![surface as f64]))?
            .with_column(NOMBRE_PIECES_PRINCIPALES, Column::Numeric(vec![rooms as f64]))
    }
}

/// Runs the model on one request and returns the truncated estimate.
pub fn predict_estimate(model: &dyn Regressor, request: &EstimateRequest) -> Result<i64> {
    let features = request.to_features()?;
    let predictions = model.predict(&features)?;
    debug!("Model '{}' predictions: {:?}", model.name(), predictions);

    first_estimate(&predictions)
}

/// Takes `predictions[0][0]` and truncates it toward zero.
pub fn first_estimate(predictions: &[Vec<f64>]) -> Result<i64> {
    let value = predictions
        .first()
        .and_then(|row| row.first())
        .copied()
        .ok_or_else(|| Error::prediction_shape("model returned an empty prediction matrix"))?;

    if !value.is_finite() {
        return Err(Error::prediction_shape(format!(
            "model returned a non-finite value: {value}"
        )));
    }

    let truncated = value.trunc();
    // 2^63 is exact in f64; i64::MAX is not
    if truncated < i64::MIN as f64 || truncated >= 9_223_372_036_854_775_808.0 {
        return Err(Error::prediction_shape(format!(
            "model returned a value outside the integer range: {value}"
        )));
    }

    Ok(truncated as i64)
}

fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    value.as_deref().ok_or_else(|| Error::MissingField {
        field: field.to_string(),
    })
}

fn parse_integer(field: &str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}
