use crate::estimate::EstimateRequest;

/// Values rendered into the index page.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub housing_type: Option<String>,
    pub surface: Option<String>,
    pub rooms: Option<String>,
    pub estimated_value: Option<i64>,
}

impl PageContext {
    pub fn with_estimate(request: EstimateRequest, estimated_value: i64) -> Self {
        Self {
            housing_type: request.housing_type,
            surface: request.surface,
            rooms: request.rooms,
            estimated_value: Some(estimated_value),
        }
    }
}
