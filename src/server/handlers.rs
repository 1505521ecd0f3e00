use super::{page, types::PageContext};
use crate::{
    Error,
    config::Mode,
    estimate::{EstimateRequest, predict_estimate},
    model::ModelHandle,
};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub model: ModelHandle,
    pub mode: Mode,
}

impl AppState {
    pub fn new(model: ModelHandle, mode: Mode) -> Self {
        Self { model, mode }
    }
}

/// Request failure rendered as a generic 500 page.
#[derive(Debug)]
pub struct ServerError {
    error: Error,
    mode: Mode,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let detail = match self.mode {
            Mode::Testing => Some(self.error.to_string()),
            Mode::Production => None,
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(page::render_error(detail.as_deref())),
        )
            .into_response()
    }
}

pub async fn index() -> Html<String> {
    Html(page::render_index(&PageContext::default()))
}

pub async fn estimate(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, ServerError> {
    debug!("Received estimate form: {:?}", fields);
    let request: EstimateRequest = fields.into_iter().collect();

    match predict_estimate(state.model.as_ref(), &request) {
        Ok(estimated_value) => {
            info!(
                "Estimated {} for housing_type={:?} surface={:?} rooms={:?}",
                estimated_value, request.housing_type, request.surface, request.rooms
            );
            Ok(Html(page::render_index(&PageContext::with_estimate(
                request,
                estimated_value,
            ))))
        }
        Err(e) => {
            error!("Failed to estimate {:?}: {}", request, e);
            Err(ServerError {
                error: e,
                mode: state.mode,
            })
        }
    }
}
