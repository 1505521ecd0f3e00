use super::{LinearModel, ModelHandle, Regressor};
use crate::{Error, Result};
use std::{path::Path, sync::Arc};
use tracing::{debug, info};

/// Loads the model artifact at `path`. Any failure here is fatal for the server.
pub async fn load(path: impl AsRef<Path>) -> Result<ModelHandle> {
    let path = path.as_ref();
    debug!("Loading model artifact from: {}", path.display());

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::model(format!("cannot read artifact {}: {}", path.display(), e))
    })?;

    let model: LinearModel = serde_json::from_str(&raw).map_err(|e| {
        Error::model(format!("corrupt artifact {}: {}", path.display(), e))
    })?;
    model.validate()?;

    info!(
        "Model '{}' loaded with {} features and {} target(s)",
        model.name(),
        model.features.len(),
        model.targets()
    );

    Ok(Arc::new(model))
}
