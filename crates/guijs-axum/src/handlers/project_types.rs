//! Project type handlers - listing and lookup.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::ProjectTypeDto;
use crate::error::HttpError;
use crate::state::AppState;

/// List every project type in index order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProjectTypeDto>>, HttpError> {
    let catalog = &state.catalog;
    let origin = &catalog.config().logo_origin;
    let records = catalog.get_all().await?;

    Ok(Json(
        records
            .iter()
            .map(|project_type| ProjectTypeDto::new(project_type, origin))
            .collect(),
    ))
}

/// Get a single project type by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectTypeDto>, HttpError> {
    let catalog = &state.catalog;
    let project_type = catalog
        .get_by_id(&id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Project type {id}")))?;

    Ok(Json(ProjectTypeDto::new(
        &project_type,
        &catalog.config().logo_origin,
    )))
}
