use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a003_family::Family;

use crate::domain::a003_family;
use crate::shared::errors::CatalogError;
use crate::shared::state::AppState;

/// GET /familias/:departamento_numero/:clase_numero
pub async fn list_by_class(
    State(state): State<AppState>,
    Path((department_code, class_code)): Path<(String, String)>,
) -> Result<Json<Vec<Family>>, CatalogError> {
    let items = a003_family::service::list_by_class(&state.db, &department_code, &class_code).await?;
    Ok(Json(items))
}
