use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a002_class::Class;

use crate::domain::a002_class;
use crate::shared::errors::CatalogError;
use crate::shared::state::AppState;

/// GET /clases/:departamento_numero
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department_code): Path<String>,
) -> Result<Json<Vec<Class>>, CatalogError> {
    let items = a002_class::service::list_by_department(&state.db, &department_code).await?;
    Ok(Json(items))
}
