use axum::extract::State;
use axum::Json;
use contracts::domain::a001_department::Department;

use crate::domain::a001_department;
use crate::shared::errors::CatalogError;
use crate::shared::state::AppState;

/// GET /departamentos/
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Department>>, CatalogError> {
    let items = a001_department::service::list_all(&state.db).await?;
    Ok(Json(items))
}
