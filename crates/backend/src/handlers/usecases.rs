use axum::extract::State;
use axum::Json;
use contracts::usecases::u501_export_csv::response::ExportResponse;

use crate::shared::errors::CatalogError;
use crate::shared::state::AppState;
use crate::usecases::u501_export_csv;

/// POST /export/csv
pub async fn export_csv(State(state): State<AppState>) -> Result<Json<ExportResponse>, CatalogError> {
    let response = u501_export_csv::export_all(&state.db, &state.export_dir).await?;
    Ok(Json(response))
}
