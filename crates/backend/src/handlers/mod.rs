pub mod a001_department;
pub mod a002_class;
pub mod a003_family;
pub mod a004_article;
pub mod usecases;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::shared::errors::CatalogError;

/// Malformed or mistyped JSON bodies are validation errors (400), not 422
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, CatalogError> {
    body.map(|Json(v)| v)
        .map_err(|rejection| CatalogError::Validation(rejection.body_text()))
}
