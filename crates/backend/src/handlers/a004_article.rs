use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a004_article::{Article, ArticleCreateDto, ArticleUpdateDto};

use super::json_body;
use crate::domain::a004_article;
use crate::shared::errors::CatalogError;
use crate::shared::state::AppState;

/// POST /articulos/
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ArticleCreateDto>, JsonRejection>,
) -> Result<Json<Article>, CatalogError> {
    let dto = json_body(body)?;
    let created = a004_article::service::create(&state.db, dto).await?;
    Ok(Json(created))
}

/// GET /articulos/:sku
pub async fn get_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Article>, CatalogError> {
    Ok(Json(a004_article::service::get(&state.db, &sku).await?))
}

/// PUT /articulos/:sku
pub async fn update(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    body: Result<Json<ArticleUpdateDto>, JsonRejection>,
) -> Result<Json<Article>, CatalogError> {
    let dto = json_body(body)?;
    let updated = a004_article::service::update(&state.db, &sku, dto).await?;
    Ok(Json(updated))
}

/// DELETE /articulos/:sku
pub async fn delete(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Article>, CatalogError> {
    Ok(Json(a004_article::service::delete(&state.db, &sku).await?))
}
