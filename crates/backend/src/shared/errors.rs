use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::ApiError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Ошибки операций каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Нарушение бизнес-правила или формата поля
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Запись с таким ключом уже существует
    #[error("{0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(DbErr),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn not_found(element: &str, code: &str) -> Self {
        CatalogError::NotFound(format!("{} not found: {}", element, code))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Duplicate(_) => StatusCode::CONFLICT,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        match self {
            CatalogError::Validation(msg) => ApiError::validation(msg.clone()),
            CatalogError::NotFound(msg) => ApiError::not_found(msg.clone()),
            CatalogError::Duplicate(msg) => ApiError::conflict(msg.clone()),
            CatalogError::Database(e) => ApiError::internal("database_error", e.to_string()),
            CatalogError::Internal(e) => ApiError::internal("internal_error", format!("{:#}", e)),
        }
    }
}

/// Constraint violations reported by SQLite become domain errors,
/// everything else stays a database error.
impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => CatalogError::Duplicate(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                CatalogError::Validation(format!("classification reference is invalid: {}", msg))
            }
            _ => CatalogError::Database(err),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }
        (status, Json(self.to_api_error())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CatalogError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::not_found("article", "A1").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Duplicate("x".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CatalogError::from(DbErr::Custom("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_body() {
        let body = CatalogError::not_found("article", "A00001").to_api_error();
        assert_eq!(body.error, "not_found");
        assert_eq!(body.message, "article not found: A00001");
    }

    async fn seeded_db() -> sea_orm::DatabaseConnection {
        let db = crate::shared::data::db::open_in_memory().await.unwrap();
        crate::system::initialization::ensure_catalog_seeded(&db, None)
            .await
            .unwrap();
        db
    }

    fn article(sku: &str, family_code: &str) -> contracts::domain::a004_article::Article {
        use contracts::domain::a004_article::{Article, ArticleCreateDto};
        let dto = ArticleCreateDto {
            sku: sku.into(),
            name: "Silla".into(),
            department_code: "1".into(),
            class_code: "11".into(),
            family_code: family_code.into(),
            stock: 5,
            quantity: 1,
            ..Default::default()
        };
        Article::new_for_insert(dto, chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[tokio::test]
    async fn test_unique_violation_is_duplicate() {
        use crate::domain::a004_article::repository;
        let db = seeded_db().await;
        repository::insert(&db, &article("A1", "112")).await.unwrap();

        let err = CatalogError::from(
            repository::insert(&db, &article("A1", "111"))
                .await
                .unwrap_err(),
        );
        assert!(matches!(err, CatalogError::Duplicate(_)), "{:?}", err);
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_foreign_key_violation_is_validation() {
        use crate::domain::a004_article::repository;
        let db = seeded_db().await;

        let err = CatalogError::from(
            repository::insert(&db, &article("A2", "999"))
                .await
                .unwrap_err(),
        );
        assert!(matches!(err, CatalogError::Validation(_)), "{:?}", err);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(repository::get_by_sku(&db, "A2").await.unwrap().is_none());
    }
}
