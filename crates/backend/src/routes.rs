use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001-A003 CLASSIFICATION (read only)
        // ========================================
        .route("/departamentos", get(handlers::a001_department::list_all))
        .route("/departamentos/", get(handlers::a001_department::list_all))
        .route(
            "/clases/:departamento_numero",
            get(handlers::a002_class::list_by_department),
        )
        .route(
            "/familias/:departamento_numero/:clase_numero",
            get(handlers::a003_family::list_by_class),
        )
        // ========================================
        // A004 ARTICLES
        // ========================================
        .route("/articulos", post(handlers::a004_article::create))
        .route("/articulos/", post(handlers::a004_article::create))
        .route(
            "/articulos/:sku",
            get(handlers::a004_article::get_by_sku)
                .put(handlers::a004_article::update)
                .delete(handlers::a004_article::delete),
        )
        // ========================================
        // USECASES
        // ========================================
        .route("/export/csv", post(handlers::usecases::export_csv))
        .with_state(state)
}
