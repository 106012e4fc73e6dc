#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use backend::routes::configure_routes;
use backend::shared::data::db::open_in_memory;
use backend::shared::state::AppState;
use backend::system::initialization::ensure_catalog_seeded;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub db: DatabaseConnection,
    pub router: Router,
    pub export_dir: TempDir,
}

impl TestApp {
    /// Fresh in-memory catalog with the embedded classification loaded
    pub async fn spawn() -> Self {
        let db = open_in_memory().await.unwrap();
        ensure_catalog_seeded(&db, None).await.unwrap();
        let export_dir = tempfile::tempdir().unwrap();
        let state = AppState::new(db.clone(), export_dir.path().join("csv"));
        Self {
            db,
            router: configure_routes(state),
            export_dir,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn create_article(&self, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, "/articulos/", Some(body)).await
    }
}

/// Valid article in Domésticos / Comedores / Sillas
pub fn chair(sku: &str) -> Value {
    json!({
        "sku": sku,
        "articulo": "Silla roble",
        "marca": "Muebles MX",
        "modelo": "SR-2024",
        "departamento_numero": "1",
        "clase_numero": "11",
        "familia_numero": "112",
        "stock": 10,
        "cantidad": 4
    })
}
