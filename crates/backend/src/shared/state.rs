use sea_orm::DatabaseConnection;
use std::path::PathBuf;

/// Общее состояние обработчиков HTTP
#[derive(Clone)]
pub struct AppState {
    /// Пул соединений; каждая операция берет из него свою сессию
    pub db: DatabaseConnection,
    /// Каталог для выгрузки CSV
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(db: DatabaseConnection, export_dir: PathBuf) -> Self {
        Self { db, export_dir }
    }
}
