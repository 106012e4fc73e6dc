use serde::{Deserialize, Serialize};

/// Результат выгрузки каталога в CSV
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportResponse {
    /// Пути к созданным файлам, по одному на таблицу
    pub files: Vec<String>,
}
