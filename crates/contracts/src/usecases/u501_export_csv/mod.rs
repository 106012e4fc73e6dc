pub mod response;

pub use response::ExportResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ExportCsv;

impl UseCaseMetadata for ExportCsv {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "export_csv"
    }

    fn display_name() -> &'static str {
        "Generar CSV"
    }

    fn description() -> &'static str {
        "Выгрузка всех таблиц каталога в CSV-файлы с меткой времени"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ExportCsv::full_name(), "u501_export_csv");
    }
}
