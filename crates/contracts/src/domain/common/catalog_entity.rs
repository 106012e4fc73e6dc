use super::CodeRule;

/// Трейт для записей каталога
///
/// Каждая запись идентифицируется неизменяемым кодом и хранится в своей таблице.
pub trait CatalogEntity {
    /// Код записи (первичный ключ)
    fn code(&self) -> &str;

    // ============================================================================
    // Метаданные сущности (статические данные)
    // ============================================================================

    /// Индекс сущности в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя таблицы в БД (например, "departamentos")
    fn table_name() -> &'static str;

    /// Имя элемента для сообщений (например, "department")
    fn element_name() -> &'static str;

    /// Правило формата кода
    fn code_rule() -> CodeRule;

    /// Полное имя сущности (например, "a001_departamentos")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::table_name())
    }

    /// Проверить формат кода записи
    fn validate_code(&self) -> Result<(), String> {
        Self::code_rule().check(Self::element_name(), self.code())
    }
}
