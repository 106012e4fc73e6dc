use super::repository;
use crate::shared::errors::CatalogError;
use contracts::domain::a001_department::Department;
use contracts::domain::a002_class::Class;
use contracts::domain::common::CatalogEntity;
use sea_orm::DatabaseConnection;

/// Классы департамента. Пустой список считается отсутствием данных (404).
pub async fn list_by_department(
    db: &DatabaseConnection,
    department_code: &str,
) -> Result<Vec<Class>, CatalogError> {
    let items = repository::list_by_department(db, department_code).await?;
    if items.is_empty() {
        return Err(CatalogError::NotFound(format!(
            "no classes found for {} {}",
            Department::element_name(),
            department_code
        )));
    }
    Ok(items)
}
