use super::repository;
use crate::shared::errors::CatalogError;
use contracts::domain::a003_family::Family;
use sea_orm::DatabaseConnection;

/// Семейства класса внутри департамента. Пустой список -> 404.
pub async fn list_by_class(
    db: &DatabaseConnection,
    department_code: &str,
    class_code: &str,
) -> Result<Vec<Family>, CatalogError> {
    let items = repository::list_by_class(db, department_code, class_code).await?;
    if items.is_empty() {
        return Err(CatalogError::NotFound(format!(
            "no families found for department {} and class {}",
            department_code, class_code
        )));
    }
    Ok(items)
}
