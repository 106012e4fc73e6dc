use super::repository;
use crate::shared::errors::CatalogError;
use contracts::domain::a001_department::Department;
use sea_orm::DatabaseConnection;

/// Все департаменты, по возрастанию кода
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Department>, CatalogError> {
    Ok(repository::list_all(db).await?)
}
