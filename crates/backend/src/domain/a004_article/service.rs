use super::repository;
use crate::domain::{a001_department, a002_class, a003_family};
use crate::shared::errors::CatalogError;
use chrono::{Local, NaiveDate};
use contracts::domain::a004_article::{Article, ArticleCreateDto, ArticleUpdateDto};
use contracts::domain::common::CatalogEntity;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

/// Локальная дата сервера: ею же помечаются файлы выгрузки
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Проверка цепочки департамент -> класс -> семейство
pub async fn ensure_classification<C: ConnectionTrait>(
    db: &C,
    department_code: &str,
    class_code: &str,
    family_code: &str,
) -> Result<(), CatalogError> {
    if a001_department::repository::get_by_code(db, department_code)
        .await?
        .is_none()
    {
        return Err(CatalogError::Validation(format!(
            "department {} does not exist",
            department_code
        )));
    }

    match a002_class::repository::get_by_code(db, class_code).await? {
        Some(class) if class.belongs_to(department_code) => {}
        Some(_) => {
            return Err(CatalogError::Validation(format!(
                "class {} does not belong to department {}",
                class_code, department_code
            )))
        }
        None => {
            return Err(CatalogError::Validation(format!(
                "class {} does not exist",
                class_code
            )))
        }
    }

    match a003_family::repository::get_by_code(db, family_code).await? {
        Some(family) if family.belongs_to(department_code, class_code) => Ok(()),
        Some(_) => Err(CatalogError::Validation(format!(
            "family {} does not belong to department {} and class {}",
            family_code, department_code, class_code
        ))),
        None => Err(CatalogError::Validation(format!(
            "family {} does not exist",
            family_code
        ))),
    }
}

/// Создание артикула
pub async fn create(
    db: &DatabaseConnection,
    dto: ArticleCreateDto,
) -> Result<Article, CatalogError> {
    dto.validate().map_err(CatalogError::Validation)?;

    let txn = db.begin().await?;
    if repository::get_by_sku(&txn, &dto.sku).await?.is_some() {
        return Err(CatalogError::Duplicate(format!(
            "{} already exists: {}",
            Article::element_name(),
            dto.sku
        )));
    }
    ensure_classification(&txn, &dto.department_code, &dto.class_code, &dto.family_code).await?;

    let aggregate = Article::new_for_insert(dto, today());
    let created = repository::insert(&txn, &aggregate).await?;
    txn.commit().await?;

    tracing::info!("{}: created {}", Article::full_name(), created.sku);
    Ok(created)
}

pub async fn get(db: &DatabaseConnection, sku: &str) -> Result<Article, CatalogError> {
    repository::get_by_sku(db, sku)
        .await?
        .ok_or_else(|| CatalogError::not_found(Article::element_name(), sku))
}

/// Частичное обновление. Неизвестный SKU -> NotFound.
pub async fn update(
    db: &DatabaseConnection,
    sku: &str,
    dto: ArticleUpdateDto,
) -> Result<Article, CatalogError> {
    let txn = db.begin().await?;
    let mut aggregate = repository::get_by_sku(&txn, sku)
        .await?
        .ok_or_else(|| CatalogError::not_found(Article::element_name(), sku))?;

    aggregate
        .apply_update(&dto, today())
        .map_err(CatalogError::Validation)?;

    if dto.touches_classification() {
        let (department, class, family) = aggregate.classification();
        ensure_classification(&txn, department, class, family).await?;
    }

    let updated = repository::update(&txn, &aggregate).await?;
    txn.commit().await?;

    tracing::info!("{}: updated {}", Article::full_name(), updated.sku);
    Ok(updated)
}

/// Удаление, возвращает удаленную запись
pub async fn delete(db: &DatabaseConnection, sku: &str) -> Result<Article, CatalogError> {
    let txn = db.begin().await?;
    let existing = repository::get_by_sku(&txn, sku)
        .await?
        .ok_or_else(|| CatalogError::not_found(Article::element_name(), sku))?;
    repository::delete(&txn, sku).await?;
    txn.commit().await?;

    tracing::info!("{}: deleted {}", Article::full_name(), existing.sku);
    Ok(existing)
}
