use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::path::Path;

use crate::domain::{a001_department, a002_class, a003_family};
use crate::shared::data::seed::SeedDataset;

/// Заполнить классификацию начальными данными, если департаментов еще нет
///
/// Returns `true` when the dataset was written. The whole load runs in one
/// transaction: on any failure nothing is persisted.
pub async fn ensure_catalog_seeded(db: &DatabaseConnection, seed_path: Option<&Path>) -> Result<bool> {
    let count = a001_department::repository::count(db).await?;
    if count > 0 {
        tracing::info!(
            "Catalog already contains {} departments, skipping seed",
            count
        );
        return Ok(false);
    }

    tracing::info!("No departments found. Loading classification seed...");
    let dataset = SeedDataset::load(seed_path)?;

    let txn = db.begin().await?;
    for department in &dataset.departamentos {
        a001_department::repository::insert(&txn, department)
            .await
            .with_context(|| format!("seed: cannot insert department {}", department.code))?;
    }
    for class in &dataset.clases {
        a002_class::repository::insert(&txn, class)
            .await
            .with_context(|| format!("seed: cannot insert class {}", class.code))?;
    }
    for family in &dataset.familias {
        a003_family::repository::insert(&txn, family)
            .await
            .with_context(|| format!("seed: cannot insert family {}", family.code))?;
    }
    txn.commit().await.context("seed: commit failed")?;

    tracing::info!(
        "Seed loaded: {} departments, {} classes, {} families",
        dataset.departamentos.len(),
        dataset.clases.len(),
        dataset.familias.len()
    );
    Ok(true)
}
