use anyhow::{Context, Result};
use chrono::Local;
use contracts::domain::a001_department::Department;
use contracts::domain::a002_class::Class;
use contracts::domain::a003_family::Family;
use contracts::domain::a004_article::Article;
use contracts::domain::common::CatalogEntity;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_export_csv::{ExportCsv, ExportResponse};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{a001_department, a002_class, a003_family, a004_article};

const DEPARTMENT_COLUMNS: &[&str] = &["numero", "nombre"];
const CLASS_COLUMNS: &[&str] = &["numero", "nombre", "departamento_numero"];
const FAMILY_COLUMNS: &[&str] = &["numero", "nombre", "departamento_numero", "clase_numero"];
const ARTICLE_COLUMNS: &[&str] = &[
    "sku",
    "articulo",
    "marca",
    "modelo",
    "departamento_numero",
    "clase_numero",
    "familia_numero",
    "fecha_alta",
    "stock",
    "cantidad",
    "descontinuado",
    "fecha_baja",
];

/// Создать новый файл `{dir}/{table}_{stamp}.csv`, не трогая существующие
///
/// A second export within the same second gets a `_1`, `_2`, ... suffix.
fn create_table_file(dir: &Path, table: &str, stamp: &str) -> Result<(PathBuf, File)> {
    for attempt in 0u32.. {
        let name = match attempt {
            0 => format!("{}_{}.csv", table, stamp),
            n => format!("{}_{}_{}.csv", table, stamp, n),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("cannot create {}", path.display()))
            }
        }
    }
    anyhow::bail!("no free file name for {} in {}", table, dir.display())
}

/// Записать одну таблицу в `{dir}/{table}_{stamp}.csv`
///
/// The header row is written even when the table is empty.
fn write_table<T: CatalogEntity + Serialize>(
    dir: &Path,
    stamp: &str,
    columns: &[&str],
    rows: &[T],
) -> Result<PathBuf> {
    let (path, file) = create_table_file(dir, T::table_name(), stamp)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(columns)?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("cannot write {} {}", T::element_name(), row.code()))?;
    }
    writer.flush()?;

    tracing::debug!("{}: {} rows -> {}", T::full_name(), rows.len(), path.display());
    Ok(path)
}

/// Выгрузка всех таблиц каталога в CSV
pub async fn export_all(db: &DatabaseConnection, dir: &Path) -> Result<ExportResponse> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create export directory {}", dir.display()))?;

    let departments = a001_department::repository::list_all(db).await?;
    let classes = a002_class::repository::list_all(db).await?;
    let families = a003_family::repository::list_all(db).await?;
    let articles = a004_article::repository::list_all(db).await?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let written = vec![
        write_table::<Department>(dir, &stamp, DEPARTMENT_COLUMNS, &departments)?,
        write_table::<Class>(dir, &stamp, CLASS_COLUMNS, &classes)?,
        write_table::<Family>(dir, &stamp, FAMILY_COLUMNS, &families)?,
        write_table::<Article>(dir, &stamp, ARTICLE_COLUMNS, &articles)?,
    ];

    tracing::info!(
        "{}: {} files written to {}",
        ExportCsv::full_name(),
        written.len(),
        dir.display()
    );
    Ok(ExportResponse {
        files: written
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table::<Article>(dir.path(), "20240101_000000", ARTICLE_COLUMNS, &[])
            .unwrap();
        assert!(path.ends_with("articulos_20240101_000000.csv"));
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.trim_end(), ARTICLE_COLUMNS.join(","));
    }

    #[test]
    fn test_department_rows() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![Department::new("1", "Domésticos")];
        let path = write_table(dir.path(), "s", DEPARTMENT_COLUMNS, &rows).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, "numero,nombre\n1,Domésticos\n");
    }

    #[test]
    fn test_same_stamp_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let first = vec![Department::new("1", "Uno")];
        let second = vec![Department::new("2", "Dos")];

        let a = write_table(dir.path(), "20240101_120000", DEPARTMENT_COLUMNS, &first).unwrap();
        let b = write_table(dir.path(), "20240101_120000", DEPARTMENT_COLUMNS, &second).unwrap();

        assert_ne!(a, b);
        assert!(b.ends_with("departamentos_20240101_120000_1.csv"));
        assert_eq!(std::fs::read_to_string(a).unwrap(), "numero,nombre\n1,Uno\n");
        assert_eq!(std::fs::read_to_string(b).unwrap(), "numero,nombre\n2,Dos\n");
    }
}
