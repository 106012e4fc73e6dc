use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

/// Catalog tables in dependency order: every table references only tables above it.
const SCHEMA: &[(&str, &str)] = &[
    (
        "departamentos",
        r#"
        CREATE TABLE departamentos (
            numero TEXT PRIMARY KEY NOT NULL,
            nombre TEXT NOT NULL
        );
    "#,
    ),
    (
        "clases",
        r#"
        CREATE TABLE clases (
            numero TEXT PRIMARY KEY NOT NULL,
            nombre TEXT NOT NULL,
            departamento_numero TEXT NOT NULL REFERENCES departamentos(numero)
        );
    "#,
    ),
    (
        "familias",
        r#"
        CREATE TABLE familias (
            numero TEXT PRIMARY KEY NOT NULL,
            nombre TEXT NOT NULL,
            departamento_numero TEXT NOT NULL REFERENCES departamentos(numero),
            clase_numero TEXT NOT NULL REFERENCES clases(numero)
        );
    "#,
    ),
    (
        "articulos",
        r#"
        CREATE TABLE articulos (
            sku TEXT PRIMARY KEY NOT NULL,
            articulo TEXT NOT NULL DEFAULT '',
            marca TEXT NOT NULL DEFAULT '',
            modelo TEXT NOT NULL DEFAULT '',
            departamento_numero TEXT NOT NULL REFERENCES departamentos(numero),
            clase_numero TEXT NOT NULL REFERENCES clases(numero),
            familia_numero TEXT NOT NULL REFERENCES familias(numero),
            fecha_alta TEXT NOT NULL,
            stock INTEGER NOT NULL DEFAULT 0,
            cantidad INTEGER NOT NULL DEFAULT 0,
            descontinuado INTEGER NOT NULL DEFAULT 0,
            fecha_baja TEXT NOT NULL
        );
    "#,
    ),
];

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open (or create) the catalog database file and make sure the schema exists.
///
/// SQLite foreign keys are enabled per connection by sqlx. The pool holds a
/// single connection: transactions queue for it instead of racing for the
/// SQLite write lock (deferred `BEGIN` would fail with SQLITE_BUSY).
pub async fn initialize_database(
    db_file: &Path,
    reset_on_startup: bool,
) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database: {}", absolute_path.display());

    let mut options = ConnectOptions::new(db_url);
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;

    if reset_on_startup {
        drop_schema(&conn).await?;
    }
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database with the catalog schema.
///
/// The pool is pinned to one connection so every session sees the same data.
pub async fn open_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

async fn table_exists<C: ConnectionTrait>(conn: &C, table_name: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [table_name.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

/// Create missing catalog tables
pub async fn ensure_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    for (table_name, create_sql) in SCHEMA {
        if table_exists(conn, table_name).await? {
            tracing::debug!("Table {} already exists", table_name);
            continue;
        }
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

/// Drop all catalog tables, children first
pub async fn drop_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    tracing::warn!("reset_on_startup is enabled: dropping all catalog tables");
    for (table_name, _) in SCHEMA.iter().rev() {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("DROP TABLE IF EXISTS {};", table_name),
        ))
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sqlite_url() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/db/catalog.db")),
            "sqlite:///var/db/catalog.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\catalog.db")),
            "sqlite:///C:/data/catalog.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let conn = open_in_memory().await.unwrap();
        ensure_schema(&conn).await.unwrap();
        for (table_name, _) in SCHEMA {
            assert!(table_exists(&conn, table_name).await.unwrap());
        }
        drop_schema(&conn).await.unwrap();
        assert!(!table_exists(&conn, "articulos").await.unwrap());
    }

    #[tokio::test]
    async fn test_initialize_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.db");
        let conn = initialize_database(&path, false).await.unwrap();
        assert!(path.exists());
        assert!(table_exists(&conn, "familias").await.unwrap());
    }

    #[tokio::test]
    async fn test_reset_on_startup_recreates_empty_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        let select_departments = "SELECT numero FROM departamentos;";

        let conn = initialize_database(&path, false).await.unwrap();
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "INSERT INTO departamentos (numero, nombre) VALUES ('1', 'Uno');".to_string(),
        ))
        .await
        .unwrap();
        conn.close().await.unwrap();

        // без сброса данные сохраняются
        let conn = initialize_database(&path, false).await.unwrap();
        let rows = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, select_departments.to_string()))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        conn.close().await.unwrap();

        let conn = initialize_database(&path, true).await.unwrap();
        for (table_name, _) in SCHEMA {
            assert!(table_exists(&conn, table_name).await.unwrap());
        }
        let rows = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, select_departments.to_string()))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
