use backend::domain::{a001_department, a002_class, a003_family};
use backend::shared::data::db::{ensure_schema, open_in_memory};
use backend::system::initialization::ensure_catalog_seeded;
use sea_orm::DatabaseConnection;

async fn counts(db: &DatabaseConnection) -> (usize, usize, usize) {
    (
        a001_department::repository::list_all(db).await.unwrap().len(),
        a002_class::repository::list_all(db).await.unwrap().len(),
        a003_family::repository::list_all(db).await.unwrap().len(),
    )
}

#[tokio::test]
async fn bootstrap_is_idempotent() {
    let db = open_in_memory().await.unwrap();
    assert!(ensure_catalog_seeded(&db, None).await.unwrap());
    let after_first = counts(&db).await;
    assert_eq!(after_first, (2, 4, 8));

    ensure_schema(&db).await.unwrap();
    assert!(!ensure_catalog_seeded(&db, None).await.unwrap());
    assert_eq!(counts(&db).await, after_first);
}

#[tokio::test]
async fn bootstrap_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(
        &path,
        r#"{
            "departamentos": [{"numero": "3", "nombre": "Jardín"}],
            "clases": [{"numero": "31", "nombre": "Macetas", "departamento_numero": "3"}],
            "familias": [{"numero": "311", "nombre": "Barro", "departamento_numero": "3", "clase_numero": "31"}]
        }"#,
    )
    .unwrap();

    let db = open_in_memory().await.unwrap();
    assert!(ensure_catalog_seeded(&db, Some(&path)).await.unwrap());
    assert_eq!(counts(&db).await, (1, 1, 1));
    let family = a003_family::repository::get_by_code(&db, "311")
        .await
        .unwrap()
        .unwrap();
    assert!(family.belongs_to("3", "31"));
}

#[tokio::test]
async fn malformed_seed_leaves_catalog_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(
        &path,
        r#"{
            "departamentos": [{"numero": "3", "nombre": "Jardín"}],
            "familias": [{"numero": "311", "nombre": "Barro", "departamento_numero": "3", "clase_numero": "31"}]
        }"#,
    )
    .unwrap();

    let db = open_in_memory().await.unwrap();
    assert!(ensure_catalog_seeded(&db, Some(&path)).await.is_err());
    assert_eq!(counts(&db).await, (0, 0, 0));
}
