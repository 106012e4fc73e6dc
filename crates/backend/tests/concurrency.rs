use backend::domain::a004_article::service;
use backend::shared::data::db::initialize_database;
use backend::system::initialization::ensure_catalog_seeded;
use contracts::domain::a004_article::{ArticleCreateDto, ArticleUpdateDto};

fn lamp(sku: &str) -> ArticleCreateDto {
    ArticleCreateDto {
        sku: sku.into(),
        name: "Lámpara".into(),
        brand: "Luz".into(),
        model: "L-1".into(),
        department_code: "1".into(),
        class_code: "12".into(),
        family_code: "122".into(),
        stock: 100,
        quantity: 1,
    }
}

fn restock(stock: i64) -> ArticleUpdateDto {
    ArticleUpdateDto {
        stock: Some(stock),
        ..Default::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_on_file_database_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let db = initialize_database(&dir.path().join("catalog.db"), false)
        .await
        .unwrap();
    ensure_catalog_seeded(&db, None).await.unwrap();
    service::create(&db, lamp("L00001")).await.unwrap();

    let mut tasks = Vec::new();
    for stock in [10, 20, 30, 40] {
        let db = db.clone();
        tasks.push(tokio::spawn(async move {
            service::update(&db, "L00001", restock(stock)).await
        }));
    }
    let mut written = Vec::new();
    for task in tasks {
        let updated = task.await.unwrap().unwrap();
        written.push(updated.stock);
    }

    // последняя запись побеждает
    let stored = service::get(&db, "L00001").await.unwrap();
    assert!(written.contains(&stored.stock));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_of_same_sku_yield_one_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let db = initialize_database(&dir.path().join("catalog.db"), false)
        .await
        .unwrap();
    ensure_catalog_seeded(&db, None).await.unwrap();

    let first = tokio::spawn({
        let db = db.clone();
        async move { service::create(&db, lamp("L00002")).await }
    });
    let second = tokio::spawn({
        let db = db.clone();
        async move { service::create(&db, lamp("L00002")).await }
    });
    let results = [first.await.unwrap(), second.await.unwrap()];

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(backend::shared::errors::CatalogError::Duplicate(_))
    )));
}
