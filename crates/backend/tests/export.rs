mod common;

use axum::http::{Method, StatusCode};
use common::{chair, TestApp};

#[tokio::test]
async fn export_writes_every_table() {
    let app = TestApp::spawn().await;
    app.create_article(chair("A00001")).await;

    let (status, body) = app.send(Method::POST, "/export/csv", None).await;
    assert_eq!(status, StatusCode::OK);

    let files: Vec<String> = body["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f.as_str().unwrap().to_string())
        .collect();
    assert_eq!(files.len(), 4);

    let expected_tables = ["departamentos_", "clases_", "familias_", "articulos_"];
    for (file, table) in files.iter().zip(expected_tables) {
        let path = std::path::Path::new(file);
        assert!(path.starts_with(app.export_dir.path()));
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(table), "{} should start with {}", name, table);
        assert!(name.ends_with(".csv"));
    }

    let departments = std::fs::read_to_string(&files[0]).unwrap();
    assert_eq!(departments.lines().count(), 3);
    assert_eq!(departments.lines().next(), Some("numero,nombre"));

    let articles = std::fs::read_to_string(&files[3]).unwrap();
    let mut lines = articles.lines();
    assert_eq!(
        lines.next(),
        Some("sku,articulo,marca,modelo,departamento_numero,clase_numero,familia_numero,fecha_alta,stock,cantidad,descontinuado,fecha_baja")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("A00001,Silla roble,Muebles MX,SR-2024,1,11,112,"));
    assert!(row.ends_with(",10,4,0,1900-01-01"));
    assert!(lines.next().is_none());
}
