use chrono::NaiveDate;
use contracts::domain::a004_article::Article;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articulos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sku: String,
    pub articulo: String,
    pub marca: String,
    pub modelo: String,
    pub departamento_numero: String,
    pub clase_numero: String,
    pub familia_numero: String,
    pub fecha_alta: NaiveDate,
    pub stock: i64,
    pub cantidad: i64,
    pub descontinuado: bool,
    pub fecha_baja: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Article {
    fn from(m: Model) -> Self {
        Article {
            sku: m.sku,
            name: m.articulo,
            brand: m.marca,
            model: m.modelo,
            department_code: m.departamento_numero,
            class_code: m.clase_numero,
            family_code: m.familia_numero,
            created_on: m.fecha_alta,
            stock: m.stock,
            quantity: m.cantidad,
            discontinued: m.descontinuado,
            discontinued_on: m.fecha_baja,
        }
    }
}

fn to_active(article: &Article) -> ActiveModel {
    ActiveModel {
        sku: Set(article.sku.clone()),
        articulo: Set(article.name.clone()),
        marca: Set(article.brand.clone()),
        modelo: Set(article.model.clone()),
        departamento_numero: Set(article.department_code.clone()),
        clase_numero: Set(article.class_code.clone()),
        familia_numero: Set(article.family_code.clone()),
        fecha_alta: Set(article.created_on),
        stock: Set(article.stock),
        cantidad: Set(article.quantity),
        descontinuado: Set(article.discontinued),
        fecha_baja: Set(article.discontinued_on),
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Article>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Sku)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_sku<C: ConnectionTrait>(db: &C, sku: &str) -> Result<Option<Article>, DbErr> {
    let result = Entity::find_by_id(sku.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

/// Вставка полностью заполненной записи
pub async fn insert<C: ConnectionTrait>(db: &C, article: &Article) -> Result<Article, DbErr> {
    Entity::insert(to_active(article)).exec(db).await?;
    Ok(article.clone())
}

/// Перезапись всех полей по SKU
pub async fn update<C: ConnectionTrait>(db: &C, article: &Article) -> Result<Article, DbErr> {
    let model = to_active(article).update(db).await?;
    Ok(model.into())
}

/// Returns true if a row was removed
pub async fn delete<C: ConnectionTrait>(db: &C, sku: &str) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(sku.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
