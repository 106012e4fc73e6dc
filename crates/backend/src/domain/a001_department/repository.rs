use contracts::domain::a001_department::Department;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departamentos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero: String,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Department {
    fn from(m: Model) -> Self {
        Department {
            code: m.numero,
            name: m.nombre,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Department>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Numero)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_code<C: ConnectionTrait>(
    db: &C,
    code: &str,
) -> Result<Option<Department>, DbErr> {
    let result = Entity::find_by_id(code.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}

pub async fn insert<C: ConnectionTrait>(db: &C, department: &Department) -> Result<(), DbErr> {
    let active = ActiveModel {
        numero: Set(department.code.clone()),
        nombre: Set(department.name.clone()),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
