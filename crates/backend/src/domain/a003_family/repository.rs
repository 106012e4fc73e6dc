use contracts::domain::a003_family::Family;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "familias")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero: String,
    pub nombre: String,
    pub departamento_numero: String,
    pub clase_numero: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Family {
    fn from(m: Model) -> Self {
        Family {
            code: m.numero,
            name: m.nombre,
            department_code: m.departamento_numero,
            class_code: m.clase_numero,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Family>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Numero)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_class<C: ConnectionTrait>(
    db: &C,
    department_code: &str,
    class_code: &str,
) -> Result<Vec<Family>, DbErr> {
    let items = Entity::find()
        .filter(Column::DepartamentoNumero.eq(department_code))
        .filter(Column::ClaseNumero.eq(class_code))
        .order_by_asc(Column::Numero)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_code<C: ConnectionTrait>(db: &C, code: &str) -> Result<Option<Family>, DbErr> {
    let result = Entity::find_by_id(code.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert<C: ConnectionTrait>(db: &C, family: &Family) -> Result<(), DbErr> {
    let active = ActiveModel {
        numero: Set(family.code.clone()),
        nombre: Set(family.name.clone()),
        departamento_numero: Set(family.department_code.clone()),
        clase_numero: Set(family.class_code.clone()),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
