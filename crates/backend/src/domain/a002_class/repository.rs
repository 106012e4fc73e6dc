use contracts::domain::a002_class::Class;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero: String,
    pub nombre: String,
    pub departamento_numero: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Class {
    fn from(m: Model) -> Self {
        Class {
            code: m.numero,
            name: m.nombre,
            department_code: m.departamento_numero,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Class>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Numero)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Классы департамента. Существование департамента не проверяется.
pub async fn list_by_department<C: ConnectionTrait>(
    db: &C,
    department_code: &str,
) -> Result<Vec<Class>, DbErr> {
    let items = Entity::find()
        .filter(Column::DepartamentoNumero.eq(department_code))
        .order_by_asc(Column::Numero)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_code<C: ConnectionTrait>(db: &C, code: &str) -> Result<Option<Class>, DbErr> {
    let result = Entity::find_by_id(code.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert<C: ConnectionTrait>(db: &C, class: &Class) -> Result<(), DbErr> {
    let active = ActiveModel {
        numero: Set(class.code.clone()),
        nombre: Set(class.name.clone()),
        departamento_numero: Set(class.department_code.clone()),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
