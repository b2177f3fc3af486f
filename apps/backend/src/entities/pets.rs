use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birthday: String,
    pub domain: String,
    pub gender: String,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    #[sea_orm(unique)]
    pub microchip: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub photo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
