use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "Address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub address_id: String,
    /// Either `delivery_address` or `present_address`.
    pub address_type: String,
    pub country: Option<String>,
    pub division: Option<String>,
    pub district: Option<String>,
    pub upzilla: Option<String>,
    pub thana: Option<String>,
    pub union: Option<String>,
    pub post_office: Option<String>,
    pub postal_code: Option<i32>,
    pub village: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
