use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A placed order. `status` and `is_confirm` hold small integer codes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "Order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: String,
    pub user_id: String,
    pub product_id: String,
    pub address_id: String,
    pub seller_id: String,
    pub transaction_id: String,
    pub cart_id: String,
    pub quantity: Option<i32>,
    pub cost: Option<f64>,
    pub is_confirm: Option<i32>,
    pub status: Option<i32>,
    pub mobile_no: Option<String>,
    pub time_stamp: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
