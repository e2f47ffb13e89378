use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment or refund record attached to an order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "Transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub transaction_id: String,
    pub user_id: String,
    pub order_id: String,
    pub amount: f64,
    pub transaction_type: String,
    pub status: String,
    pub payment_method: String,
    pub transaction_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
