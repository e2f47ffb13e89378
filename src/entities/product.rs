use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog product. Boolean flags are stored as `0`/`1` integers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "Product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    pub seller_id: String,
    pub package_id: String,
    pub review_id: String,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub price: Option<f64>,
    pub old_price: Option<f64>,
    pub quantity: Option<i32>,
    pub rating: Option<f64>,
    pub quality_type: Option<String>,
    pub highlights: Option<String>,
    pub is_imported: Option<i32>,
    #[sea_orm(column_name = "isPopular")]
    pub is_popular: Option<i32>,
    pub is_out_of_stock: Option<i32>,
    pub fav_count: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub terms_and_conditions: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
