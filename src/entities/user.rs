use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "User")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub address_id: Option<String>,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
    pub profile_url: Option<String>,
    pub coin: Option<i32>,
    pub timestamps: Option<DateTimeUtc>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns exposed by read queries; `password` never leaves the store.
pub const PUBLIC_COLUMNS: [Column; 8] = [
    Column::UserId,
    Column::AddressId,
    Column::UserName,
    Column::UserEmail,
    Column::UserPhone,
    Column::ProfileUrl,
    Column::Coin,
    Column::Timestamps,
];
