#![allow(dead_code)]

use atorbazar::entities::{address, cart_item, order, product, transaction, user};
use atorbazar::{AppState, PaginationSettings, router};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use sea_orm::{
    ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Schema,
};
use sea_orm_migration::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_test_app(db: DatabaseConnection) -> Router {
    router(AppState::new(db, PaginationSettings::default()))
}

/// Issue a GET and decode the JSON body (`Value::Null` when there is none).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, headers, json)
}

/// `id` fields of the rows in a page envelope, in response order.
pub fn item_ids(body: &Value, id_field: &str) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item[id_field].as_str().unwrap().to_string())
        .collect()
}

pub async fn seed<E>(db: &DatabaseConnection, models: Vec<E::Model>)
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E>,
{
    E::insert_many(models.into_iter().map(IntoActiveModel::into_active_model))
        .exec_without_returning(db)
        .await
        .unwrap();
}

pub fn product(id: &str, price: f64, is_imported: i32) -> product::Model {
    product::Model {
        product_id: id.to_string(),
        seller_id: "seller-1".to_string(),
        package_id: "package-1".to_string(),
        review_id: "review-1".to_string(),
        product_name: Some(format!("Product {id}")),
        category: Some("Electronics".to_string()),
        sub_category: None,
        price: Some(price),
        old_price: None,
        quantity: Some(5),
        rating: None,
        quality_type: None,
        highlights: None,
        is_imported: Some(is_imported),
        is_popular: Some(0),
        is_out_of_stock: Some(0),
        fav_count: Some(0),
        description: None,
        terms_and_conditions: None,
    }
}

/// `count` products named `p01`, `p02`, ... in insertion order.
pub fn numbered_products(count: usize) -> Vec<product::Model> {
    (1..=count)
        .map(|n| product(&format!("p{n:02}"), 10.0, 0))
        .collect()
}

pub fn address(id: &str, address_type: &str, district: &str) -> address::Model {
    address::Model {
        address_id: id.to_string(),
        address_type: address_type.to_string(),
        country: Some("Bangladesh".to_string()),
        division: Some("Dhaka".to_string()),
        district: Some(district.to_string()),
        upzilla: None,
        thana: None,
        union: None,
        post_office: None,
        postal_code: Some(1207),
        village: None,
    }
}

pub fn order(id: &str, status: i32, is_confirm: i32) -> order::Model {
    order::Model {
        order_id: id.to_string(),
        user_id: "user-1".to_string(),
        product_id: "p01".to_string(),
        address_id: "addr-1".to_string(),
        seller_id: "seller-1".to_string(),
        transaction_id: "tx-1".to_string(),
        cart_id: "cart-1".to_string(),
        quantity: Some(1),
        cost: Some(250.0),
        is_confirm: Some(is_confirm),
        status: Some(status),
        mobile_no: None,
        time_stamp: None,
    }
}

pub fn transaction(id: &str, payment_method: &str, status: &str, details: &str) -> transaction::Model {
    transaction::Model {
        transaction_id: id.to_string(),
        user_id: "user-1".to_string(),
        order_id: "order-1".to_string(),
        amount: 500.0,
        transaction_type: "Payment".to_string(),
        status: status.to_string(),
        payment_method: payment_method.to_string(),
        transaction_date: None,
        details: Some(details.to_string()),
    }
}

pub fn user(id: &str, name: &str, email: &str) -> user::Model {
    user::Model {
        user_id: id.to_string(),
        address_id: None,
        user_name: name.to_string(),
        user_email: email.to_string(),
        user_phone: None,
        profile_url: None,
        coin: Some(0),
        timestamps: None,
        password: Some("hunter2".to_string()),
    }
}

pub fn cart_item(cart_id: &str, product_id: &str, quantity: i32) -> cart_item::Model {
    cart_item::Model {
        cart_id: cart_id.to_string(),
        product_id: product_id.to_string(),
        cost: Some(10.0),
        quantity: Some(quantity),
        status: Some(0),
    }
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateBazarTables)]
    }
}

pub struct CreateBazarTables;

impl MigrationName for CreateBazarTables {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_bazar_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateBazarTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());
        manager
            .create_table(schema.create_table_from_entity(address::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(product::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(order::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(transaction::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(user::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(cart_item::Entity))
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(cart_item::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(user::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(transaction::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(order::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(product::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(address::Entity).to_owned())
            .await?;
        Ok(())
    }
}
