//! Read access to the persistence store.
//!
//! [`ReadStore`] is the only capability the paginator needs: a bounded
//! fetch and a count over the same predicates. The production
//! implementation is `sea_orm::DatabaseConnection`; tests can substitute
//! their own.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Select,
};
use serde_json::Value as JsonValue;

use crate::entities::{address, cart_item, order, product, transaction, user};
use crate::filtering::{QueryDescriptor, ResourceKind};

#[async_trait]
pub trait ReadStore: Send + Sync {
    /// Up to `limit` rows matching `query`, skipping the first `offset`, in
    /// the store's natural order.
    async fn fetch(
        &self,
        query: &QueryDescriptor,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<JsonValue>, DbErr>;

    /// Number of rows matching `query`, ignoring any offset or limit.
    async fn count(&self, query: &QueryDescriptor) -> Result<u64, DbErr>;
}

#[async_trait]
impl ReadStore for DatabaseConnection {
    async fn fetch(
        &self,
        query: &QueryDescriptor,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<JsonValue>, DbErr> {
        match query.resource() {
            ResourceKind::Address => fetch_rows(self, address::Entity::find(), query, offset, limit).await,
            ResourceKind::Product => fetch_rows(self, product::Entity::find(), query, offset, limit).await,
            ResourceKind::Order => fetch_rows(self, order::Entity::find(), query, offset, limit).await,
            ResourceKind::Transaction => {
                fetch_rows(self, transaction::Entity::find(), query, offset, limit).await
            }
            ResourceKind::User => fetch_rows(self, user_select(), query, offset, limit).await,
            ResourceKind::CartItem => fetch_rows(self, cart_item::Entity::find(), query, offset, limit).await,
        }
    }

    async fn count(&self, query: &QueryDescriptor) -> Result<u64, DbErr> {
        match query.resource() {
            ResourceKind::Address => count_rows(self, address::Entity::find(), query).await,
            ResourceKind::Product => count_rows(self, product::Entity::find(), query).await,
            ResourceKind::Order => count_rows(self, order::Entity::find(), query).await,
            ResourceKind::Transaction => count_rows(self, transaction::Entity::find(), query).await,
            ResourceKind::User => count_rows(self, user_select(), query).await,
            ResourceKind::CartItem => count_rows(self, cart_item::Entity::find(), query).await,
        }
    }
}

fn user_select() -> Select<user::Entity> {
    user::Entity::find()
        .select_only()
        .columns(user::PUBLIC_COLUMNS)
}

async fn fetch_rows<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    query: &QueryDescriptor,
    offset: u64,
    limit: u64,
) -> Result<Vec<JsonValue>, DbErr>
where
    E: EntityTrait,
{
    select
        .filter(query.condition())
        .offset(offset)
        .limit(limit)
        .into_json()
        .all(db)
        .await
}

async fn count_rows<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    query: &QueryDescriptor,
) -> Result<u64, DbErr>
where
    E: EntityTrait,
    E::Model: Sync,
{
    select.filter(query.condition()).count(db).await
}
