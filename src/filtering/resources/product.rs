//! Catalog filters.
//!
//! `is_imported`, `isPopular` and `is_out_of_stock` are flags: `true`/`false`
//! in the query string, `1`/`0` in storage.

use super::compose_with;
use crate::filtering::{FieldKind, FieldRule, QueryDescriptor, QueryParams};

pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Appliances",
    "Home Appliances",
    "Furniture",
    "Fashion",
    "Beauty",
    "Toys",
    "Automotive",
    "Books",
    "Sports",
];

pub const FIELDS: &[FieldRule] = &[
    FieldRule::same("product_id", FieldKind::Text),
    FieldRule::same("seller_id", FieldKind::Text),
    FieldRule::same("package_id", FieldKind::Text),
    FieldRule::same("review_id", FieldKind::Text),
    FieldRule::same("product_name", FieldKind::Text),
    FieldRule::same("category", FieldKind::Label(CATEGORIES)),
    FieldRule::same("price", FieldKind::Number),
    FieldRule::same("quantity", FieldKind::Number),
    FieldRule::same("is_imported", FieldKind::Flag),
    FieldRule::same("sub_category", FieldKind::Text),
    FieldRule::same("old_price", FieldKind::Number),
    FieldRule::same("rating", FieldKind::Number),
    FieldRule::same("quality_type", FieldKind::Text),
    FieldRule::same("highlights", FieldKind::Text),
    FieldRule::same("isPopular", FieldKind::Flag),
    FieldRule::same("fav_count", FieldKind::Number),
    FieldRule::same("is_out_of_stock", FieldKind::Flag),
];

#[must_use]
pub fn compose(params: &QueryParams, query: QueryDescriptor) -> QueryDescriptor {
    compose_with(FIELDS, params, query)
}
