//! Payment transaction filters.

use super::compose_with;
use crate::filtering::{FieldKind, FieldRule, QueryDescriptor, QueryParams};

pub const TRANSACTION_TYPES: &[&str] = &["Payment", "Refund"];

pub const TRANSACTION_STATUSES: &[&str] = &["Completed", "Pending", "Failed"];

pub const PAYMENT_METHODS: &[&str] = &[
    "Credit Card",
    "PayPal",
    "Bank Transfer",
    "Bkash",
    "Nagad",
    "Rocket",
    "Cash On Delivery",
];

pub const FIELDS: &[FieldRule] = &[
    FieldRule::same("transaction_id", FieldKind::Text),
    FieldRule::same("user_id", FieldKind::Text),
    FieldRule::same("order_id", FieldKind::Text),
    FieldRule::same("transaction_type", FieldKind::Label(TRANSACTION_TYPES)),
    FieldRule::same("status", FieldKind::Label(TRANSACTION_STATUSES)),
    FieldRule::same("payment_method", FieldKind::Label(PAYMENT_METHODS)),
    FieldRule::same("transaction_date", FieldKind::Date),
    FieldRule::same("details", FieldKind::Contains),
];

#[must_use]
pub fn compose(params: &QueryParams, query: QueryDescriptor) -> QueryDescriptor {
    compose_with(FIELDS, params, query)
}
