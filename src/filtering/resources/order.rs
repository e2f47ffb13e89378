use super::compose_with;
use crate::filtering::{FieldKind, FieldRule, QueryDescriptor, QueryParams};

/// Order lifecycle codes as stored in `Order.status`.
pub const ORDER_STATUSES: &[(&str, i64)] = &[("Pending", 0), ("Completed", 1), ("Cancelled", 2)];

/// Codes stored in `Order.is_confirm`.
pub const CONFIRMATION_STATUSES: &[(&str, i64)] = &[("NotConfirmed", 0), ("Confirmed", 1)];

pub const FIELDS: &[FieldRule] = &[
    FieldRule::same("order_id", FieldKind::Text),
    FieldRule::same("user_id", FieldKind::Text),
    FieldRule::same("product_id", FieldKind::Text),
    FieldRule::same("address_id", FieldKind::Text),
    FieldRule::same("seller_id", FieldKind::Text),
    FieldRule::same("transaction_id", FieldKind::Text),
    FieldRule::same("cart_id", FieldKind::Text),
    FieldRule::same("quantity", FieldKind::Number),
    FieldRule::same("is_confirm", FieldKind::Code(CONFIRMATION_STATUSES)),
    FieldRule::same("status", FieldKind::Code(ORDER_STATUSES)),
    FieldRule::same("mobile_no", FieldKind::Text),
    FieldRule::same("time_stamp", FieldKind::Date),
];

#[must_use]
pub fn compose(params: &QueryParams, query: QueryDescriptor) -> QueryDescriptor {
    compose_with(FIELDS, params, query)
}
