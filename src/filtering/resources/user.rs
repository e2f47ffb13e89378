//! User directory filters.
//!
//! Parameter names are the public ones (`name`, `email`, `phone`), not the
//! column names. `start_date`/`end_date` bound the `timestamps` column.

use super::compose_with;
use crate::filtering::{FieldKind, FieldRule, QueryDescriptor, QueryParams};

pub const FIELDS: &[FieldRule] = &[
    FieldRule::same("user_id", FieldKind::Text),
    FieldRule::new("name", "user_name", FieldKind::Contains),
    FieldRule::new("email", "user_email", FieldKind::Text),
    FieldRule::new("phone", "user_phone", FieldKind::Text),
    FieldRule::same("profile_url", FieldKind::Contains),
    FieldRule::same("coin", FieldKind::Number),
    FieldRule::new("start_date", "timestamps", FieldKind::DateFrom),
    FieldRule::new("end_date", "timestamps", FieldKind::DateUntil),
    FieldRule::same("address_id", FieldKind::Text),
];

#[must_use]
pub fn compose(params: &QueryParams, query: QueryDescriptor) -> QueryDescriptor {
    compose_with(FIELDS, params, query)
}
