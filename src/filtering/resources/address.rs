//! Address book filters.

use super::compose_with;
use crate::filtering::{FieldKind, FieldRule, QueryDescriptor, QueryParams};

pub const ADDRESS_TYPES: &[&str] = &["delivery_address", "present_address"];

pub const FIELDS: &[FieldRule] = &[
    FieldRule::same("address_id", FieldKind::Text),
    FieldRule::same("country", FieldKind::Text),
    FieldRule::same("division", FieldKind::Text),
    FieldRule::same("district", FieldKind::Text),
    FieldRule::same("thana", FieldKind::Text),
    FieldRule::same("address_type", FieldKind::Label(ADDRESS_TYPES)),
    FieldRule::same("upzilla", FieldKind::Text),
    FieldRule::same("union", FieldKind::Text),
    FieldRule::same("post_office", FieldKind::Text),
    FieldRule::same("postal_code", FieldKind::Number),
    FieldRule::same("village", FieldKind::Text),
];

#[must_use]
pub fn compose(params: &QueryParams, query: QueryDescriptor) -> QueryDescriptor {
    compose_with(FIELDS, params, query)
}
