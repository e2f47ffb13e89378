//! Resource tags and the composer registry.
//!
//! Each filterable resource has a module exposing a static `FIELDS` table
//! and a `compose` function. [`apply_filters`] looks the composer up by the
//! descriptor's [`ResourceKind`]; resources without one are read unfiltered.

pub mod address;
pub mod order;
pub mod product;
pub mod transaction;
pub mod user;

use std::fmt;

use super::{FieldRule, QueryDescriptor, QueryParams};

/// Closed set of resources exposed through the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Address,
    Product,
    Order,
    Transaction,
    User,
    CartItem,
}

impl ResourceKind {
    pub const ALL: [Self; 6] = [
        Self::Address,
        Self::Product,
        Self::Order,
        Self::Transaction,
        Self::User,
        Self::CartItem,
    ];

    #[must_use]
    pub const fn name_singular(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Product => "product",
            Self::Order => "order",
            Self::Transaction => "transaction",
            Self::User => "user",
            Self::CartItem => "cart_item",
        }
    }

    #[must_use]
    pub const fn name_plural(self) -> &'static str {
        match self {
            Self::Address => "addresses",
            Self::Product => "products",
            Self::Order => "orders",
            Self::Transaction => "transactions",
            Self::User => "users",
            Self::CartItem => "cart_items",
        }
    }

    /// Single-column primary key, for resources that can be fetched by ID.
    /// Cart items are keyed by `(cart_id, product_id)` and have none.
    #[must_use]
    pub const fn id_column(self) -> Option<&'static str> {
        match self {
            Self::Address => Some("address_id"),
            Self::Product => Some("product_id"),
            Self::Order => Some("order_id"),
            Self::Transaction => Some("transaction_id"),
            Self::User => Some("user_id"),
            Self::CartItem => None,
        }
    }

    /// Parent column a resource is listed under, if it is only listed per
    /// parent (cart items per cart).
    #[must_use]
    pub const fn scope_column(self) -> Option<&'static str> {
        match self {
            Self::CartItem => Some("cart_id"),
            Self::Address | Self::Product | Self::Order | Self::Transaction | Self::User => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_singular())
    }
}

/// Narrows a descriptor from raw query parameters.
pub type Composer = fn(&QueryParams, QueryDescriptor) -> QueryDescriptor;

const COMPOSERS: &[(ResourceKind, Composer)] = &[
    (ResourceKind::Address, address::compose as Composer),
    (ResourceKind::Product, product::compose as Composer),
    (ResourceKind::Order, order::compose as Composer),
    (ResourceKind::Transaction, transaction::compose as Composer),
    (ResourceKind::User, user::compose as Composer),
];

/// The composer registered for `kind`, if any.
#[must_use]
pub fn composer_for(kind: ResourceKind) -> Option<Composer> {
    COMPOSERS
        .iter()
        .find(|(registered, _)| *registered == kind)
        .map(|(_, composer)| *composer)
}

/// Recognised filter parameters of `kind`.
#[must_use]
pub fn filter_fields(kind: ResourceKind) -> &'static [FieldRule] {
    match kind {
        ResourceKind::Address => address::FIELDS,
        ResourceKind::Product => product::FIELDS,
        ResourceKind::Order => order::FIELDS,
        ResourceKind::Transaction => transaction::FIELDS,
        ResourceKind::User => user::FIELDS,
        ResourceKind::CartItem => &[],
    }
}

/// Narrow `query` with whatever valid filters `params` carries for its
/// resource. Unknown, missing and malformed parameters add nothing.
#[must_use]
pub fn apply_filters(params: &QueryParams, query: QueryDescriptor) -> QueryDescriptor {
    match composer_for(query.resource()) {
        Some(composer) => composer(params, query),
        None => {
            tracing::debug!(resource = %query.resource(), "No filter composer registered, reading unfiltered");
            query
        }
    }
}

/// Apply each rule whose parameter is present, in table order.
pub(crate) fn compose_with(
    fields: &[FieldRule],
    params: &QueryParams,
    query: QueryDescriptor,
) -> QueryDescriptor {
    fields.iter().fold(query, |query, rule| {
        let Some(raw) = params.get(rule.param) else {
            return query;
        };
        match rule.predicate(raw) {
            Some(predicate) => query.with(predicate),
            None => {
                tracing::debug!(
                    resource = %query.resource(),
                    param = rule.param,
                    "Skipping invalid filter parameter"
                );
                query
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::{Comparison, FieldKind, FilterValue, Predicate};

    fn valid_sample(kind: FieldKind) -> String {
        match kind {
            FieldKind::Text => "abc".into(),
            FieldKind::Number => "0".into(),
            FieldKind::Flag => "false".into(),
            FieldKind::Label(labels) => labels[0].into(),
            FieldKind::Code(codes) => codes[0].1.to_string(),
            FieldKind::Contains => "ab".into(),
            FieldKind::Date | FieldKind::DateFrom | FieldKind::DateUntil => "2024-01-01".into(),
        }
    }

    fn invalid_sample(kind: FieldKind) -> &'static str {
        match kind {
            FieldKind::Text | FieldKind::Contains => "   ",
            FieldKind::Number => "twelve",
            FieldKind::Flag => "maybe",
            FieldKind::Label(_) => "not-a-label",
            FieldKind::Code(_) => "99",
            FieldKind::Date | FieldKind::DateFrom | FieldKind::DateUntil => "yesterday",
        }
    }

    fn filterable() -> impl Iterator<Item = ResourceKind> {
        ResourceKind::ALL.into_iter().filter(|kind| composer_for(*kind).is_some())
    }

    #[test]
    fn test_every_field_adds_exactly_one_predicate() {
        for kind in filterable() {
            for rule in filter_fields(kind) {
                let params = QueryParams::from_pairs([(rule.param, valid_sample(rule.kind))]);
                let query = apply_filters(&params, QueryDescriptor::new(kind));
                assert_eq!(query.predicates().len(), 1, "{kind}.{}", rule.param);
                assert_eq!(query.predicates()[0].column, rule.column, "{kind}.{}", rule.param);
            }
        }
    }

    #[test]
    fn test_invalid_value_is_same_as_absent() {
        for kind in filterable() {
            let base = QueryDescriptor::new(kind);
            for rule in filter_fields(kind) {
                let params = QueryParams::from_pairs([(rule.param, invalid_sample(rule.kind))]);
                assert_eq!(apply_filters(&params, base.clone()), base, "{kind}.{}", rule.param);
            }
        }
    }

    #[test]
    fn test_no_params_adds_nothing() {
        for kind in ResourceKind::ALL {
            let base = QueryDescriptor::new(kind);
            assert_eq!(apply_filters(&QueryParams::new(), base.clone()), base);
        }
    }

    #[test]
    fn test_product_scenario_ignores_unknown_params() {
        let params =
            QueryParams::from_pairs([("price", "100"), ("is_imported", "false"), ("bogus_field", "xyz")]);
        let query = apply_filters(&params, QueryDescriptor::new(ResourceKind::Product));
        assert_eq!(
            query.predicates(),
            &[
                Predicate::eq("price", FilterValue::Integer(100)),
                Predicate::eq("is_imported", FilterValue::Integer(0)),
            ]
        );
    }

    #[test]
    fn test_falsy_values_produce_predicates() {
        let params = QueryParams::from_pairs([("status", "0"), ("is_confirm", "0"), ("quantity", "0")]);
        let query = apply_filters(&params, QueryDescriptor::new(ResourceKind::Order));
        assert_eq!(
            query.predicates(),
            &[
                Predicate::eq("quantity", FilterValue::Integer(0)),
                Predicate::eq("is_confirm", FilterValue::Integer(0)),
                Predicate::eq("status", FilterValue::Integer(0)),
            ]
        );
    }

    #[test]
    fn test_composition_is_deterministic() {
        let params = QueryParams::from_pairs([
            ("transaction_type", "Refund"),
            ("details", "late"),
            ("status", "Failed"),
        ]);
        let base = QueryDescriptor::new(ResourceKind::Transaction);
        let first = apply_filters(&params, base.clone());
        let second = apply_filters(&params, base);
        assert_eq!(first, second);
    }

    #[test]
    fn test_user_date_range_uses_both_bounds() {
        let params = QueryParams::from_pairs([("start_date", "2024-01-01"), ("end_date", "2024-01-31")]);
        let query = apply_filters(&params, QueryDescriptor::new(ResourceKind::User));
        let bounds: Vec<_> = query.predicates_on("timestamps").collect();
        assert_eq!(bounds.len(), 2);
        assert!(matches!(bounds[0].comparison, Comparison::Gte(_)));
        assert!(matches!(bounds[1].comparison, Comparison::Lte(_)));
    }

    #[test]
    fn test_user_params_map_to_columns() {
        let params = QueryParams::from_pairs([("name", "rahim"), ("user_name", "ignored")]);
        let query = apply_filters(&params, QueryDescriptor::new(ResourceKind::User));
        assert_eq!(
            query.predicates(),
            &[Predicate::new("user_name", Comparison::Contains("rahim".into()))]
        );
    }

    #[test]
    fn test_unregistered_resource_passes_through() {
        assert!(composer_for(ResourceKind::CartItem).is_none());
        let params = QueryParams::from_pairs([("cart_id", "c1"), ("quantity", "2")]);
        let base = QueryDescriptor::new(ResourceKind::CartItem);
        assert_eq!(apply_filters(&params, base.clone()), base);
    }

    #[test]
    fn test_cart_items_have_scope_but_no_id() {
        assert_eq!(ResourceKind::CartItem.id_column(), None);
        assert_eq!(ResourceKind::CartItem.scope_column(), Some("cart_id"));
        for kind in ResourceKind::ALL {
            if kind != ResourceKind::CartItem {
                assert!(kind.id_column().is_some(), "{kind}");
                assert_eq!(kind.scope_column(), None, "{kind}");
            }
        }
    }

    #[test]
    fn test_field_tables_have_unique_params() {
        for kind in ResourceKind::ALL {
            let fields = filter_fields(kind);
            for (i, rule) in fields.iter().enumerate() {
                assert!(
                    fields[i + 1..].iter().all(|other| other.param != rule.param),
                    "duplicate param {} on {kind}",
                    rule.param
                );
            }
        }
    }
}
