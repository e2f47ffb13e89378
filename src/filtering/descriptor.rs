use chrono::{DateTime, Utc};
use sea_orm::{
    Condition,
    sea_query::{Alias, Expr, LikeExpr, SimpleExpr},
};

use super::resources::ResourceKind;

/// A coerced filter value, ready to be bound into SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
}

impl From<FilterValue> for sea_orm::Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Text(text) => text.into(),
            FilterValue::Integer(int_value) => int_value.into(),
            FilterValue::Float(float_value) => float_value.into(),
            FilterValue::Timestamp(timestamp) => timestamp.into(),
        }
    }
}

/// Comparison applied to one column.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// `column = value`
    Eq(FilterValue),
    /// `column >= value`
    Gte(FilterValue),
    /// `column <= value`
    Lte(FilterValue),
    /// `column BETWEEN low AND high`, both ends inclusive
    Between(FilterValue, FilterValue),
    /// `column LIKE '%value%'` with the value matched literally
    Contains(String),
}

/// A single column condition appended to a [`QueryDescriptor`].
///
/// `column` is always taken from a resource's static field table, never
/// from request input.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub comparison: Comparison,
}

impl Predicate {
    #[must_use]
    pub const fn new(column: &'static str, comparison: Comparison) -> Self {
        Self { column, comparison }
    }

    #[must_use]
    pub fn eq(column: &'static str, value: FilterValue) -> Self {
        Self::new(column, Comparison::Eq(value))
    }

    /// Build the `sea_query` expression for this predicate.
    #[must_use]
    pub fn to_expr(&self) -> SimpleExpr {
        let column = Expr::col(Alias::new(self.column));
        match &self.comparison {
            Comparison::Eq(value) => column.eq(sea_orm::Value::from(value.clone())),
            Comparison::Gte(value) => column.gte(sea_orm::Value::from(value.clone())),
            Comparison::Lte(value) => column.lte(sea_orm::Value::from(value.clone())),
            Comparison::Between(low, high) => column.between(
                sea_orm::Value::from(low.clone()),
                sea_orm::Value::from(high.clone()),
            ),
            Comparison::Contains(fragment) => {
                let pattern = format!("%{}%", escape_like(fragment));
                column.like(LikeExpr::new(pattern).escape('\\'))
            }
        }
    }
}

/// Escape LIKE wildcards so user text is matched literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A pending read against one resource with zero or more predicates.
///
/// Narrowing consumes the descriptor and returns a new one, so a composer
/// is a plain function from descriptor to descriptor. The column shape of
/// the read is fixed by the resource, never by the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    resource: ResourceKind,
    predicates: Vec<Predicate>,
}

impl QueryDescriptor {
    #[must_use]
    pub const fn new(resource: ResourceKind) -> Self {
        Self {
            resource,
            predicates: Vec::new(),
        }
    }

    #[must_use]
    pub const fn resource(&self) -> ResourceKind {
        self.resource
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Predicates that constrain `column`.
    pub fn predicates_on<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Predicate> + 'a {
        self.predicates.iter().filter(move |p| p.column == column)
    }

    #[must_use]
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// All predicates AND-ed together. An empty descriptor yields an empty
    /// condition, which matches every row.
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.predicates
            .iter()
            .fold(Condition::all(), |condition, predicate| condition.add(predicate.to_expr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::transaction;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn render(query: &QueryDescriptor) -> String {
        transaction::Entity::find()
            .filter(query.condition())
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn test_with_leaves_base_untouched() {
        let base = QueryDescriptor::new(ResourceKind::Transaction);
        let narrowed = base
            .clone()
            .with(Predicate::eq("status", FilterValue::Text("Pending".into())));
        assert!(base.predicates().is_empty());
        assert_eq!(narrowed.predicates().len(), 1);
        assert_eq!(narrowed.resource(), ResourceKind::Transaction);
    }

    #[test]
    fn test_empty_descriptor_renders_without_where() {
        let sql = render(&QueryDescriptor::new(ResourceKind::Transaction));
        assert!(!sql.contains("WHERE"), "unexpected WHERE in {sql}");
    }

    #[test]
    fn test_predicates_are_anded() {
        let query = QueryDescriptor::new(ResourceKind::Transaction)
            .with(Predicate::eq("status", FilterValue::Text("Pending".into())))
            .with(Predicate::eq("user_id", FilterValue::Text("u1".into())));
        let sql = render(&query);
        assert!(sql.contains(r#""status" = 'Pending'"#), "{sql}");
        assert!(sql.contains(" AND "), "{sql}");
        assert!(sql.contains(r#""user_id" = 'u1'"#), "{sql}");
    }

    #[test]
    fn test_contains_escapes_wildcards() {
        let query = QueryDescriptor::new(ResourceKind::Transaction)
            .with(Predicate::new("details", Comparison::Contains("50%_off".into())));
        let sql = render(&query);
        assert!(sql.contains("LIKE"), "{sql}");
        assert!(sql.contains(r"\%"), "{sql}");
        assert!(sql.contains(r"\_off"), "{sql}");
    }

    #[test]
    fn test_escape_like_passes_plain_text() {
        assert_eq!(escape_like("refund"), "refund");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_predicates_on_filters_by_column() {
        let query = QueryDescriptor::new(ResourceKind::User)
            .with(Predicate::new("timestamps", Comparison::Gte(FilterValue::Integer(1))))
            .with(Predicate::eq("coin", FilterValue::Integer(0)))
            .with(Predicate::new("timestamps", Comparison::Lte(FilterValue::Integer(2))));
        assert_eq!(query.predicates_on("timestamps").count(), 2);
        assert_eq!(query.predicates_on("coin").count(), 1);
        assert_eq!(query.predicates_on("user_id").count(), 0);
    }
}
