//! # Query-string Filtering
//!
//! Turns untrusted query parameters into typed predicates on a read query.
//! Every listing endpoint goes through the same three steps:
//!
//! 1. the query string is decoded into [`QueryParams`]
//! 2. [`apply_filters`] picks the resource's composer and narrows a
//!    [`QueryDescriptor`] with one predicate per valid, recognised parameter
//! 3. the descriptor is handed to the paginator
//!
//! ## Rules
//!
//! - **Absent means unfiltered**: only a missing key skips a field. `price=0`
//!   and `is_imported=false` are real filters.
//! - **Invalid means unfiltered**: a value that fails validation is dropped
//!   silently, the request still succeeds.
//! - **Allow-listed columns**: predicates only ever name columns from a
//!   resource's static field table; unknown parameters are ignored.
//!
//! ## Query Parameter Examples
//!
//! ```rust,ignore
//! // Exact match on a numeric column and a 0/1 flag
//! GET /api/products?price=100&is_imported=false
//!
//! // Closed enumeration (labels or codes)
//! GET /api/transactions?payment_method=Bkash&status=Pending
//! GET /api/orders?status=0
//!
//! // Substring search
//! GET /api/users?name=rah
//!
//! // Date range on one column
//! GET /api/users?start_date=2024-01-01&end_date=2024-01-31
//! ```

pub mod descriptor;
pub mod params;
pub mod resources;
pub mod rules;

pub use descriptor::{Comparison, FilterValue, Predicate, QueryDescriptor};
pub use params::{ParamValue, QueryParams};
pub use resources::{Composer, ResourceKind, apply_filters, composer_for, filter_fields};
pub use rules::{FieldKind, FieldRule};
