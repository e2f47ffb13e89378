//! Sea-ORM entities for the tables behind the read API.
//!
//! The shapes follow the storefront's relational schema; none of these
//! entities is written to by this crate.

pub mod address;
pub mod cart_item;
pub mod order;
pub mod product;
pub mod transaction;
pub mod user;
