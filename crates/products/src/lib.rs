//! Product model used to describe items in tracking calls.
//!
//! This crate holds the product value type and its JSON payload shape. It has
//! no IO of its own; callers decide where payloads go.

pub mod payload;
pub mod product;

pub use product::{DEFAULT_QUANTITY, Product};
