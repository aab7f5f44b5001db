//! Value object trait: equality by value, not identity.
//!
//! Value objects carry **no identity**: they are defined entirely by their
//! attribute values, so two instances holding the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with the same values are equal)
/// - **Entity**: has identity (two entities with the same ID are the same entity)
///
/// A product description handed to a tracking call is a value object: two
/// descriptions naming the same SKU at the same price are interchangeable.
///
/// ## Mutation
///
/// Implementors may expose setters. Mutation goes through `&mut self`, so the
/// borrow checker already rules out unsynchronized writers; callers that want
/// to share one instance across threads wrap it (`Arc<Mutex<_>>`) themselves.
/// Copying with `Clone` is the usual way to hand a value to another owner.
///
/// ## Design Constraints
///
/// - **Clone**: values are passed around by copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: debuggable in logs and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
