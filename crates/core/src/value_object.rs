//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a unit price of `10.00` equals any other `10.00`)
/// - **Entity**: has identity (the stock record named `"Test Jacket"` stays that
///   record while its quantity changes)
///
/// Value objects are immutable: to "change" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price {
///     cents: u64,
/// }
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price { cents: 1000 }, Price { cents: 1000 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
