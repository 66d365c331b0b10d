//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same values are
/// equal. They are immutable: to "modify" one, build a new one.
///
/// - `SizeLabel("M")` is a value object
/// - `Product { id: 3, .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
