//! Entity trait: identity that survives copies.

/// Something with a stable identity.
///
/// Two clones of a product placed in a cart are still the same entity; value
/// equality and identity are separate questions.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both refer to the same entity, whatever their field values.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
