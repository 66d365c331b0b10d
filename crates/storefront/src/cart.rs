//! Append-only shopping cart.

use serde::{Deserialize, Serialize};

use storefront_catalog::{Price, Product};

/// Products the visitor chose, in the order they were added.
///
/// Duplicates are kept as separate entries (no quantity merging) and entries
/// carry no size choice. There is no removal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// `addToCart(cart, product) -> cart'`; `self` is left untouched.
    pub fn with_added(&self, product: Product) -> Cart {
        let mut next = self.clone();
        next.push(product);
        next
    }

    pub(crate) fn push(&mut self, product: Product) {
        self.items.push(product);
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of entry prices (display only).
    pub fn total(&self) -> Price {
        self.items.iter().map(Product::price).sum()
    }

    /// Counter for the cart icon; hidden (`None`) while the cart is empty.
    pub fn badge(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.len())
    }
}

/// Free-function form of [`Cart::with_added`].
pub fn add_to_cart(cart: &Cart, product: Product) -> Cart {
    cart.with_added(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storefront_catalog::Catalog;
    use storefront_core::ProductId;

    fn product(id: u32) -> Product {
        let catalog = Catalog::sample().unwrap();
        catalog.find(ProductId::try_from(id).unwrap()).unwrap().clone()
    }

    #[test]
    fn new_cart_is_empty_and_badge_hidden() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.badge(), None);
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn adding_the_same_product_keeps_every_entry() {
        let tee = product(1);
        let cart = add_to_cart(&Cart::new(), tee.clone());
        let cart = add_to_cart(&cart, tee.clone());
        let cart = add_to_cart(&cart, tee.clone());
        assert_eq!(cart.len(), 3);
        assert!(cart.items().iter().all(|p| *p == tee));
        assert_eq!(cart.badge(), Some(3));
        assert_eq!(cart.total().amount(), 3 * 2490);
    }

    #[test]
    fn with_added_leaves_original_untouched() {
        let cart = Cart::new().with_added(product(2));
        let next = cart.with_added(product(3));
        assert_eq!(cart.len(), 1);
        assert_eq!(next.len(), 2);
    }

    proptest! {
        /// Property: adding appends exactly one entry at the end.
        #[test]
        fn add_is_append_only(ids in prop::collection::vec(1u32..=6, 0..10), next in 1u32..=6) {
            let cart = ids.iter().fold(Cart::new(), |c, id| c.with_added(product(*id)));
            let added = product(next);
            let grown = cart.with_added(added.clone());

            prop_assert_eq!(grown.len(), cart.len() + 1);
            prop_assert_eq!(&grown.items()[..cart.len()], cart.items());
            prop_assert_eq!(grown.items().last(), Some(&added));
        }
    }
}
