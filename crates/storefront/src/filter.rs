//! Size filter selection and the filtered catalog view.

use serde::{Deserialize, Serialize};

use storefront_catalog::{Catalog, Product};
use storefront_core::ProductId;

/// The set of size labels a visitor has selected.
///
/// Labels are kept exactly as given (no trimming); anything that is not a
/// catalog size simply matches nothing. Equality and membership ignore order;
/// insertion order is kept so selections read back the way they were made.
#[derive(Debug, Clone, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FilterState {
    selected: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `size`.
    pub fn toggled(&self, size: &str) -> FilterState {
        self.with_selection(size, !self.is_selected(size))
    }

    /// Empty selection ("show everything").
    pub fn cleared(&self) -> FilterState {
        FilterState::default()
    }

    /// State with `label` forced in (`selected == true`) or out.
    pub fn with_selection(&self, label: &str, selected: bool) -> FilterState {
        let mut next = self.clone();
        let present = next.selected.iter().position(|l| l == label);
        match (present, selected) {
            (None, true) => next.selected.push(label.to_string()),
            (Some(i), false) => {
                next.selected.remove(i);
            }
            _ => {}
        }
        next
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|l| l == label)
    }

    /// Selected labels, oldest selection first.
    pub fn labels(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// A product passes when any of its sizes is selected.
    ///
    /// Union semantics: selecting more sizes widens the result.
    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.sizes().iter().any(|s| self.is_selected(s.as_str()))
    }
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.selected.iter().all(|l| other.is_selected(l))
    }
}

impl From<Vec<String>> for FilterState {
    fn from(labels: Vec<String>) -> Self {
        let mut state = FilterState::default();
        for label in labels {
            if !state.is_selected(&label) {
                state.selected.push(label);
            }
        }
        state
    }
}

impl From<FilterState> for Vec<String> {
    fn from(state: FilterState) -> Self {
        state.selected
    }
}

/// `toggle(state, size) -> state'`.
pub fn toggle(state: &FilterState, size: &str) -> FilterState {
    state.toggled(size)
}

/// `clear(state) -> {}`.
pub fn clear(state: &FilterState) -> FilterState {
    state.cleared()
}

/// Catalog products that pass a filter, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<'a> {
    products: Vec<&'a Product>,
}

impl<'a> FilteredView<'a> {
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id_typed()).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }
}

/// `project(catalog, filter)`: an empty filter yields the whole catalog.
pub fn project<'a>(catalog: &'a Catalog, filter: &FilterState) -> FilteredView<'a> {
    FilteredView {
        products: catalog.products().iter().filter(|p| filter.matches(p)).collect(),
    }
}
