//! Read models handed to the rendering layer.

use serde::Serialize;

use storefront_catalog::{Product, PriceFormat, SizeLabel};
use storefront_core::ProductId;

/// One filter button: a size from the index and whether it is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    pub label: SizeLabel,
    pub selected: bool,
}

/// Display card for one product in the filtered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    /// Price already formatted for display.
    pub price: String,
    pub image: String,
    pub category: String,
    pub sizes: Vec<SizeLabel>,
}

impl ProductCard {
    pub fn from_product(product: &Product, format: &PriceFormat) -> Self {
        Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            price: format.format(product.price()),
            image: product.image().to_string(),
            category: product.category().to_string(),
            sizes: product.sizes().to_vec(),
        }
    }
}
