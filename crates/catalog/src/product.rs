use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::price::Price;
use crate::size::SizeLabel;

/// Raw product record as it appears in a catalog payload.
///
/// Unvalidated; converted into a [`Product`] through [`Product::try_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub sizes: Vec<SizeLabel>,
    pub category: String,
}

/// A catalog product (identity + display record).
///
/// Invariants (enforced at construction and deserialization):
/// - `name` is non-blank
/// - `sizes` is non-empty and holds no duplicate label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    image: String,
    sizes: Vec<SizeLabel>,
    category: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        sizes: Vec<SizeLabel>,
        category: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {id}: name cannot be empty"
            )));
        }

        if sizes.is_empty() {
            return Err(DomainError::validation(format!(
                "product {id}: at least one size is required"
            )));
        }

        for (i, size) in sizes.iter().enumerate() {
            if sizes[..i].contains(size) {
                return Err(DomainError::invariant(format!(
                    "product {id}: duplicate size '{size}'"
                )));
            }
        }

        Ok(Self {
            id,
            name,
            price,
            image: image.into(),
            sizes,
            category: category.into(),
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Opaque reference (path/URL) to the display image.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn sizes(&self) -> &[SizeLabel] {
        &self.sizes
    }

    /// Display-only label; never used for filtering.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn has_size(&self, label: &str) -> bool {
        self.sizes.iter().any(|s| s.as_str() == label)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(
            record.id,
            record.name,
            record.price,
            record.image,
            record.sizes,
            record.category,
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub(crate) fn product(id: u32, sizes: &[&str]) -> Product {
        Product::new(
            ProductId::try_from(id).unwrap(),
            format!("Product {id}"),
            Price::new(1000 * u64::from(id)),
            format!("/img/{id}.jpg"),
            sizes.iter().map(|s| SizeLabel::new(*s).unwrap()).collect(),
            "test",
        )
        .unwrap()
    }
}
