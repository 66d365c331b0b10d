//! The fixed, ordered product catalog.

use std::io::Read;

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::error::CatalogLoadError;
use crate::product::Product;
use crate::size::SizeIndex;

const SAMPLE_CATALOG: &str = include_str!("../resources/sample_catalog.json");

/// Ordered, read-only list of products, fixed at startup.
///
/// No add/remove/update operations exist. Share it behind an `Arc` when several
/// sessions need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.same_identity(product)) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    product.id_typed()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(payload: &str) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_str(payload)?;
        Self::finish_load(products)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;
        Self::finish_load(products)
    }

    /// The six products bundled with the store.
    pub fn sample() -> Result<Self, CatalogLoadError> {
        Self::from_json_str(SAMPLE_CATALOG)
    }

    fn finish_load(products: Vec<Product>) -> Result<Self, CatalogLoadError> {
        let catalog = Self::new(products)?;
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Like [`Catalog::get`], but an unknown id is a `ProductNotFound` error.
    pub fn find(&self, id: ProductId) -> DomainResult<&Product> {
        self.get(id).ok_or_else(|| DomainError::product_not_found(id))
    }

    /// Distinct sizes across all products, first-seen order. Recomputed per call.
    pub fn size_index(&self) -> SizeIndex {
        SizeIndex::build(self)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::test_support::product;
    use proptest::prelude::*;

    fn id(n: u32) -> ProductId {
        ProductId::try_from(n).unwrap()
    }

    #[test]
    fn sample_catalog_has_six_products_in_order() {
        let catalog = Catalog::sample().unwrap();
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id_typed().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let prices: Vec<u64> = catalog.products().iter().map(|p| p.price().amount()).collect();
        assert_eq!(prices, vec![2490, 8990, 12990, 5990, 4290, 3490]);
        assert_eq!(catalog.find(id(5)).unwrap().sizes().len(), 6);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![product(1, &["M"]), product(1, &["L"])]).unwrap_err();
        match err {
            DomainError::Conflict(msg) if msg.contains("duplicate product id 1") => {}
            _ => panic!("Expected Conflict for duplicate id"),
        }
    }

    #[test]
    fn find_reports_unknown_ids() {
        let catalog = Catalog::sample().unwrap();
        assert!(catalog.get(id(99)).is_none());
        assert_eq!(
            catalog.find(id(99)).unwrap_err(),
            DomainError::ProductNotFound(id(99))
        );
    }

    #[test]
    fn loading_reports_parse_and_validation_failures() {
        assert!(matches!(
            Catalog::from_json_str("not json"),
            Err(CatalogLoadError::Parse(_))
        ));

        let dup = r#"[
            {"id":1,"name":"A","price":1,"image":"","sizes":["M"],"category":""},
            {"id":1,"name":"B","price":2,"image":"","sizes":["L"],"category":""}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(dup),
            Err(CatalogLoadError::Invalid(DomainError::Conflict(_)))
        ));
    }

    #[test]
    fn reader_and_str_loaders_agree() {
        let from_reader = Catalog::from_json_reader(SAMPLE_CATALOG.as_bytes()).unwrap();
        assert_eq!(from_reader, Catalog::sample().unwrap());
    }

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        let sizes = prop::collection::vec(
            prop::sample::select(vec!["XS", "S", "M", "L", "XL", "28", "30", "36", "42"]),
            1..6,
        );
        prop::collection::vec(sizes, 0..8).prop_map(|per_product| {
            let products = per_product
                .into_iter()
                .enumerate()
                .map(|(i, mut sizes)| {
                    let mut seen = Vec::new();
                    sizes.retain(|s| {
                        let fresh = !seen.contains(s);
                        seen.push(*s);
                        fresh
                    });
                    product(i as u32 + 1, &sizes)
                })
                .collect();
            Catalog::new(products).unwrap()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the size index is deterministic and duplicate-free.
        #[test]
        fn size_index_is_deterministic(catalog in arb_catalog()) {
            let first = catalog.size_index();
            let second = catalog.size_index();
            prop_assert_eq!(&first, &second);

            let labels = first.labels();
            for (i, label) in labels.iter().enumerate() {
                prop_assert!(!labels[..i].contains(label));
            }
        }

        /// Property: every product size is in the index, and nothing else is.
        #[test]
        fn size_index_is_the_union_of_product_sizes(catalog in arb_catalog()) {
            let index = catalog.size_index();
            for product in catalog.products() {
                for size in product.sizes() {
                    prop_assert!(index.contains(size.as_str()));
                }
            }
            for label in index.iter() {
                prop_assert!(catalog.products().iter().any(|p| p.has_size(label.as_str())));
            }
        }
    }
}
