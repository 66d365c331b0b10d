//! Size labels and the catalog-wide size index.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, ValueObject};

use crate::catalog::Catalog;

/// A garment size label (`"M"`, `"42"`, ...).
///
/// Non-empty after trimming. Labels compare by exact text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SizeLabel(String);

impl SizeLabel {
    pub fn new(label: impl Into<String>) -> Result<Self, DomainError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("size label cannot be empty"));
        }
        if trimmed.len() == label.len() {
            Ok(Self(label))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SizeLabel {}

impl TryFrom<String> for SizeLabel {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SizeLabel {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SizeLabel> for String {
    fn from(value: SizeLabel) -> Self {
        value.0
    }
}

impl AsRef<str> for SizeLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for SizeLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct size labels across a catalog, in first-seen order.
///
/// Derived data: built from a [`Catalog`] on demand and never stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SizeIndex {
    labels: Vec<SizeLabel>,
}

impl SizeIndex {
    /// Walk products in catalog order and each product's sizes in their given
    /// order, keeping the first occurrence of every label.
    pub fn build(catalog: &Catalog) -> Self {
        let mut labels: Vec<SizeLabel> = Vec::new();
        for product in catalog.products() {
            for size in product.sizes() {
                if !labels.contains(size) {
                    labels.push(size.clone());
                }
            }
        }
        Self { labels }
    }

    pub fn labels(&self) -> &[SizeLabel] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &SizeLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.as_str() == label)
    }
}

impl<'a> IntoIterator for &'a SizeIndex {
    type Item = &'a SizeLabel;
    type IntoIter = core::slice::Iter<'a, SizeLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::test_support::product;

    fn labels(index: &SizeIndex) -> Vec<&str> {
        index.iter().map(SizeLabel::as_str).collect()
    }

    #[test]
    fn size_label_rejects_blank_and_trims() {
        assert!(SizeLabel::new("").is_err());
        assert!(SizeLabel::new("   ").is_err());
        assert_eq!(SizeLabel::new(" XL ").unwrap().as_str(), "XL");
    }

    #[test]
    fn size_label_deserialization_validates() {
        let label: SizeLabel = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(label.as_str(), "M");
        assert!(serde_json::from_str::<SizeLabel>("\"\"").is_err());
    }

    #[test]
    fn index_of_sample_catalog_is_first_seen_order() {
        let index = Catalog::sample().unwrap().size_index();
        assert_eq!(
            labels(&index),
            vec![
                "XS", "S", "M", "L", "XL", "36", "37", "38", "39", "40", "41", "42", "28", "30",
                "32", "34", "XXL",
            ]
        );
    }

    #[test]
    fn index_skips_labels_already_seen() {
        let catalog = Catalog::new(vec![
            product(1, &["L", "M"]),
            product(2, &["M", "S", "L"]),
            product(3, &["XL"]),
        ])
        .unwrap();
        assert_eq!(labels(&SizeIndex::build(&catalog)), vec!["L", "M", "S", "XL"]);
    }

    #[test]
    fn index_of_empty_catalog_is_empty() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let index = catalog.size_index();
        assert!(index.is_empty());
        assert!(!index.contains("M"));
    }
}
