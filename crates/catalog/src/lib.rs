//! Catalog domain module.
//!
//! Products, size labels, the derived size index and price formatting, all as
//! deterministic domain logic (no rendering, no persistence). The catalog
//! payload is the one piece of configuration the store reads.

pub mod catalog;
pub mod error;
pub mod price;
pub mod product;
pub mod size;

pub use catalog::Catalog;
pub use error::CatalogLoadError;
pub use price::{Price, PriceFormat, format_price};
pub use product::{Product, ProductRecord};
pub use size::{SizeIndex, SizeLabel};
