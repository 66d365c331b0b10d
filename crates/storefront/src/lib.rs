//! Storefront session module.
//!
//! Size filtering, the filtered catalog view and the cart, implemented purely as
//! deterministic domain logic (no IO, no rendering, no storage). A [`Session`]
//! is the composition root a rendering layer holds on to.

pub mod cart;
pub mod filter;
pub mod session;
pub mod view;

pub use cart::{Cart, add_to_cart};
pub use filter::{FilterState, FilteredView, clear, project, toggle};
pub use session::{
    AddToCart, FiltersReset, ItemAdded, ResetFilters, Session, SessionCommand, SessionEvent,
    SizeToggled, ToggleSize,
};
pub use view::{ProductCard, SizeOption};
