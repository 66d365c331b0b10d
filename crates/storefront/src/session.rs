use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::{Catalog, PriceFormat, Product};
use storefront_core::{Aggregate, AggregateRoot, DomainError, DomainResult, ProductId, SessionId};
use storefront_events::{Event, EventLog};

use crate::cart::Cart;
use crate::filter::{FilterState, FilteredView, project};
use crate::view::{ProductCard, SizeOption};

/// Command: ToggleSize.
///
/// `size` is taken verbatim; labels outside the catalog select nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSize {
    pub size: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ResetFilters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetFilters {
    pub occurred_at: DateTime<Utc>,
}

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCommand {
    ToggleSize(ToggleSize),
    ResetFilters(ResetFilters),
    AddToCart(AddToCart),
}

/// Event: SizeToggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeToggled {
    pub size: String,
    /// Membership after the toggle.
    pub selected: bool,
    pub occurred_at: DateTime<Utc>,
}

/// Event: FiltersReset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersReset {
    pub previous: FilterState,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    SizeToggled(SizeToggled),
    FiltersReset(FiltersReset),
    ItemAdded(ItemAdded),
}

impl Event for SessionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::SizeToggled(_) => "storefront.filter.size_toggled",
            SessionEvent::FiltersReset(_) => "storefront.filter.reset",
            SessionEvent::ItemAdded(_) => "storefront.cart.item_added",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SessionEvent::SizeToggled(e) => e.occurred_at,
            SessionEvent::FiltersReset(e) => e.occurred_at,
            SessionEvent::ItemAdded(e) => e.occurred_at,
        }
    }
}

/// One visitor's storefront state: the size filter and the cart.
///
/// Owned by whoever drives rendering; the catalog is shared read-only. All
/// mutations run to completion synchronously, in call order.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    catalog: Arc<Catalog>,
    filter: FilterState,
    cart: Cart,
    history: EventLog<SessionEvent>,
    version: u64,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_id(SessionId::new(), catalog)
    }

    pub fn with_id(id: SessionId, catalog: Arc<Catalog>) -> Self {
        Self {
            id,
            catalog,
            filter: FilterState::default(),
            cart: Cart::default(),
            history: EventLog::new(),
            version: 0,
        }
    }

    /// Rebuild a session by applying recorded events in order.
    pub fn replay<'e>(
        id: SessionId,
        catalog: Arc<Catalog>,
        events: impl IntoIterator<Item = &'e SessionEvent>,
    ) -> Self {
        let mut session = Self::with_id(id, catalog);
        session.record(events.into_iter().cloned().collect());
        session
    }

    pub fn id_typed(&self) -> SessionId {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Every accepted action, oldest first.
    pub fn history(&self) -> &EventLog<SessionEvent> {
        &self.history
    }

    /// Handle a command and apply the resulting events.
    pub fn execute(&mut self, command: &SessionCommand) -> DomainResult<Vec<SessionEvent>> {
        let events = self.handle(command)?;
        self.record(events.clone());
        Ok(events)
    }

    /// Flip one size in the filter selection.
    pub fn toggle_size(&mut self, size: &str) {
        let events = self.decide_toggle(&ToggleSize {
            size: size.to_string(),
            occurred_at: Utc::now(),
        });
        self.record(events);
    }

    /// Drop the whole filter selection.
    pub fn reset_filters(&mut self) {
        let events = self.decide_reset(&ResetFilters {
            occurred_at: Utc::now(),
        });
        self.record(events);
    }

    /// Resolve `product_id` against the catalog and append the product to the cart.
    ///
    /// Unknown ids fail with `ProductNotFound` and leave the cart unchanged.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> DomainResult<()> {
        self.execute(&SessionCommand::AddToCart(AddToCart {
            product_id,
            occurred_at: Utc::now(),
        }))
        .map(|_| ())
    }

    pub fn current_filtered_products(&self) -> FilteredView<'_> {
        project(&self.catalog, &self.filter)
    }

    pub fn current_cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn current_filter_selection(&self) -> &FilterState {
        &self.filter
    }

    /// Filter buttons: the catalog size index with selection flags.
    pub fn size_options(&self) -> Vec<SizeOption> {
        self.catalog
            .size_index()
            .iter()
            .map(|label| SizeOption {
                label: label.clone(),
                selected: self.filter.is_selected(label.as_str()),
            })
            .collect()
    }

    /// Whether the "reset filters" control should be offered.
    pub fn show_reset(&self) -> bool {
        !self.filter.is_empty()
    }

    pub fn cart_badge(&self) -> Option<usize> {
        self.cart.badge()
    }

    /// Display cards for the currently filtered products.
    pub fn product_cards(&self, format: &PriceFormat) -> Vec<ProductCard> {
        self.current_filtered_products()
            .iter()
            .map(|p| ProductCard::from_product(p, format))
            .collect()
    }

    fn record(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            self.apply(&event);
            self.history.append(self.id, event);
        }
    }

    fn decide_toggle(&self, cmd: &ToggleSize) -> Vec<SessionEvent> {
        let selected = !self.filter.is_selected(&cmd.size);
        vec![SessionEvent::SizeToggled(SizeToggled {
            size: cmd.size.clone(),
            selected,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn decide_reset(&self, cmd: &ResetFilters) -> Vec<SessionEvent> {
        vec![SessionEvent::FiltersReset(FiltersReset {
            previous: self.filter.clone(),
            occurred_at: cmd.occurred_at,
        })]
    }

    fn decide_add(&self, cmd: &AddToCart) -> DomainResult<Vec<SessionEvent>> {
        let product = self.catalog.find(cmd.product_id).map_err(|e| {
            tracing::warn!(session_id = %self.id, product_id = %cmd.product_id, "add to cart: unknown product");
            e
        })?;

        Ok(vec![SessionEvent::ItemAdded(ItemAdded {
            product: product.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}

impl AggregateRoot for Session {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for Session {
    type Command = SessionCommand;
    type Event = SessionEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SessionEvent::SizeToggled(e) => {
                self.filter = self.filter.with_selection(&e.size, e.selected);
                tracing::debug!(
                    session_id = %self.id,
                    size = %e.size,
                    selected = e.selected,
                    active = self.filter.len(),
                    "size filter toggled"
                );
            }
            SessionEvent::FiltersReset(e) => {
                self.filter = self.filter.cleared();
                tracing::debug!(session_id = %self.id, cleared = e.previous.len(), "filters reset");
            }
            SessionEvent::ItemAdded(e) => {
                self.cart.push(e.product.clone());
                tracing::info!(
                    session_id = %self.id,
                    product_id = %e.product.id_typed(),
                    cart_count = self.cart.len(),
                    "item added to cart"
                );
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            SessionCommand::ToggleSize(cmd) => Ok(self.decide_toggle(cmd)),
            SessionCommand::ResetFilters(cmd) => Ok(self.decide_reset(cmd)),
            SessionCommand::AddToCart(cmd) => self.decide_add(cmd),
        }
    }
}
