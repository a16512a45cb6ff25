//! Cart operations and the cart page view.
//!
//! [`Storefront`] ties the pieces of one page together: the persisted
//! [`CartStore`], the [`Page`] elements, the user [`Notifier`] and the
//! [`LinkOpener`] used for the order hand-off.
//!
//! Every mutating operation follows the same cycle: load the cart from the
//! store, mutate it, save it, refresh the badge, re-render the cart view.
//! The page is never the source of truth; it is rebuilt from the store after
//! each change.

mod events;
mod operations;
mod view;

pub use events::PageEvent;
pub use view::{CartItemView, CartItemsTemplate, CartShowTemplate, CartView};

use crate::page::Page;
use crate::services::{LinkOpener, Notifier, OrderHandoff};
use crate::store::{CartStore, StorageBackend};

/// Shown when an add is attempted with a quantity below 1.
pub const ADD_QUANTITY_MESSAGE: &str = "Quantity must be at least 1.";
/// Shown when a quantity control is set to something other than a positive whole number.
pub const SET_QUANTITY_MESSAGE: &str = "Quantity must be at least 1";
/// Shown in the cart container when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// What an operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cart was changed and saved (or the order link was opened).
    Applied,
    /// The input was invalid; the user was notified and nothing was saved.
    Rejected,
    /// Nothing to do, e.g. the item is not in the cart.
    Unchanged,
}

/// The cart as seen from one storefront page.
#[derive(Debug)]
pub struct Storefront<S, N, L> {
    store: CartStore<S>,
    page: Page,
    handoff: OrderHandoff,
    notifier: N,
    opener: L,
}

impl<S, N, L> Storefront<S, N, L>
where
    S: StorageBackend,
    N: Notifier,
    L: LinkOpener,
{
    /// Create a storefront for `page`.
    ///
    /// The page is left as given; call [`Storefront::page_loaded`] to fill it
    /// from the stored cart.
    pub fn new(
        store: CartStore<S>,
        page: Page,
        handoff: OrderHandoff,
        notifier: N,
        opener: L,
    ) -> Self {
        Self {
            store,
            page,
            handoff,
            notifier,
            opener,
        }
    }

    /// The page elements as last rendered.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// The cart store.
    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// The notifier, e.g. to read back recorded messages.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The link opener, e.g. to read back opened links.
    #[must_use]
    pub const fn opener(&self) -> &L {
        &self.opener
    }

    /// Fill the page from the stored cart: badge first, then the cart view.
    pub fn page_loaded(&mut self) {
        self.refresh_indicator();
        self.render();
    }
}
