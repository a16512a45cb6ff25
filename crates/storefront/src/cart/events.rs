//! Page events and their dispatch to cart operations.

use tracing::instrument;

use super::{Outcome, Storefront};
use crate::error::Result;
use crate::services::{LinkOpener, Notifier};
use crate::store::StorageBackend;

/// A user interaction with one of the cart page's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A row's quantity control was changed to `value`.
    QuantityChanged { name: String, value: String },
    /// A row's remove button was clicked.
    RemoveClicked { name: String },
    /// The order button was clicked.
    OrderClicked,
}

impl<S, N, L> Storefront<S, N, L>
where
    S: StorageBackend,
    N: Notifier,
    L: LinkOpener,
{
    /// Handle one page event.
    ///
    /// Row events are ignored unless a row for that item is on the page.
    ///
    /// # Errors
    ///
    /// Returns any error from the operation the event triggers.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: PageEvent) -> Result<Outcome> {
        match event {
            PageEvent::QuantityChanged { name, value } => {
                let Some(row) = self.page.row_mut(&name) else {
                    return Ok(Outcome::Unchanged);
                };
                row.quantity_input.clone_from(&value);
                self.set_quantity(&name, &value)
            }
            PageEvent::RemoveClicked { name } => {
                if self.page.row(&name).is_none() {
                    return Ok(Outcome::Unchanged);
                }
                self.remove_item(&name)
            }
            PageEvent::OrderClicked => self.submit_order(),
        }
    }
}
