//! Add, update and remove cart lines.

use almes_core::{Cart, CartError, Price, Quantity, QuantityError};
use tracing::{debug, info, instrument, warn};

use super::{ADD_QUANTITY_MESSAGE, Outcome, SET_QUANTITY_MESSAGE, Storefront};
use crate::error::Result;
use crate::services::{LinkOpener, Notifier};
use crate::store::StorageBackend;

impl<S, N, L> Storefront<S, N, L>
where
    S: StorageBackend,
    N: Notifier,
    L: LinkOpener,
{
    /// Add `quantity` units of an item to the cart.
    ///
    /// A quantity below 1, or one too large to store, is rejected with a
    /// notification and the cart is left alone. If the item is already in the cart its quantity grows by
    /// `quantity`; otherwise a new line is appended. On success the user is
    /// told what was added.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    #[instrument(skip(self, price), fields(price = %price))]
    pub fn add_item(&mut self, name: &str, price: Price, quantity: i64) -> Result<Outcome> {
        let quantity = match Quantity::try_from(quantity) {
            Ok(quantity) => quantity,
            Err(QuantityError::TooSmall(_)) => {
                warn!("Rejected add: quantity below 1");
                self.notifier.notify(ADD_QUANTITY_MESSAGE);
                return Ok(Outcome::Rejected);
            }
            Err(e) => {
                warn!(error = %e, "Rejected add: quantity too large");
                self.notifier.notify(&overflow_message(name));
                return Ok(Outcome::Rejected);
            }
        };

        let mut cart = self.store.load();
        if let Err(e) = cart.add(name, price, quantity) {
            warn!(error = %e, "Rejected add");
            self.notifier.notify(&rejection_message(&e));
            return Ok(Outcome::Rejected);
        }

        self.persist(&cart)?;
        info!(lines = cart.len(), "Added to cart");
        self.notifier
            .notify(&format!("{quantity} x {name} added to cart!"));
        Ok(Outcome::Applied)
    }

    /// Set the quantity of a cart line from the value typed into its control.
    ///
    /// Anything other than a positive whole number is rejected: the control
    /// is reset to the stored quantity, the user is notified and nothing is
    /// saved. Names not in the cart are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, name: &str, input: &str) -> Result<Outcome> {
        let mut cart = self.store.load();

        let quantity = match input.parse::<Quantity>() {
            Ok(quantity) => quantity,
            Err(e) => {
                warn!(error = %e, "Rejected quantity change");
                if let Some(prior) = cart.get(name).map(|item| item.quantity) {
                    self.revert_quantity_input(name, prior);
                }
                self.notifier.notify(SET_QUANTITY_MESSAGE);
                return Ok(Outcome::Rejected);
            }
        };

        if cart.set_quantity(name, quantity).is_none() {
            debug!("Item not in cart, nothing to update");
            return Ok(Outcome::Unchanged);
        }

        self.persist(&cart)?;
        info!(%quantity, "Updated quantity");
        Ok(Outcome::Applied)
    }

    /// Remove an item from the cart. Names not in the cart are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, name: &str) -> Result<Outcome> {
        let mut cart = self.store.load();
        if cart.remove(name).is_none() {
            debug!("Item not in cart, nothing to remove");
            return Ok(Outcome::Unchanged);
        }

        self.persist(&cart)?;
        info!(lines = cart.len(), "Removed from cart");
        Ok(Outcome::Applied)
    }

    /// Save the cart, then bring the badge and the cart view up to date.
    fn persist(&mut self, cart: &Cart) -> Result<()> {
        self.store.save(cart)?;
        self.refresh_indicator();
        self.render();
        Ok(())
    }

    fn revert_quantity_input(&mut self, name: &str, prior: Quantity) {
        if let Some(row) = self.page.row_mut(name) {
            row.quantity_input = prior.to_string();
        }
    }
}

fn rejection_message(err: &CartError) -> String {
    match err {
        CartError::EmptyName => "Item name cannot be empty.".to_string(),
        CartError::Overflow(name) => overflow_message(name),
    }
}

fn overflow_message(name: &str) -> String {
    format!("Cannot add that many {name} to the cart.")
}
