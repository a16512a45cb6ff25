//! Cart and line item types.
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s keyed by item name. Adding
//! a name that is already present increments its quantity instead of adding
//! a second line, so names are unique at all times.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::price::Price;
use super::quantity::Quantity;

/// Errors from cart mutations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Item names are the cart key and cannot be blank.
    #[error("item name cannot be empty")]
    EmptyName,
    /// Incrementing the quantity would overflow.
    #[error("quantity for {0} is too large")]
    Overflow(String),
}

/// Errors from validating a list of lines as a cart, e.g. a stored one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartDataError {
    /// A line has a blank name.
    #[error("item name cannot be empty")]
    EmptyName,
    /// The same name appears on two lines.
    #[error("duplicate cart item: {0}")]
    DuplicateItem(String),
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name and unique key.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units ordered.
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a new line item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyName`] if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        price: Price,
        quantity: Quantity,
    ) -> Result<Self, CartError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        Ok(Self {
            name,
            price,
            quantity,
        })
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The shopping cart.
///
/// Serializes as a bare JSON array of line items. Deserializing rejects
/// blank or duplicate names, so a decoded cart always upholds the same
/// invariants as one built through [`Cart::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Iterate over line items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Add `quantity` units of an item and return the line's new quantity.
    ///
    /// If a line with the same name exists its quantity is incremented and
    /// its price is left as it was. Otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the new quantity would
    /// overflow. The cart is unchanged on error.
    pub fn add(
        &mut self,
        name: &str,
        price: Price,
        quantity: Quantity,
    ) -> Result<Quantity, CartError> {
        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| CartError::Overflow(name.to_owned()))?;
            return Ok(existing.quantity);
        }

        self.items.push(LineItem::new(name, price, quantity)?);
        Ok(quantity)
    }

    /// Set the quantity of an existing line.
    ///
    /// Returns the previous quantity, or `None` if no line has that name.
    pub fn set_quantity(&mut self, name: &str, quantity: Quantity) -> Option<Quantity> {
        let item = self.items.iter_mut().find(|item| item.name == name)?;
        Some(std::mem::replace(&mut item.quantity, quantity))
    }

    /// Remove the line for `name`, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CartDataError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.name.trim().is_empty() {
                return Err(CartDataError::EmptyName);
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CartDataError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self { items })
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
