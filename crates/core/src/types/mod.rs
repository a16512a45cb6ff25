//! Core types for the bakery cart.
//!
//! This module provides validated wrappers for the cart's domain concepts.

pub mod cart;
pub mod price;
pub mod quantity;

pub use cart::{Cart, CartDataError, CartError, LineItem};
pub use price::{CURRENCY_SYMBOL, Price, PriceError};
pub use quantity::{Quantity, QuantityError};
