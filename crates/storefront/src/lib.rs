//! Almé's Bakery Storefront library.
//!
//! Client-side cart for the bakery's storefront pages:
//!
//! - [`store`] - Persisted cart in a named storage slot
//! - [`cart`] - Cart operations and the cart page view
//! - [`page`] - The page elements the view writes into
//! - [`services`] - User notifications and the order hand-off link
//!
//! # Example
//!
//! ```rust
//! use almes_core::Price;
//! use almes_storefront::cart::Storefront;
//! use almes_storefront::page::Page;
//! use almes_storefront::services::handoff::OrderHandoff;
//! use almes_storefront::store::{CartStore, MemoryStorage};
//!
//! let store = CartStore::new(MemoryStorage::default(), "almesBakeryCart");
//! let mut shop = Storefront::new(
//!     store,
//!     Page::cart_page(),
//!     OrderHandoff::default(),
//!     Vec::<String>::new(),
//!     Vec::<url::Url>::new(),
//! );
//!
//! shop.add_item("Bread", Price::parse("35").unwrap(), 2).unwrap();
//! assert_eq!(shop.page().badge_text(), Some("2"));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
mod filters;
pub mod page;
pub mod services;
pub mod store;

pub use error::{AppError, Result};
