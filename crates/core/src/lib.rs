//! Almé's Bakery Core - Cart domain types.
//!
//! This crate provides the types shared by the storefront library and the CLI:
//! - [`Price`] - Non-negative decimal amount in rand
//! - [`Quantity`] - Line item quantity, always at least 1
//! - [`LineItem`] and [`Cart`] - The persisted cart and its derived totals
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no storage, no
//! rendering, no notifications. Persistence and presentation live in
//! `almes-storefront`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
