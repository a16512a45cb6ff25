//! Integration tests for the Almé's Bakery storefront cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p almes-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - shopping flows across product and cart pages
//! - `file_store` - the file-backed store across sessions
//!
//! The tests only use the public APIs of `almes-core` and `almes-storefront`.
