//! Collaborators the storefront talks to outside the cart itself.
//!
//! # Services
//!
//! - `notify` - Blocking user notifications (the page's alert dialog)
//! - `handoff` - Order message composition and the messaging link opener

pub mod handoff;
pub mod notify;

pub use handoff::{LinkOpener, OrderHandoff};
pub use notify::Notifier;
