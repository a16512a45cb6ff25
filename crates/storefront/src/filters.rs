//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use almes_core::CURRENCY_SYMBOL;

/// Prefixes an already formatted amount with the currency symbol.
///
/// Usage in templates: `{{ item.price|rand }}` renders `R35.00`
#[askama::filter_fn]
pub fn rand(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{CURRENCY_SYMBOL}{amount}"))
}
