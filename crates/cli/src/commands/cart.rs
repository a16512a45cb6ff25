//! Cart commands.
//!
//! Each command opens the file-backed cart, plays the part of one storefront
//! page, and prints what that page would show. `add` acts like a product
//! page (badge only); every other command acts on the cart page.

#![allow(clippy::print_stdout)]

use almes_core::{Price, PriceError};
use almes_storefront::AppError;
use almes_storefront::cart::{Outcome, PageEvent, Storefront};
use almes_storefront::config::{ConfigError, StorefrontConfig};
use almes_storefront::page::Page;
use almes_storefront::services::{LinkOpener, Notifier, OrderHandoff};
use almes_storefront::store::{CartStore, FileStorage};
use thiserror::Error;
use url::Url;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The price argument is not a valid amount.
    #[error("{0}")]
    InvalidPrice(#[from] PriceError),

    /// The storefront failed.
    #[error(transparent)]
    App(#[from] AppError),
}

/// Prints notifications the way the site shows its alert dialog.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Prints the order link for the user to open.
struct ConsoleOpener;

impl LinkOpener for ConsoleOpener {
    fn open(&mut self, url: &Url) {
        println!("Open this link to send your order:");
        println!("{url}");
    }
}

type CliStorefront = Storefront<FileStorage, ConsoleNotifier, ConsoleOpener>;

fn open(config: &StorefrontConfig, page: Page) -> CliStorefront {
    let store = CartStore::new(FileStorage::new(&config.cart_dir), &config.cart_slot);
    let mut shop = Storefront::new(
        store,
        page,
        OrderHandoff::new(&config.order),
        ConsoleNotifier,
        ConsoleOpener,
    );
    shop.page_loaded();
    shop
}

/// Add an item from a product page.
///
/// # Errors
///
/// Returns an error if the price is invalid or the cart cannot be saved.
pub fn add(
    config: &StorefrontConfig,
    name: &str,
    price: &str,
    quantity: i64,
) -> Result<(), CommandError> {
    let price = Price::parse(price)?;
    let mut shop = open(config, Page::product_page());

    if shop.add_item(name, price, quantity)? == Outcome::Applied {
        print_badge(&shop);
    }
    Ok(())
}

/// Change a quantity through the row's quantity control.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn set(config: &StorefrontConfig, name: &str, quantity: &str) -> Result<(), CommandError> {
    let mut shop = open(config, Page::cart_page());
    let event = PageEvent::QuantityChanged {
        name: name.to_owned(),
        value: quantity.to_owned(),
    };

    match shop.dispatch(event)? {
        Outcome::Applied => print_cart(&shop),
        Outcome::Rejected => {}
        Outcome::Unchanged => println!("{name} is not in the cart."),
    }
    Ok(())
}

/// Remove an item through the row's remove button.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove(config: &StorefrontConfig, name: &str) -> Result<(), CommandError> {
    let mut shop = open(config, Page::cart_page());
    let event = PageEvent::RemoveClicked {
        name: name.to_owned(),
    };

    match shop.dispatch(event)? {
        Outcome::Applied => print_cart(&shop),
        Outcome::Rejected | Outcome::Unchanged => println!("{name} is not in the cart."),
    }
    Ok(())
}

/// Print the cart page.
///
/// # Errors
///
/// This command does not currently fail; the signature matches the others.
#[allow(clippy::unnecessary_wraps)]
pub fn show(config: &StorefrontConfig) -> Result<(), CommandError> {
    let shop = open(config, Page::cart_page());
    print_cart(&shop);
    Ok(())
}

/// Print the navbar badge.
///
/// # Errors
///
/// This command does not currently fail; the signature matches the others.
#[allow(clippy::unnecessary_wraps)]
pub fn badge(config: &StorefrontConfig) -> Result<(), CommandError> {
    let shop = open(config, Page::product_page());
    print_badge(&shop);
    Ok(())
}

/// Press the order button.
///
/// # Errors
///
/// Returns an error if the order link cannot be built.
pub fn order(config: &StorefrontConfig) -> Result<(), CommandError> {
    let mut shop = open(config, Page::cart_page());

    if shop.dispatch(PageEvent::OrderClicked)? == Outcome::Unchanged {
        println!("Your cart is empty. Add something before ordering.");
    }
    Ok(())
}

/// Print the cart page markup.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn html(config: &StorefrontConfig) -> Result<(), CommandError> {
    let shop = open(config, Page::cart_page());
    println!("{}", shop.cart_page_html()?);
    Ok(())
}

fn print_badge(shop: &CliStorefront) {
    match shop.page().badge_text() {
        Some(count) => println!("Cart: {count}"),
        None => println!("Cart: empty"),
    }
}

fn print_cart(shop: &CliStorefront) {
    let page = shop.page();
    let rows = page.rows();

    if rows.is_empty() {
        println!("{}", almes_storefront::cart::EMPTY_CART_MESSAGE);
    }

    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    for row in rows {
        println!(
            "{:<width$}  R{:>8} x {:<4} R{:>9}",
            row.name, row.price, row.quantity_input, row.line_price
        );
    }

    println!("Total: R{}", page.total_text().unwrap_or("0"));
    if page.order_enabled() {
        println!("Run `almes order` to send this order.");
    }
}
