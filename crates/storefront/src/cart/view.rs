//! Cart page rendering, the item-count badge and order submission.

use almes_core::{Cart, LineItem};
use askama::Template;
use tracing::{debug, info, warn};

use super::{EMPTY_CART_MESSAGE, Outcome, Storefront};
use crate::error::Result;
use crate::filters;
use crate::page::{CartItems, CartRow, MIN_QUANTITY};
use crate::services::{LinkOpener, Notifier};
use crate::store::StorageBackend;

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    /// Unit price, two decimals, no currency symbol.
    pub price: String,
    /// Line total, two decimals, no currency symbol.
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Grand total: `0` for an empty cart, otherwise two decimals.
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: "0".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self::empty();
        }
        Self {
            items: cart.iter().map(CartItemView::from).collect(),
            total: cart.total().to_string(),
            item_count: cart.item_count(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.get(),
            price: item.price.to_string(),
            line_price: item.line_total().to_string(),
        }
    }
}

impl From<&CartItemView> for CartRow {
    fn from(item: &CartItemView) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.clone(),
            quantity_input: item.quantity.to_string(),
            line_price: item.line_price.clone(),
        }
    }
}

/// Cart rows fragment, the body of the cart container.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
    pub min_quantity: u32,
    pub empty_message: &'a str,
}

/// Standalone cart page.
#[derive(Template)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate<'a> {
    pub cart: &'a CartView,
    pub min_quantity: u32,
    pub empty_message: &'a str,
}

/// Write rows and markup into the container together.
///
/// If the markup failed to render the container is left as it was, so its
/// rows and markup always describe the same cart.
fn fill_container(container: &mut CartItems, view: &CartView, html: askama::Result<String>) {
    match html {
        Ok(html) => {
            container.rows = view.items.iter().map(CartRow::from).collect();
            container.html = html;
        }
        Err(e) => warn!(error = %e, "Failed to render cart rows, keeping previous view"),
    }
}

impl<S, N, L> Storefront<S, N, L>
where
    S: StorageBackend,
    N: Notifier,
    L: LinkOpener,
{
    /// Rebuild the cart container, total and order button from the store.
    ///
    /// Does nothing on pages without a cart container. The total and the
    /// order button are each skipped if absent.
    pub fn render(&mut self) {
        if self.page.cart_items.is_none() {
            return;
        }

        let cart = self.store.load();
        let view = CartView::from(&cart);
        let html = CartItemsTemplate {
            cart: &view,
            min_quantity: MIN_QUANTITY,
            empty_message: EMPTY_CART_MESSAGE,
        }
        .render();

        if let Some(container) = self.page.cart_items.as_mut() {
            fill_container(container, &view, html);
        }
        if let Some(total) = self.page.cart_total.as_mut() {
            total.text.clone_from(&view.total);
        }
        if let Some(button) = self.page.order_button.as_mut() {
            button.disabled = cart.is_empty();
        }

        debug!(rows = view.items.len(), total = %view.total, "Rendered cart");
    }

    /// Show the total number of units in the badge, or hide it when the
    /// cart is empty. Does nothing on pages without a badge.
    pub fn refresh_indicator(&mut self) {
        let Some(badge) = self.page.cart_badge.as_mut() else {
            return;
        };

        let count = self.store.load().item_count();
        if count > 0 {
            badge.text = count.to_string();
            badge.visible = true;
        } else {
            badge.visible = false;
        }
    }

    /// Send the cart to the messaging service.
    ///
    /// Only acts when the order button is present and enabled. Composes the
    /// order message from the stored cart and opens the messaging link.
    ///
    /// # Errors
    ///
    /// Returns an error if the order link cannot be built.
    pub fn submit_order(&mut self) -> Result<Outcome> {
        if !self.page.order_enabled() {
            debug!("Order button absent or disabled");
            return Ok(Outcome::Unchanged);
        }

        let cart = self.store.load();
        if cart.is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let url = self.handoff.link(&cart)?;
        info!(lines = cart.len(), total = %cart.total(), "Opening order link");
        self.opener.open(&url);
        Ok(Outcome::Applied)
    }

    /// Render the full cart page as HTML from the stored cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn cart_page_html(&self) -> Result<String> {
        let view = CartView::from(&self.store.load());
        let html = CartShowTemplate {
            cart: &view,
            min_quantity: MIN_QUANTITY,
            empty_message: EMPTY_CART_MESSAGE,
        }
        .render()?;
        Ok(html)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::test_support::{SLOT, price, storefront, storefront_with};
    use crate::page::Page;
    use crate::store::MemoryStorage;
    use serde_json::json;

    fn cake_and_buns() -> MemoryStorage {
        MemoryStorage::default().with_slot(
            SLOT,
            json!([
                {"name": "Cake", "price": 150, "quantity": 1},
                {"name": "Bun", "price": 10, "quantity": 5}
            ])
            .to_string(),
        )
    }

    #[test]
    fn test_render_empty_cart() {
        let shop = storefront(Page::cart_page());
        let page = shop.page();

        assert!(page.rows().is_empty());
        assert!(
            page.cart_items
                .as_ref()
                .unwrap()
                .html
                .contains(EMPTY_CART_MESSAGE)
        );
        assert_eq!(page.total_text(), Some("0"));
        assert!(!page.order_enabled());
    }

    #[test]
    fn test_render_rows_in_order() {
        let shop = storefront_with(cake_and_buns(), Page::cart_page());
        let page = shop.page();

        let names: Vec<&str> = page.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Cake", "Bun"]);

        let bun = page.row("Bun").unwrap();
        assert_eq!(bun.price, "10.00");
        assert_eq!(bun.quantity_input, "5");
        assert_eq!(bun.line_price, "50.00");

        assert_eq!(page.total_text(), Some("200.00"));
        assert!(page.order_enabled());
    }

    #[test]
    fn test_render_html_fragment() {
        let shop = storefront_with(cake_and_buns(), Page::cart_page());
        let html = &shop.page().cart_items.as_ref().unwrap().html;

        assert!(html.contains("<strong>Cake</strong>"));
        assert!(html.contains("R150.00 each"));
        assert!(html.contains("R50.00"));
        assert!(html.contains("min=\"1\""));
        assert!(!html.contains(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_render_escapes_names() {
        let mut shop = storefront(Page::cart_page());
        shop.add_item("<b>Pie</b>", price("20"), 1).unwrap();

        let html = &shop.page().cart_items.as_ref().unwrap().html;
        assert!(!html.contains("<b>Pie</b>"));
        assert_eq!(shop.page().rows().first().unwrap().name, "<b>Pie</b>");
    }

    #[test]
    fn test_render_without_container_is_noop() {
        let mut page = Page::cart_page();
        page.cart_items = None;
        let shop = storefront_with(cake_and_buns(), page);

        // Total and button stay untouched without a container
        assert_eq!(shop.page().total_text(), Some(""));
        assert!(!shop.page().order_enabled());
        assert_eq!(shop.page().badge_text(), Some("6"));
    }

    #[test]
    fn test_failed_markup_keeps_previous_container() {
        let shop = storefront_with(cake_and_buns(), Page::cart_page());
        let mut container = shop.page().cart_items.clone().unwrap();
        let before = container.clone();

        fill_container(&mut container, &CartView::empty(), Err(askama::Error::Fmt));

        assert_eq!(container, before);
        assert_eq!(container.rows.len(), 2);
    }

    #[test]
    fn test_render_without_total_or_button() {
        let mut page = Page::cart_page();
        page.cart_total = None;
        page.order_button = None;
        let shop = storefront_with(cake_and_buns(), page);

        assert_eq!(shop.page().rows().len(), 2);
    }

    #[test]
    fn test_indicator_counts_units() {
        let shop = storefront_with(cake_and_buns(), Page::product_page());
        assert_eq!(shop.page().badge_text(), Some("6"));
    }

    #[test]
    fn test_indicator_hidden_when_empty() {
        let shop = storefront(Page::product_page());
        let badge = shop.page().cart_badge.as_ref().unwrap();
        assert!(!badge.visible);
    }

    #[test]
    fn test_indicator_without_badge_is_noop() {
        let shop = storefront(Page::default());
        assert!(shop.page().cart_badge.is_none());
    }

    #[test]
    fn test_submit_order_opens_link() {
        let mut shop = storefront_with(cake_and_buns(), Page::cart_page());

        assert_eq!(shop.submit_order().unwrap(), Outcome::Applied);

        let url = shop.opener().first().unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(text.contains("1 x Cake (R150.00) = R150.00"));
        assert!(text.contains("5 x Bun (R10.00) = R50.00"));
        assert!(text.ends_with("Total: R200.00"));
    }

    #[test]
    fn test_submit_order_disabled_when_empty() {
        let mut shop = storefront(Page::cart_page());

        assert_eq!(shop.submit_order().unwrap(), Outcome::Unchanged);
        assert!(shop.opener().is_empty());
    }

    #[test]
    fn test_submit_order_without_button() {
        let shop_page = Page::product_page();
        let mut shop = storefront_with(cake_and_buns(), shop_page);

        assert_eq!(shop.submit_order().unwrap(), Outcome::Unchanged);
        assert!(shop.opener().is_empty());
    }

    #[test]
    fn test_cart_page_html() {
        let shop = storefront_with(cake_and_buns(), Page::product_page());
        let html = shop.cart_page_html().unwrap();

        assert!(html.contains("id=\"cartItems\""));
        assert!(html.contains("<span id=\"cartTotal\">200.00</span>"));
        assert!(html.contains("id=\"cartCountBadge\""));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn test_cart_page_html_empty() {
        let shop = storefront(Page::product_page());
        let html = shop.cart_page_html().unwrap();

        assert!(html.contains(EMPTY_CART_MESSAGE));
        assert!(html.contains("<span id=\"cartTotal\">0</span>"));
        assert!(html.contains(" disabled"));
        assert!(!html.contains("cartCountBadge"));
    }
}
