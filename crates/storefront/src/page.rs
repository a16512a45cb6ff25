//! Page elements the cart view writes into.
//!
//! A storefront page may carry any subset of four elements: the cart rows
//! container, the total, the order button and the navbar badge. Each is an
//! `Option`; a `None` element switches off the feature that would write to
//! it, so the same storefront code runs on product pages and the cart page.

/// Minimum value accepted by a row's quantity control.
pub const MIN_QUANTITY: u32 = 1;

/// The elements present on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Container for the cart rows.
    pub cart_items: Option<CartItems>,
    /// Element showing the grand total.
    pub cart_total: Option<TextElement>,
    /// The "order now" button.
    pub order_button: Option<Button>,
    /// Navbar item-count badge.
    pub cart_badge: Option<Badge>,
}

impl Page {
    /// The cart page: every element present.
    #[must_use]
    pub fn cart_page() -> Self {
        Self {
            cart_items: Some(CartItems::default()),
            cart_total: Some(TextElement::default()),
            order_button: Some(Button::default()),
            cart_badge: Some(Badge::default()),
        }
    }

    /// A product page: only the navbar badge.
    #[must_use]
    pub fn product_page() -> Self {
        Self {
            cart_badge: Some(Badge::default()),
            ..Self::default()
        }
    }

    /// Rendered rows, or an empty slice if there is no container.
    #[must_use]
    pub fn rows(&self) -> &[CartRow] {
        self.cart_items
            .as_ref()
            .map(|items| items.rows.as_slice())
            .unwrap_or_default()
    }

    /// The rendered row for `name`.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&CartRow> {
        self.rows().iter().find(|row| row.name == name)
    }

    pub(crate) fn row_mut(&mut self, name: &str) -> Option<&mut CartRow> {
        self.cart_items
            .as_mut()?
            .rows
            .iter_mut()
            .find(|row| row.name == name)
    }

    /// Text of the total element.
    #[must_use]
    pub fn total_text(&self) -> Option<&str> {
        self.cart_total.as_ref().map(|t| t.text.as_str())
    }

    /// Badge text, if the badge is present and visible.
    #[must_use]
    pub fn badge_text(&self) -> Option<&str> {
        self.cart_badge
            .as_ref()
            .filter(|badge| badge.visible)
            .map(|badge| badge.text.as_str())
    }

    /// Whether the order button is present and enabled.
    #[must_use]
    pub fn order_enabled(&self) -> bool {
        self.order_button.as_ref().is_some_and(|b| !b.disabled)
    }
}

/// Cart rows container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartItems {
    /// Rendered markup of the container body.
    pub html: String,
    /// One row per line item, in cart order.
    pub rows: Vec<CartRow>,
}

/// One rendered cart line with its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub name: String,
    /// Unit price, two decimals.
    pub price: String,
    /// Current value of the quantity control as the user sees it.
    pub quantity_input: String,
    /// Line total, two decimals.
    pub line_price: String,
}

/// Plain text element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextElement {
    pub text: String,
}

/// A button that can be disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub disabled: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self { disabled: true }
    }
}

/// Item-count badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_page_has_every_element() {
        let page = Page::cart_page();
        assert!(page.cart_items.is_some());
        assert!(page.cart_total.is_some());
        assert!(page.order_button.is_some());
        assert!(page.cart_badge.is_some());
        assert!(!page.order_enabled());
    }

    #[test]
    fn test_product_page_has_only_badge() {
        let page = Page::product_page();
        assert!(page.cart_items.is_none());
        assert!(page.cart_total.is_none());
        assert!(page.order_button.is_none());
        assert!(page.cart_badge.is_some());
        assert!(page.rows().is_empty());
    }

    #[test]
    fn test_hidden_badge_has_no_text() {
        let mut page = Page::product_page();
        if let Some(badge) = page.cart_badge.as_mut() {
            badge.text = "3".to_string();
        }
        assert_eq!(page.badge_text(), None);

        if let Some(badge) = page.cart_badge.as_mut() {
            badge.visible = true;
        }
        assert_eq!(page.badge_text(), Some("3"));
    }
}
