//! Order hand-off to the external messaging service.
//!
//! The finished order is not submitted anywhere by this crate. It is turned
//! into a plain-text message, percent-encoded into a link of the form
//! `https://<domain>/<recipient>?text=<message>`, and that link is handed to
//! a [`LinkOpener`]. No response is awaited.

use almes_core::{Cart, LineItem};
use url::Url;

use crate::config::OrderConfig;

/// Opens a link in a new browsing context.
pub trait LinkOpener {
    fn open(&mut self, url: &Url);
}

/// Records every opened link.
impl LinkOpener for Vec<Url> {
    fn open(&mut self, url: &Url) {
        self.push(url.clone());
    }
}

/// Builds order messages and links for one messaging destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHandoff {
    domain: String,
    recipient: String,
    greeting: String,
}

impl Default for OrderHandoff {
    fn default() -> Self {
        Self::new(&OrderConfig::default())
    }
}

impl OrderHandoff {
    /// Create a hand-off from configuration.
    #[must_use]
    pub fn new(config: &OrderConfig) -> Self {
        Self {
            domain: config.domain.clone(),
            recipient: config.recipient.clone(),
            greeting: config.greeting.clone(),
        }
    }

    /// Compose the plain-text order message.
    ///
    /// The greeting comes first, then one line per item and a closing total:
    ///
    /// ```text
    /// Hello Almé's Bakery! I'd like to order:
    /// 1 x Cake (R150.00) = R150.00
    /// 5 x Bun (R10.00) = R50.00
    /// Total: R200.00
    /// ```
    #[must_use]
    pub fn message(&self, cart: &Cart) -> String {
        let mut lines = Vec::with_capacity(cart.len() + 2);
        lines.push(self.greeting.clone());
        lines.extend(cart.iter().map(order_line));
        lines.push(format!("Total: {}", cart.total().display()));
        lines.join("\n")
    }

    /// Build the messaging link carrying the order message.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured domain does not form a valid URL.
    pub fn link(&self, cart: &Cart) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("https://{}/{}", self.domain, self.recipient))?;
        let message = self.message(cart);
        let text = urlencoding::encode(&message);
        url.set_query(Some(&format!("text={text}")));
        Ok(url)
    }
}

/// `<qty> x <name> (R<price>) = R<line total>`
fn order_line(item: &LineItem) -> String {
    format!(
        "{} x {} ({}) = {}",
        item.quantity,
        item.name,
        item.price.display(),
        item.line_total().display()
    )
}
