//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `ALMES_CART_DIR` - Directory holding the file-backed cart (default: `.almes`)
//! - `ALMES_CART_SLOT` - Storage slot name (default: `almesBakeryCart`)
//! - `ALMES_ORDER_DOMAIN` - Messaging domain for the order link (default: `wa.me`)
//! - `ALMES_ORDER_RECIPIENT` - Recipient id, digits only (default: `27681651930`)
//! - `ALMES_ORDER_GREETING` - First line of the order message

use std::path::PathBuf;

use thiserror::Error;

/// Default storage slot for the cart.
pub const DEFAULT_CART_SLOT: &str = "almesBakeryCart";
/// Default directory for the file-backed store.
pub const DEFAULT_CART_DIR: &str = ".almes";
/// Default messaging domain.
pub const DEFAULT_ORDER_DOMAIN: &str = "wa.me";
/// Default order recipient.
pub const DEFAULT_ORDER_RECIPIENT: &str = "27681651930";
/// Default greeting placed before the order lines.
pub const DEFAULT_ORDER_GREETING: &str = "Hello Almé's Bakery! I'd like to order:";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for the file-backed cart store
    pub cart_dir: PathBuf,
    /// Name of the storage slot holding the cart
    pub cart_slot: String,
    /// Order hand-off settings
    pub order: OrderConfig,
}

/// Where and how the order message is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfig {
    /// Messaging domain (e.g., wa.me)
    pub domain: String,
    /// Recipient id appended to the link path
    pub recipient: String,
    /// Greeting line that opens the message
    pub greeting: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_dir: PathBuf::from(DEFAULT_CART_DIR),
            cart_slot: DEFAULT_CART_SLOT.to_string(),
            order: OrderConfig::default(),
        }
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_ORDER_DOMAIN.to_string(),
            recipient: DEFAULT_ORDER_RECIPIENT.to_string(),
            greeting: DEFAULT_ORDER_GREETING.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let cart_dir = PathBuf::from(get_env_or_default("ALMES_CART_DIR", DEFAULT_CART_DIR));
        let cart_slot = get_env_or_default("ALMES_CART_SLOT", DEFAULT_CART_SLOT);
        validate_slot(&cart_slot, "ALMES_CART_SLOT")?;

        Ok(Self {
            cart_dir,
            cart_slot,
            order: OrderConfig::from_env()?,
        })
    }
}

impl OrderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let domain = get_env_or_default("ALMES_ORDER_DOMAIN", DEFAULT_ORDER_DOMAIN);
        validate_domain(&domain, "ALMES_ORDER_DOMAIN")?;
        let recipient = get_env_or_default("ALMES_ORDER_RECIPIENT", DEFAULT_ORDER_RECIPIENT);
        validate_recipient(&recipient, "ALMES_ORDER_RECIPIENT")?;
        let greeting = get_env_or_default("ALMES_ORDER_GREETING", DEFAULT_ORDER_GREETING);

        Ok(Self {
            domain,
            recipient,
            greeting,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Slot names become file names, so keep them to a safe alphabet.
fn validate_slot(slot: &str, var_name: &str) -> Result<(), ConfigError> {
    if slot.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    if !slot
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("'{slot}' may only contain letters, digits, '-' and '_'"),
        ));
    }
    Ok(())
}

/// The domain must be a bare host name, no scheme or path.
fn validate_domain(domain: &str, var_name: &str) -> Result<(), ConfigError> {
    if domain.contains('/') || domain.contains(':') {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("'{domain}' must be a host name without scheme or path"),
        ));
    }
    url::Host::parse(domain)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))
}

fn validate_recipient(recipient: &str, var_name: &str) -> Result<(), ConfigError> {
    if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("'{recipient}' must be a non-empty string of digits"),
        ));
    }
    Ok(())
}
