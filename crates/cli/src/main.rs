//! Almé's Bakery CLI - the storefront cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two loaves of bread at R35.00
//! almes add Bread 35 --quantity 2
//!
//! # Change a quantity, remove an item
//! almes set Bread 3
//! almes remove Bread
//!
//! # Show the cart, the badge count, or the cart page markup
//! almes show
//! almes badge
//! almes html
//!
//! # Print the WhatsApp link carrying the order
//! almes order
//! ```
//!
//! # Environment Variables
//!
//! See `almes_storefront::config` for the full list. `RUST_LOG` controls
//! log output, which goes to stderr; set `ALMES_LOG_FORMAT=json` for
//! structured logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use almes_storefront::config::StorefrontConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::cart::CommandError;

#[derive(Parser)]
#[command(name = "almes")]
#[command(author, version, about = "Almé's Bakery cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the cart
    Add {
        /// Item name
        name: String,

        /// Unit price in rand (e.g. 35 or 12.50)
        price: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Change the quantity of an item already in the cart
    Set {
        /// Item name
        name: String,

        /// New quantity, a whole number of at least 1
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Remove an item from the cart
    Remove {
        /// Item name
        name: String,
    },
    /// Show the cart
    Show,
    /// Show the cart item count
    Badge,
    /// Print the order link for the current cart
    Order,
    /// Print the cart page as HTML
    Html,
}

fn main() {
    // Logs go to stderr so command output stays clean on stdout
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "almes_storefront=warn,almes_cli=info".into());

    // ALMES_LOG_FORMAT=json switches to one JSON object per event
    let json = std::env::var("ALMES_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Add {
            name,
            price,
            quantity,
        } => commands::cart::add(&config, &name, &price, quantity),
        Commands::Set { name, quantity } => commands::cart::set(&config, &name, &quantity),
        Commands::Remove { name } => commands::cart::remove(&config, &name),
        Commands::Show => commands::cart::show(&config),
        Commands::Badge => commands::cart::badge(&config),
        Commands::Order => commands::cart::order(&config),
        Commands::Html => commands::cart::html(&config),
    }
}
