//! Phone City CLI - browse the catalog and manage favorites, comparison and cart.
//!
//! # Usage
//!
//! ```bash
//! # Filter and sort the catalog
//! phone-city catalog --brand Apple --brand Samsung --price 50k-80k --sort price-asc
//!
//! # Same thing as a catalog page query string
//! phone-city catalog --query "brand=Apple&brand=Samsung&priceRange=50k-80k&sort=price-asc"
//!
//! # Product detail with similar phones
//! phone-city show pixel-8
//!
//! # Compare up to four phones
//! phone-city compare add pixel-8
//! phone-city compare list
//!
//! # Sign in; favorites, compare-list and cart switch to the account
//! phone-city auth login -e aidana@mail.kg -p secret1
//! ```
//!
//! # Commands
//!
//! - `home` - Popular and newest phones
//! - `catalog` - Search, filter and sort
//! - `search` - Free-text search
//! - `show` - Product detail
//! - `compare` / `favorites` / `cart` - Persisted lists
//! - `auth` - Local accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use phone_city_storefront::config::StorefrontConfig;
use phone_city_storefront::{Storefront, StorefrontError};

mod commands;

use commands::{
    AuthAction, CartAction, CatalogArgs, CompareAction, FavoritesAction, catalog::DEFAULT_LIMIT,
};

#[derive(Parser)]
#[command(name = "phone-city")]
#[command(author, version, about = "Phone City catalog CLI")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, env = "PHONE_CITY_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Popular and newest phones
    Home {
        /// Phones per showcase
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Search, filter and sort the catalog
    Catalog(CatalogArgs),
    /// Free-text search over name, brand, OS, processor and description
    Search {
        /// Search term
        term: String,
    },
    /// Show a product with its similar phones
    Show {
        /// Product id
        id: String,
        /// Number of similar phones to list
        #[arg(long, default_value_t = phone_city_storefront::query::DEFAULT_SIMILAR_LIMIT)]
        similar: usize,
    },
    /// Manage the compare-list
    Compare {
        #[command(subcommand)]
        action: CompareAction,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Register, sign in and sign out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

fn main() {
    // Load .env first so clap sees PHONE_CITY_LOG_JSON
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "phone_city_storefront=info,phone_city_cli=info".into());

    // stdout carries command output, so logs always go to stderr
    let json_layer = cli.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!cli.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), StorefrontError> {
    let config = StorefrontConfig::from_env()?;
    let mut storefront = Storefront::open(&config)?;

    match cli.command {
        Commands::Home { limit } => commands::catalog::home(&storefront, limit),
        Commands::Catalog(args) => commands::catalog::list(&storefront, &args),
        Commands::Search { term } => commands::catalog::search(&storefront, &term),
        Commands::Show { id, similar } => commands::show::product(&storefront, &id, similar)?,
        Commands::Compare { action } => commands::compare::run(&mut storefront, action)?,
        Commands::Favorites { action } => commands::favorites::run(&mut storefront, action)?,
        Commands::Cart { action } => commands::cart::run(&mut storefront, action)?,
        Commands::Auth { action } => commands::auth::run(&mut storefront, action)?,
    }
    Ok(())
}
