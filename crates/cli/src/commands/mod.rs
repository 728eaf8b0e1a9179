//! Subcommand implementations.
//!
//! Commands write their results to stdout; logs go to stderr.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod compare;
pub mod favorites;
pub mod show;

use clap::{Args, Subcommand};

use phone_city_storefront::catalog::Product;

/// Filter flags for `catalog`. Values use the catalog page URL tokens.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Catalog page query string, e.g. `brand=Apple&sort=price-asc`
    #[arg(long)]
    pub query: Option<String>,
    /// Search term
    #[arg(short, long)]
    pub search: Option<String>,
    /// Brand (repeatable)
    #[arg(long)]
    pub brand: Vec<String>,
    /// Operating system (repeatable)
    #[arg(long)]
    pub os: Vec<String>,
    /// Memory as `ram-storage`, e.g. `8-256` (repeatable)
    #[arg(long)]
    pub memory: Vec<String>,
    /// Screen bucket: small, medium, large, xlarge (repeatable)
    #[arg(long)]
    pub screen: Vec<String>,
    /// Battery bucket: small, medium, large, xlarge (repeatable)
    #[arg(long)]
    pub battery: Vec<String>,
    /// Price band: under15k, 15k-30k, 30k-50k, 50k-80k, over80k
    #[arg(long)]
    pub price: Option<String>,
    /// Sort: popularity, price-asc, price-desc, name-asc, name-desc, newest
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CompareAction {
    /// Show the comparison table
    List,
    /// Add a product (evicts the oldest when full)
    Add { id: String },
    /// Remove a product
    Remove { id: String },
    /// Empty the compare-list
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List favorite products
    List,
    /// Add or remove a product
    Toggle { id: String },
    /// Remove every favorite
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum CartAction {
    /// Show cart lines and subtotal
    List,
    /// Add units of a product
    Add {
        id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity; zero or less removes it
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove { id: String },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
}

/// One-line product summary: id, name, price and any discount.
fn summary(product: &Product) -> String {
    let line = format!(
        "{:<18} {:<28} {:>14}",
        product.id.as_str(),
        product.name,
        product.price.to_string()
    );
    match product.old_price.filter(|_| product.discount().is_some()) {
        Some(old) => format!("{line}  (было {old})"),
        None => line,
    }
}

#[allow(clippy::print_stdout)]
fn print_products<'a>(products: impl IntoIterator<Item = &'a Product>) {
    for product in products {
        println!("{}", summary(product));
    }
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
