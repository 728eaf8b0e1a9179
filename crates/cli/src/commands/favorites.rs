//! `favorites`.

use phone_city_storefront::format::phone_count_label;
use phone_city_storefront::{Storefront, StorefrontError};

use super::{FavoritesAction, print_line, print_products};

pub fn run(storefront: &mut Storefront, action: FavoritesAction) -> Result<(), StorefrontError> {
    match action {
        FavoritesAction::List => {
            let products = storefront.favorite_products();
            print_line(&format!("Избранное: {}", phone_count_label(products.len())));
            print_products(products);
        }
        FavoritesAction::Toggle { id } => {
            let id = storefront.product(&id)?.id.clone();
            let added = storefront.favorites_mut().toggle(&id);
            print_line(if added {
                "Добавлено в избранное"
            } else {
                "Удалено из избранного"
            });
        }
        FavoritesAction::Clear => storefront.favorites_mut().clear(),
    }
    Ok(())
}
