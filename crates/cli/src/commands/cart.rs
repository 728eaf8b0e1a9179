//! `cart`.

use phone_city_core::ProductId;
use phone_city_storefront::{Storefront, StorefrontError};

use super::{CartAction, print_line};

pub fn run(storefront: &mut Storefront, action: CartAction) -> Result<(), StorefrontError> {
    match action {
        CartAction::List => list(storefront),
        CartAction::Add { id, quantity } => {
            let id = storefront.product(&id)?.id.clone();
            storefront.cart_mut().add(&id, quantity);
            print_line(&format!("Товаров в корзине: {}", storefront.cart().total_items()));
        }
        CartAction::Set { id, quantity } => {
            storefront
                .cart_mut()
                .set_quantity(&ProductId::new(id), quantity);
        }
        CartAction::Remove { id } => storefront.cart_mut().remove(&ProductId::new(id)),
        CartAction::Clear => storefront.cart_mut().clear(),
    }
    Ok(())
}

fn list(storefront: &Storefront) {
    let cart = storefront.cart();
    if cart.is_empty() {
        print_line("Корзина пуста");
        return;
    }
    let catalog = storefront.catalog();
    for (product, quantity) in cart.lines(catalog) {
        print_line(&format!(
            "{:<28} {quantity:>3} x {:>14} = {}",
            product.name,
            product.price.to_string(),
            product.price.times(quantity)
        ));
    }
    print_line(&format!("Товаров: {}", cart.total_items()));
    print_line(&format!("Итого: {}", cart.subtotal(catalog)));
    print_line(&format!("Купить: {}", storefront.buy_url()));
}
