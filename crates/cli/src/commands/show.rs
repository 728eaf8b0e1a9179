//! `show`: product detail.

use phone_city_storefront::{Storefront, StorefrontError};

use super::{print_line, print_products};

pub fn product(storefront: &Storefront, id: &str, similar: usize) -> Result<(), StorefrontError> {
    let product = storefront.product(id)?;

    print_line(&format!("{} ({}, {})", product.name, product.brand, product.release_year));
    print_line(&format!("Цена: {}", product.price));
    if let Some(discount) = product.discount() {
        print_line(&format!("Скидка: {discount}"));
    }
    if !product.description.is_empty() {
        print_line(&product.description);
    }

    let screen = &product.screen;
    print_line(&format!(
        "Экран: {}\" {}, {}, {} Гц",
        screen.size, screen.kind, screen.resolution, screen.refresh_rate
    ));
    print_line(&format!(
        "Процессор: {} ({} ядер, {})",
        product.processor.name, product.processor.cores, product.processor.frequency
    ));
    print_line(&format!(
        "Память: {} ГБ / {} ГБ",
        product.memory.ram, product.memory.storage
    ));
    print_line(&format!(
        "Камеры: {} Мп + {} Мп",
        product.cameras.main, product.cameras.front
    ));
    print_line(&format!(
        "Аккумулятор: {} мАч, {}",
        product.battery.capacity, product.battery.fast_charging
    ));
    for feature in &product.features {
        print_line(&format!("- {}: {}", feature.title, feature.description));
    }

    let favorite = storefront.favorites().is_favorite(&product.id);
    let in_compare = storefront.compare().is_in_compare(&product.id);
    print_line(&format!(
        "В избранном: {}  В сравнении: {}",
        yes_no(favorite),
        yes_no(in_compare)
    ));
    print_line(&format!("Купить: {}", storefront.buy_url()));

    let similar = storefront.similar(id, similar)?;
    if !similar.is_empty() {
        print_line("");
        print_line("Похожие модели");
        print_products(similar);
    }
    Ok(())
}

const fn yes_no(value: bool) -> &'static str {
    if value { "да" } else { "нет" }
}
