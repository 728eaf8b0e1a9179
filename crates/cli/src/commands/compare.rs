//! `compare`: the compare-list and its table.

use phone_city_core::ProductId;
use phone_city_storefront::format::phone_count_label;
use phone_city_storefront::persist::MAX_COMPARE_ITEMS;
use phone_city_storefront::{Storefront, StorefrontError};

use super::{CompareAction, print_line};

pub fn run(storefront: &mut Storefront, action: CompareAction) -> Result<(), StorefrontError> {
    match action {
        CompareAction::List => table(storefront),
        CompareAction::Add { id } => {
            if let Some(evicted) = storefront.add_to_compare(&id)? {
                tracing::info!(%evicted, "Compare-list full, oldest entry removed");
            }
            print_line(&format!(
                "В сравнении {} из {MAX_COMPARE_ITEMS}",
                storefront.compare().len()
            ));
        }
        CompareAction::Remove { id } => storefront.compare_mut().remove(&ProductId::new(id)),
        CompareAction::Clear => storefront.compare_mut().clear(),
    }
    Ok(())
}

/// Differing rows are marked with `*`.
fn table(storefront: &Storefront) {
    let table = storefront.comparison();
    if table.is_empty() {
        print_line("В сравнении пока нет телефонов");
        return;
    }

    print_line(&format!(
        "Сравнение: {}",
        phone_count_label(table.columns().len())
    ));
    let header: Vec<String> = table
        .columns()
        .iter()
        .map(|c| {
            let title = format!("{} ({})", c.name, c.price);
            format!("{title:<24}")
        })
        .collect();
    print_line(&format!("{:<24}  {}", "", header.join(" ")));

    for (section, rows) in table.sections() {
        print_line(&format!("[{}]", section.title()));
        for row in rows {
            let marker = if row.differs { '*' } else { ' ' };
            let cells: Vec<String> = row
                .display_values()
                .iter()
                .map(|v| format!("{v:<24}"))
                .collect();
            print_line(&format!("{marker}{:<23}  {}", row.spec.label, cells.join(" ")));
        }
    }
}
