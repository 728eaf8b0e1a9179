//! Display helpers shared by the catalog and compare pages.

/// Russian plural of "телефон" for a count.
#[must_use]
pub const fn phone_count_word(count: usize) -> &'static str {
    let last_two = count % 100;
    if last_two >= 11 && last_two <= 19 {
        return "телефонов";
    }
    match count % 10 {
        1 => "телефон",
        2..=4 => "телефона",
        _ => "телефонов",
    }
}

/// `"{count} телефон(а/ов)"`, e.g. `21 телефон`, `3 телефона`, `12 телефонов`.
#[must_use]
pub fn phone_count_label(count: usize) -> String {
    format!("{count} {}", phone_count_word(count))
}
