//! Side-by-side comparison table.
//!
//! Rows come from a fixed table of spec paths grouped into sections. Each row
//! carries the raw value per product plus a `differs` flag that is set when
//! the products disagree at that path. Display strings add the unit.

use std::fmt;

use phone_city_core::{Price, ProductId};

use crate::catalog::Product;

/// A raw spec value as read from a product.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecValue {
    Text(String),
    Int(u64),
    Decimal(f64),
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Decimal(x) => write!(f, "{x}"),
        }
    }
}

/// Table section headings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Basic,
    Display,
    MemoryAndProcessor,
    Cameras,
    Battery,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::Display,
        Self::MemoryAndProcessor,
        Self::Cameras,
        Self::Battery,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Basic => "Основные характеристики",
            Self::Display => "Дисплей",
            Self::MemoryAndProcessor => "Память и процессор",
            Self::Cameras => "Камеры",
            Self::Battery => "Аккумулятор и зарядка",
        }
    }
}

/// One row definition: where the value lives and how to show it.
pub struct RowSpec {
    pub section: Section,
    pub label: &'static str,
    /// Dotted field path in the dataset shape, e.g. `screen.refreshRate`.
    pub path: &'static str,
    /// Appended to the display value, including any leading space.
    pub unit: &'static str,
    read: fn(&Product) -> SpecValue,
}

impl RowSpec {
    /// Read this row's raw value from a product.
    #[must_use]
    pub fn value(&self, product: &Product) -> SpecValue {
        (self.read)(product)
    }

    /// Render a raw value with the row's unit.
    #[must_use]
    pub fn display(&self, value: &SpecValue) -> String {
        format!("{value}{}", self.unit)
    }
}

impl fmt::Debug for RowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSpec")
            .field("section", &self.section)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

const fn row(
    section: Section,
    label: &'static str,
    path: &'static str,
    unit: &'static str,
    read: fn(&Product) -> SpecValue,
) -> RowSpec {
    RowSpec {
        section,
        label,
        path,
        unit,
        read,
    }
}

/// Every compared spec, in display order.
pub static ROWS: [RowSpec; 15] = [
    row(Section::Basic, "Бренд", "brand", "", |p| {
        SpecValue::Text(p.brand.clone())
    }),
    row(Section::Basic, "Операционная система", "os", "", |p| {
        SpecValue::Text(p.os.clone())
    }),
    row(Section::Basic, "Год выпуска", "releaseYear", "", |p| {
        SpecValue::Int(u64::from(p.release_year))
    }),
    row(Section::Display, "Диагональ", "screen.size", "\"", |p| {
        SpecValue::Decimal(p.screen.size)
    }),
    row(Section::Display, "Тип дисплея", "screen.type", "", |p| {
        SpecValue::Text(p.screen.kind.clone())
    }),
    row(Section::Display, "Разрешение", "screen.resolution", "", |p| {
        SpecValue::Text(p.screen.resolution.clone())
    }),
    row(
        Section::Display,
        "Частота обновления",
        "screen.refreshRate",
        " Гц",
        |p| SpecValue::Int(u64::from(p.screen.refresh_rate)),
    ),
    row(
        Section::MemoryAndProcessor,
        "Оперативная память",
        "memory.ram",
        " ГБ",
        |p| SpecValue::Int(u64::from(p.memory.ram)),
    ),
    row(
        Section::MemoryAndProcessor,
        "Встроенная память",
        "memory.storage",
        " ГБ",
        |p| SpecValue::Int(u64::from(p.memory.storage)),
    ),
    row(
        Section::MemoryAndProcessor,
        "Процессор",
        "processor.name",
        "",
        |p| SpecValue::Text(p.processor.name.clone()),
    ),
    row(
        Section::MemoryAndProcessor,
        "Количество ядер",
        "processor.cores",
        "",
        |p| SpecValue::Int(u64::from(p.processor.cores)),
    ),
    row(Section::Cameras, "Основная камера", "cameras.main", " Мп", |p| {
        SpecValue::Decimal(p.cameras.main)
    }),
    row(
        Section::Cameras,
        "Фронтальная камера",
        "cameras.front",
        " Мп",
        |p| SpecValue::Decimal(p.cameras.front),
    ),
    row(
        Section::Battery,
        "Емкость аккумулятора",
        "battery.capacity",
        " мАч",
        |p| SpecValue::Int(u64::from(p.battery.capacity)),
    ),
    row(
        Section::Battery,
        "Быстрая зарядка",
        "battery.fastCharging",
        "",
        |p| SpecValue::Text(p.battery.fast_charging.clone()),
    ),
];

/// A projected row: one value per compared product.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub spec: &'static RowSpec,
    pub values: Vec<SpecValue>,
    /// `true` iff at least two products disagree at this path.
    pub differs: bool,
}

impl ComparisonRow {
    /// Display strings with units, one per product.
    #[must_use]
    pub fn display_values(&self) -> Vec<String> {
        self.values.iter().map(|v| self.spec.display(v)).collect()
    }
}

/// Column header data for one compared product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column<'a> {
    pub id: &'a ProductId,
    pub name: &'a str,
    pub price: Price,
    pub image: Option<&'a str>,
}

/// The projected comparison of a fixed list of products.
#[derive(Debug, Clone)]
pub struct ComparisonTable<'a> {
    products: Vec<&'a Product>,
    rows: Vec<ComparisonRow>,
}

impl<'a> ComparisonTable<'a> {
    /// Project `products` (already resolved, in compare-list order).
    ///
    /// An empty input gives an empty table, not an error.
    #[must_use]
    pub fn new(products: Vec<&'a Product>) -> Self {
        let rows = ROWS
            .iter()
            .map(|spec| {
                let values: Vec<SpecValue> = products.iter().map(|p| spec.value(p)).collect();
                let differs = values
                    .split_first()
                    .is_some_and(|(first, rest)| rest.iter().any(|v| v != first));
                ComparisonRow {
                    spec,
                    values,
                    differs,
                }
            })
            .collect();

        Self { products, rows }
    }

    /// Returns `true` if there is nothing to compare.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    #[must_use]
    pub fn columns(&self) -> Vec<Column<'a>> {
        self.products
            .iter()
            .map(|p| Column {
                id: &p.id,
                name: &p.name,
                price: p.price,
                image: p.cover_image(),
            })
            .collect()
    }

    /// All rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// The row for a dotted path, e.g. `memory.ram`.
    #[must_use]
    pub fn row(&self, path: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.spec.path == path)
    }

    /// Rows grouped under their section headings.
    pub fn sections(&self) -> impl Iterator<Item = (Section, Vec<&ComparisonRow>)> + '_ {
        Section::ALL.into_iter().map(|section| {
            let rows = self
                .rows
                .iter()
                .filter(|r| r.spec.section == section)
                .collect();
            (section, rows)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::phone;

    #[test]
    fn test_single_product_never_differs() {
        let a = phone("a", "X", 1);
        let table = ComparisonTable::new(vec![&a]);
        assert!(table.rows().iter().all(|r| !r.differs));
        assert_eq!(table.rows().len(), ROWS.len());
    }

    #[test]
    fn test_identical_products_never_differ() {
        let a = phone("a", "X", 1);
        let b = phone("b", "X", 999);
        let table = ComparisonTable::new(vec![&a, &b]);
        assert!(table.rows().iter().all(|r| !r.differs));
    }

    #[test]
    fn test_differs_per_path() {
        let a = phone("a", "X", 1);
        let mut b = phone("b", "X", 1);
        b.memory.ram = 12;
        let c = phone("c", "X", 1);
        let table = ComparisonTable::new(vec![&a, &b, &c]);

        assert!(table.row("memory.ram").unwrap().differs);
        assert!(!table.row("memory.storage").unwrap().differs);
        assert!(!table.row("brand").unwrap().differs);
    }

    #[test]
    fn test_empty_table() {
        let table = ComparisonTable::new(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert!(table.rows().iter().all(|r| r.values.is_empty() && !r.differs));
    }

    #[test]
    fn test_display_values_carry_units() {
        let a = phone("a", "X", 1);
        let table = ComparisonTable::new(vec![&a]);

        assert_eq!(table.row("screen.size").unwrap().display_values(), ["6.1\""]);
        assert_eq!(
            table.row("screen.refreshRate").unwrap().display_values(),
            ["120 Гц"]
        );
        assert_eq!(table.row("cameras.main").unwrap().display_values(), ["50 Мп"]);
        assert_eq!(
            table.row("battery.capacity").unwrap().display_values(),
            ["4500 мАч"]
        );
        assert_eq!(table.row("os").unwrap().display_values(), ["Android"]);
    }

    #[test]
    fn test_input_order_preserved() {
        let a = phone("a", "X", 100);
        let b = phone("b", "Y", 50);
        let table = ComparisonTable::new(vec![&b, &a]);

        let ids: Vec<&str> = table.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(
            table.row("brand").unwrap().values,
            [SpecValue::Text("Y".into()), SpecValue::Text("X".into())]
        );
    }

    #[test]
    fn test_sections_cover_every_row() {
        let a = phone("a", "X", 1);
        let table = ComparisonTable::new(vec![&a]);
        let total: usize = table.sections().map(|(_, rows)| rows.len()).sum();
        assert_eq!(total, ROWS.len());

        let (first, rows) = table.sections().next().unwrap();
        assert_eq!(first, Section::Basic);
        assert_eq!(rows.len(), 3);
    }
}
