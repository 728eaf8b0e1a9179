//! Product record as shipped in the catalog dataset.
//!
//! The JSON shape is camelCase (`releaseYear`, `oldPrice`, `refreshRate`, ...)
//! to match the dataset file; field names on the Rust side are snake case.

use serde::{Deserialize, Serialize};

use phone_city_core::{Price, ProductId};

/// A phone in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog id.
    pub id: ProductId,
    /// Model name (e.g. "iPhone 15 Pro").
    pub name: String,
    /// Manufacturer.
    pub brand: String,
    pub release_year: u16,
    /// Operating system family ("iOS", "Android").
    pub os: String,
    pub price: Price,
    /// Pre-discount price, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Popularity score; higher is more popular.
    pub popularity: f64,
    /// Image references, first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
    pub screen: Screen,
    pub processor: Processor,
    pub memory: Memory,
    pub cameras: Cameras,
    pub battery: Battery,
    pub dimensions: Dimensions,
    pub connectivity: Connectivity,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Product {
    /// The cover image, if the product has any images.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// How much cheaper the product is than its old price.
    ///
    /// `None` when there is no old price or it is not above the current one.
    #[must_use]
    pub fn discount(&self) -> Option<Price> {
        let old = self.old_price?;
        (old > self.price).then(|| Price::new(old.som() - self.price.som()))
    }

    /// Memory configuration token in the `"{ram}-{storage}"` form used by filters.
    #[must_use]
    pub fn memory_token(&self) -> String {
        format!("{}-{}", self.memory.ram, self.memory.storage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Diagonal in inches.
    pub size: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub resolution: String,
    /// Hz.
    pub refresh_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    pub name: String,
    pub cores: u32,
    pub frequency: String,
}

/// RAM and storage in gigabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub ram: u32,
    pub storage: u32,
    pub expandable: bool,
}

/// Camera resolutions in megapixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cameras {
    pub main: f64,
    pub front: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    /// mAh.
    pub capacity: u32,
    pub fast_charging: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireless_charging: Option<bool>,
}

/// Millimetres, weight in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub thickness: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connectivity {
    pub bluetooth: String,
    pub wifi: String,
    pub nfc: bool,
    pub usb: String,
}

/// A highlighted selling point on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Compact product builders for tests across the crate.

    use super::*;

    /// A product with sensible defaults; tweak fields after construction.
    pub fn phone(id: &str, brand: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("{brand} {id}"),
            brand: brand.to_owned(),
            release_year: 2023,
            os: "Android".to_owned(),
            price: Price::new(price),
            old_price: None,
            popularity: 50.0,
            images: vec![format!("/images/{id}.webp")],
            description: String::new(),
            screen: Screen {
                size: 6.1,
                kind: "OLED".to_owned(),
                resolution: "2400x1080".to_owned(),
                refresh_rate: 120,
            },
            processor: Processor {
                name: "Snapdragon 8 Gen 2".to_owned(),
                cores: 8,
                frequency: "3.2 ГГц".to_owned(),
            },
            memory: Memory {
                ram: 8,
                storage: 256,
                expandable: false,
            },
            cameras: Cameras {
                main: 50.0,
                front: 12.0,
                features: Vec::new(),
            },
            battery: Battery {
                capacity: 4500,
                fast_charging: "67 Вт".to_owned(),
                wireless_charging: None,
            },
            dimensions: Dimensions {
                height: 150.0,
                width: 71.0,
                thickness: 8.0,
                weight: 180.0,
            },
            connectivity: Connectivity {
                bluetooth: "5.3".to_owned(),
                wifi: "Wi-Fi 6E".to_owned(),
                nfc: true,
                usb: "USB-C".to_owned(),
            },
            features: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::fixtures::phone;
    use super::*;

    #[test]
    fn test_discount() {
        let mut p = phone("a", "X", 10_000);
        assert_eq!(p.discount(), None);

        p.old_price = Some(Price::new(12_500));
        assert_eq!(p.discount(), Some(Price::new(2_500)));

        p.old_price = Some(Price::new(9_000));
        assert_eq!(p.discount(), None);
    }

    #[test]
    fn test_memory_token() {
        assert_eq!(phone("a", "X", 1).memory_token(), "8-256");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "p1", "name": "P1", "brand": "Google", "releaseYear": 2023,
            "os": "Android", "price": 54990, "oldPrice": 59990, "popularity": 88,
            "images": ["/a.webp"], "description": "d",
            "screen": {"size": 6.2, "type": "OLED", "resolution": "2400x1080", "refreshRate": 120},
            "processor": {"name": "Tensor G3", "cores": 9, "frequency": "2.91 ГГц"},
            "memory": {"ram": 8, "storage": 128, "expandable": false},
            "cameras": {"main": 50, "front": 10.5, "features": ["OIS"]},
            "battery": {"capacity": 4575, "fastCharging": "27 Вт", "wirelessCharging": true},
            "dimensions": {"height": 150.5, "width": 70.8, "thickness": 8.9, "weight": 187},
            "connectivity": {"bluetooth": "5.3", "wifi": "Wi-Fi 7", "nfc": true, "usb": "USB-C 3.2"},
            "features": [{"title": "AI", "description": "Magic Eraser"}]
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.release_year, 2023);
        assert_eq!(p.old_price, Some(Price::new(59_990)));
        assert_eq!(p.screen.kind, "OLED");
        assert_eq!(p.screen.refresh_rate, 120);
        assert_eq!(p.battery.wireless_charging, Some(true));
        assert_eq!(p.cover_image(), Some("/a.webp"));
    }
}
