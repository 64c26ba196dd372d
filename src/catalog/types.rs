//! Product record types shared by the store and the recommendation core.

use serde::{Deserialize, Serialize};

use crate::parser::{Chemistry, Phase};

/// Category slug the storefront files chargers under.
pub const CHARGER_CATEGORY: &str = "battery-chargers";

/// A single product row from the parts catalog.
///
/// Identity and descriptive text are always present; the structured spec
/// columns (`voltage` through `chemistries`) are only populated once a
/// backfill has run, and the text parser is the fallback source until then.
/// The slug is unique and stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub sku: Option<String>,

    // === Backfilled spec columns ===
    #[serde(default)]
    pub voltage: Option<u16>,
    #[serde(default)]
    pub current_amps: Option<u16>,
    #[serde(default)]
    pub phase: Option<Phase>,
    #[serde(default)]
    pub chemistries: Option<Vec<Chemistry>>,

    /// Ships from stock without custom lead time.
    #[serde(default)]
    pub quick_ship: bool,
}

impl ProductRecord {
    /// Whether this product is a charger candidate: filed under the charger
    /// category, or named as one when category metadata is missing.
    pub fn is_charger(&self) -> bool {
        self.category_slug.as_deref() == Some(CHARGER_CATEGORY)
            || self.name.to_lowercase().contains("charger")
    }

    /// Lowercased text blob the store indexes for search.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.brand.as_deref().unwrap_or_default(),
            self.name,
            self.slug
        )
        .trim()
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_fills_defaults() {
        let json = r#"{
            "id": "p-1",
            "slug": "green2-24v-60a",
            "name": "Green2 24V 60A Charger"
        }"#;

        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.brand, None);
        assert_eq!(product.voltage, None);
        assert!(!product.quick_ship);
    }

    #[test]
    fn test_is_charger_by_category() {
        let json = r#"{
            "id": "p-1",
            "slug": "unit-24",
            "name": "Unit 24",
            "category_slug": "battery-chargers"
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert!(product.is_charger());
    }

    #[test]
    fn test_is_charger_falls_back_to_name() {
        let json = r#"{
            "id": "p-2",
            "slug": "green2-24v-60a",
            "name": "Green2 24V 60A Charger"
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert!(product.is_charger(), "name mentions charger");
    }

    #[test]
    fn test_non_charger_excluded() {
        let json = r#"{
            "id": "p-3",
            "slug": "forklift-seat",
            "name": "Forklift Seat",
            "category_slug": "seats"
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert!(!product.is_charger());
    }

    #[test]
    fn test_search_text_combines_brand_name_slug() {
        let json = r#"{
            "id": "p-4",
            "slug": "green2-24v-60a",
            "name": "Green2 24V 60A Charger",
            "brand": "FSIP"
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.search_text(), "fsip green2 24v 60a charger green2-24v-60a");
    }
}
