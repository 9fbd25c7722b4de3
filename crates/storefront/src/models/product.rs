//! Product catalog types.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use greenlife_core::ProductId;

/// Plant category. Stored and serialized as the plain category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Indoor,
    Outdoor,
    Succulent,
    Herb,
    Edible,
}

impl Category {
    /// The category name as shown in the storefront filter dropdown.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "Indoor",
            Self::Outdoor => "Outdoor",
            Self::Succulent => "Succulent",
            Self::Herb => "Herb",
            Self::Edible => "Edible",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Indoor" => Ok(Self::Indoor),
            "Outdoor" => Ok(Self::Outdoor),
            "Succulent" => Ok(Self::Succulent),
            "Herb" => Ok(Self::Herb),
            "Edible" => Ok(Self::Edible),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Category filter for catalog browsing.
///
/// `All` matches every product; anything else matches by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product with the given category passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("All") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// A catalog entry: one plant SKU with price and stock quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique ID, assigned by the catalog store on creation.
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub image_url: String,
    /// Units in stock.
    pub quantity: u32,
    /// Unit price in the shop currency.
    pub price: Decimal,
    /// Watering care attribute (e.g., "Weekly").
    pub watering: String,
    /// Light care attribute (e.g., "Full sun").
    pub light: String,
    pub description: String,
}

/// Fields for creating a product; the ID is assigned by the catalog store.
///
/// Presence validation is the form layer's job; nothing beyond shape is
/// checked here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub image_url: String,
    pub quantity: u32,
    pub price: Decimal,
    pub watering: String,
    pub light: String,
    pub description: String,
}

impl NewProduct {
    /// Materialize a [`Product`] with a store-assigned ID.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            image_url: self.image_url,
            quantity: self.quantity,
            price: self.price,
            watering: self.watering,
            light: self.light,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip() {
        for category in [
            Category::Indoor,
            Category::Outdoor,
            Category::Succulent,
            Category::Herb,
            Category::Edible,
        ] {
            assert_eq!(category.as_str().parse::<Category>().ok(), Some(category));
        }
        assert!("Aquatic".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Outdoor));
        assert!(CategoryFilter::Only(Category::Indoor).matches(Category::Indoor));
        assert!(!CategoryFilter::Only(Category::Indoor).matches(Category::Edible));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().ok(), Some(CategoryFilter::All));
        assert_eq!("all".parse::<CategoryFilter>().ok(), Some(CategoryFilter::All));
        assert_eq!(
            "Herb".parse::<CategoryFilter>().ok(),
            Some(CategoryFilter::Only(Category::Herb))
        );
        assert!("Bonsai".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: ProductId::new(2),
            name: "Snake Plant".to_owned(),
            category: Category::Indoor,
            image_url: "https://img.example/snake.jpg".to_owned(),
            quantity: 28,
            price: Decimal::new(2250, 2),
            watering: "Bi-weekly".to_owned(),
            light: "Low to bright indirect".to_owned(),
            description: "Very low maintenance plant.".to_owned(),
        };

        let value = serde_json::to_value(&product).expect("serialize");
        assert_eq!(value["imageUrl"], "https://img.example/snake.jpg");
        assert_eq!(value["category"], "Indoor");
        assert_eq!(value["quantity"], 28);
    }
}
