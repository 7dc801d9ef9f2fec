use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Nike,
    Adidas,
    Puma,
    Bata,
    Stylo,
    Ndure,
    Walkeaze,
}

impl Brand {
    pub const ALL: [Brand; 7] = [
        Brand::Nike,
        Brand::Adidas,
        Brand::Puma,
        Brand::Bata,
        Brand::Stylo,
        Brand::Ndure,
        Brand::Walkeaze,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Nike => "Nike",
            Brand::Adidas => "Adidas",
            Brand::Puma => "Puma",
            Brand::Bata => "Bata",
            Brand::Stylo => "Stylo",
            Brand::Ndure => "Ndure",
            Brand::Walkeaze => "Walkeaze",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Running,
    Basketball,
    Lifestyle,
    Training,
    Sandals,
    Heels,
    Slippers,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Running,
        Category::Basketball,
        Category::Lifestyle,
        Category::Training,
        Category::Sandals,
        Category::Heels,
        Category::Slippers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Running => "Running",
            Category::Basketball => "Basketball",
            Category::Lifestyle => "Lifestyle",
            Category::Training => "Training",
            Category::Sandals => "Sandals",
            Category::Heels => "Heels",
            Category::Slippers => "Slippers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Men,
    Women,
    Unisex,
    Kids,
}

/// A catalog entry. Immutable once the catalog is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: Brand,
    pub category: Category,
    pub gender: Gender,
    pub color: String,
    pub price: f64,
    /// Display order is kept; matching only checks membership.
    pub sizes: Vec<f64>,
    pub image_url: String,
}

/// Names one field of [`SearchFilters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Brand,
    Color,
    Gender,
    Size,
    PriceMin,
    PriceMax,
    Category,
}

/// Partially populated search constraints. `None` (or a missing/null JSON field) means
/// "no constraint"; blank strings are treated the same way.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub brand: Option<String>,
    pub color: Option<String>,
    pub gender: Option<Gender>,
    pub size: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub category: Option<String>,
}

impl SearchFilters {
    /// Copy of these filters keeping only `fields`; every other field becomes absent.
    pub fn retain(&self, fields: &[FilterField]) -> SearchFilters {
        let keep = |field: FilterField| fields.contains(&field);
        SearchFilters {
            brand: self.brand.clone().filter(|_| keep(FilterField::Brand)),
            color: self.color.clone().filter(|_| keep(FilterField::Color)),
            gender: self.gender.filter(|_| keep(FilterField::Gender)),
            size: self.size.filter(|_| keep(FilterField::Size)),
            price_min: self.price_min.filter(|_| keep(FilterField::PriceMin)),
            price_max: self.price_max.filter(|_| keep(FilterField::PriceMax)),
            category: self.category.clone().filter(|_| keep(FilterField::Category)),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub products: Vec<Product>,
    pub is_fallback: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextSearchRequest {
    pub text: String,
}

/// What the text search endpoint hands back: the query as understood plus the result.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextSearchResponse {
    pub transcript: String,
    pub filters: SearchFilters,
    pub result: SearchResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub products: usize,
}
