use crate::error::CatalogError;
use crate::matcher;
use crate::models::{Brand, Category, Gender, Product, SearchFilters, SearchResult};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The full product set, validated once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.sizes.is_empty() {
                return Err(CatalogError::EmptySizes { id: product.id });
            }
            if let Some(&size) = product.sizes.iter().find(|s| !s.is_finite() || **s < 0.0) {
                return Err(CatalogError::InvalidSize {
                    id: product.id,
                    size,
                });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
        }
        Ok(Catalog { products })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Catalog::new(seed_products())
    }

    /// Reads a JSON array of products.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        Catalog::new(products)
    }

    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::builtin(),
        }
    }

    /// Every product in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn search(&self, filters: &SearchFilters) -> SearchResult {
        matcher::search(self, filters)
    }
}

#[allow(clippy::too_many_arguments)]
fn shoe(
    id: u32,
    name: &str,
    brand: Brand,
    category: Category,
    gender: Gender,
    color: &str,
    price: f64,
    sizes: &[f64],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        brand,
        category,
        gender,
        color: color.to_string(),
        price,
        sizes: sizes.to_vec(),
        image_url: format!("/assets/images/shoe-{id}.jpg"),
    }
}

fn seed_products() -> Vec<Product> {
    use Brand::*;
    use Category::*;
    use Gender::*;

    vec![
        shoe(1, "Air Zoom Pegasus", Nike, Running, Men, "Blue", 95.0, &[8.0, 9.0, 10.0, 11.0, 12.0]),
        shoe(2, "Revolution 7", Nike, Running, Women, "Pink", 70.0, &[5.0, 6.0, 7.0, 8.0]),
        shoe(3, "LeBron Witness", Nike, Basketball, Men, "Black/Red", 120.0, &[9.0, 10.0, 11.0, 12.0, 13.0]),
        shoe(4, "Court Borough", Nike, Lifestyle, Kids, "White", 45.0, &[1.0, 2.0, 3.0, 4.0]),
        shoe(5, "Ultraboost Light", Adidas, Running, Men, "Navy Blue", 180.0, &[8.0, 9.0, 10.0, 11.0]),
        shoe(6, "Duramo SL", Adidas, Running, Women, "Grey", 65.0, &[5.0, 6.0, 7.0, 8.0, 9.0]),
        shoe(7, "Stan Smith", Adidas, Lifestyle, Unisex, "White/Green", 100.0, &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0]),
        shoe(8, "Adilette Comfort", Adidas, Slippers, Unisex, "Black", 35.0, &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]),
        shoe(9, "Velocity Nitro", Puma, Running, Men, "Red", 110.0, &[9.0, 10.0, 11.0]),
        shoe(10, "Suede Classic", Puma, Lifestyle, Women, "Black", 75.0, &[5.0, 6.0, 7.0, 8.0]),
        shoe(11, "Fuse Trainer", Puma, Training, Men, "Grey/Orange", 85.0, &[8.0, 9.0, 10.0, 11.0, 12.0]),
        shoe(12, "Comfit Strap", Bata, Sandals, Men, "Brown", 25.0, &[7.0, 8.0, 9.0, 10.0, 11.0]),
        shoe(13, "Power Walk", Bata, Training, Women, "White/Purple", 40.0, &[5.0, 6.0, 7.0, 8.0]),
        shoe(14, "Bubblegummers", Bata, Sandals, Kids, "Yellow", 18.0, &[10.0, 11.0, 12.0, 13.0]),
        shoe(15, "Stiletto Pump", Stylo, Heels, Women, "Red", 55.0, &[5.0, 6.0, 7.0, 8.0]),
        shoe(16, "Block Heel Mule", Stylo, Heels, Women, "Beige", 48.0, &[5.0, 6.0, 7.0, 8.0, 9.0]),
        shoe(17, "Jogger Flex", Ndure, Running, Men, "Black/White", 38.0, &[7.0, 8.0, 9.0, 10.0, 11.0]),
        shoe(18, "Slide Lite", Ndure, Slippers, Men, "Blue", 15.0, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]),
        shoe(19, "Street Court", Walkeaze, Lifestyle, Women, "White", 42.0, &[5.0, 6.0, 7.0, 8.0]),
        shoe(20, "Cloud Step", Walkeaze, Sandals, Women, "Gold", 30.0, &[5.0, 6.0, 7.0, 8.0, 9.0]),
    ]
}
