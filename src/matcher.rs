//! Two-phase product matching.
//!
//! Phase 1 applies every present filter. Only when that yields nothing does phase 2 run,
//! keeping the hard constraints (size and gender) and dropping brand, color, price and
//! category. Neither phase reorders products; results follow catalog order.

use crate::catalog::Catalog;
use crate::models::{FilterField, Product, SearchFilters, SearchResult};

/// Fields that survive relaxation.
pub const FALLBACK_FIELDS: [FilterField; 2] = [FilterField::Size, FilterField::Gender];

/// Products satisfying every present field of `filters`, in their original order.
pub fn apply_filters(products: &[Product], filters: &SearchFilters) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches(p, filters))
        .cloned()
        .collect()
}

pub fn search(catalog: &Catalog, filters: &SearchFilters) -> SearchResult {
    let exact = apply_filters(catalog.all(), filters);
    if !exact.is_empty() {
        tracing::debug!(matches = exact.len(), "exact search matched");
        return SearchResult {
            products: exact,
            is_fallback: false,
        };
    }

    let relaxed = filters.retain(&FALLBACK_FIELDS);
    let fallback = apply_filters(catalog.all(), &relaxed);
    tracing::debug!(
        matches = fallback.len(),
        size = ?relaxed.size,
        gender = ?relaxed.gender,
        "no exact match, relaxed to size and gender"
    );

    SearchResult {
        products: fallback,
        is_fallback: true,
    }
}

fn matches(product: &Product, filters: &SearchFilters) -> bool {
    if let Some(brand) = present(&filters.brand) {
        if product.brand.as_str().to_lowercase() != brand.to_lowercase() {
            return false;
        }
    }

    if let Some(color) = present(&filters.color) {
        if !product.color.to_lowercase().contains(&color.to_lowercase()) {
            return false;
        }
    }

    if let Some(gender) = filters.gender {
        if product.gender != gender {
            return false;
        }
    }

    if let Some(size) = filters.size {
        if !product.sizes.contains(&size) {
            return false;
        }
    }

    if let Some(min_price) = filters.price_min {
        if product.price < min_price {
            return false;
        }
    }

    if let Some(max_price) = filters.price_max {
        if product.price > max_price {
            return false;
        }
    }

    if let Some(category) = present(&filters.category) {
        if product.category.as_str().to_lowercase() != category.to_lowercase() {
            return false;
        }
    }

    true
}

// Blank strings carry no constraint.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Brand, Category, Gender};

    fn product(
        id: u32,
        brand: Brand,
        category: Category,
        gender: Gender,
        color: &str,
        price: f64,
        sizes: &[f64],
    ) -> Product {
        Product {
            id,
            name: format!("Shoe {id}"),
            brand,
            category,
            gender,
            color: color.to_string(),
            price,
            sizes: sizes.to_vec(),
            image_url: String::new(),
        }
    }

    // Product 1 is the only Nike.
    fn catalog() -> Catalog {
        Catalog::new(vec![
            product(1, Brand::Nike, Category::Running, Gender::Men, "Blue", 90.0, &[9.0, 10.0, 11.0]),
            product(2, Brand::Adidas, Category::Lifestyle, Gender::Men, "Navy Blue", 120.0, &[10.0, 11.0]),
            product(3, Brand::Puma, Category::Running, Gender::Women, "Red", 60.0, &[6.0, 7.0, 11.0]),
            product(4, Brand::Bata, Category::Sandals, Gender::Kids, "Yellow", 20.0, &[2.0, 3.0]),
            product(5, Brand::Adidas, Category::Training, Gender::Men, "White", 75.0, &[8.0, 9.0]),
            product(6, Brand::Stylo, Category::Heels, Gender::Women, "Black", 55.5, &[6.0, 7.5]),
            product(7, Brand::Ndure, Category::Slippers, Gender::Men, "Black/Blue", 15.0, &[11.0, 12.0]),
        ])
        .unwrap()
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_matches_whole_catalog() {
        let catalog = catalog();
        let result = search(&catalog, &SearchFilters::default());
        assert!(!result.is_fallback);
        assert_eq!(result.products, catalog.all().to_vec());
    }

    #[test]
    fn test_apply_filters_on_empty_input() {
        let filters = SearchFilters {
            brand: Some("Nike".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(&[], &filters).is_empty());
        assert!(apply_filters(&[], &SearchFilters::default()).is_empty());
    }

    #[test]
    fn test_brand_is_case_insensitive_equality() {
        let catalog = catalog();
        let filters = SearchFilters {
            brand: Some("aDiDaS".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &filters)), vec![2, 5]);

        let partial = SearchFilters {
            brand: Some("Adi".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(catalog.all(), &partial).is_empty());
    }

    #[test]
    fn test_color_is_case_insensitive_substring() {
        let catalog = catalog();
        let filters = SearchFilters {
            color: Some("BLUE".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &filters)), vec![1, 2, 7]);
    }

    #[test]
    fn test_gender_is_exact() {
        let catalog = catalog();
        let filters = SearchFilters {
            gender: Some(Gender::Women),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &filters)), vec![3, 6]);
    }

    #[test]
    fn test_size_requires_membership() {
        let catalog = catalog();
        let filters = SearchFilters {
            size: Some(11.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &filters)), vec![1, 2, 3, 7]);

        let half = SearchFilters {
            size: Some(7.5),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &half)), vec![6]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = catalog();
        let min = SearchFilters {
            price_min: Some(90.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &min)), vec![1, 2]);

        let max = SearchFilters {
            price_max: Some(55.5),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &max)), vec![4, 6, 7]);

        let exact = SearchFilters {
            price_min: Some(60.0),
            price_max: Some(60.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &exact)), vec![3]);
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let catalog = catalog();
        let filters = SearchFilters {
            price_min: Some(200.0),
            price_max: Some(100.0),
            ..Default::default()
        };
        assert!(apply_filters(catalog.all(), &filters).is_empty());
    }

    #[test]
    fn test_category_is_case_insensitive_equality() {
        let catalog = catalog();
        let filters = SearchFilters {
            category: Some("running".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &filters)), vec![1, 3]);
    }

    #[test]
    fn test_blank_strings_impose_no_constraint() {
        let catalog = catalog();
        let filters = SearchFilters {
            brand: Some(String::new()),
            color: Some("  ".to_string()),
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply_filters(catalog.all(), &filters).len(), catalog.len());
    }

    #[test]
    fn test_filter_strings_are_matched_untrimmed() {
        let catalog = catalog();
        let color = SearchFilters {
            color: Some(" blue".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &color)), vec![2]);

        let brand = SearchFilters {
            brand: Some(" nike ".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(catalog.all(), &brand).is_empty());
    }

    #[test]
    fn test_zero_values_are_real_constraints() {
        let catalog = catalog();
        let free_only = SearchFilters {
            brand: Some("Nike".to_string()),
            price_max: Some(0.0),
            ..Default::default()
        };
        assert!(apply_filters(catalog.all(), &free_only).is_empty());
        let result = search(&catalog, &free_only);
        assert!(result.is_fallback);
        assert_eq!(result.products.len(), catalog.len());

        let size_zero = SearchFilters {
            size: Some(0.0),
            ..Default::default()
        };
        let result = search(&catalog, &size_zero);
        assert!(result.is_fallback);
        assert!(result.products.is_empty());
    }

    #[test]
    fn test_all_present_fields_are_anded() {
        let catalog = catalog();
        let filters = SearchFilters {
            gender: Some(Gender::Men),
            size: Some(11.0),
            price_max: Some(100.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(catalog.all(), &filters)), vec![1, 7]);
    }

    #[test]
    fn test_exact_match_returns_without_fallback() {
        let catalog = catalog();
        let filters = SearchFilters {
            brand: Some("nike".to_string()),
            color: Some("blue".to_string()),
            gender: Some(Gender::Men),
            size: Some(11.0),
            price_max: Some(100.0),
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        assert!(!result.is_fallback);
        assert_eq!(ids(&result.products), vec![1]);
    }

    #[test]
    fn test_fallback_keeps_only_size_and_gender() {
        let catalog = catalog();
        let filters = SearchFilters {
            brand: Some("Puma".to_string()),
            gender: Some(Gender::Men),
            size: Some(11.0),
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        assert!(result.is_fallback);
        assert_eq!(ids(&result.products), vec![1, 2, 7]);
    }

    #[test]
    fn test_fallback_drops_price_color_and_category() {
        let catalog = catalog();
        let filters = SearchFilters {
            color: Some("green".to_string()),
            gender: Some(Gender::Women),
            price_min: Some(500.0),
            category: Some("Basketball".to_string()),
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        assert!(result.is_fallback);
        assert_eq!(ids(&result.products), vec![3, 6]);
    }

    #[test]
    fn test_fallback_without_hard_constraints_returns_everything() {
        let catalog = catalog();
        let filters = SearchFilters {
            brand: Some("Walkeaze".to_string()),
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        assert!(result.is_fallback);
        assert_eq!(result.products.len(), catalog.len());
    }

    #[test]
    fn test_empty_fallback_is_still_a_result() {
        let catalog = catalog();
        let filters = SearchFilters {
            gender: Some(Gender::Kids),
            size: Some(99.0),
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        assert!(result.is_fallback);
        assert!(result.products.is_empty());
    }

    #[test]
    fn test_negative_size_matches_nothing() {
        let catalog = catalog();
        let filters = SearchFilters {
            size: Some(-1.0),
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        assert!(result.is_fallback);
        assert!(result.products.is_empty());
    }

    #[test]
    fn test_fallback_equals_relaxed_apply_filters() {
        let catalog = catalog();
        let filters = SearchFilters {
            brand: Some("Stylo".to_string()),
            gender: Some(Gender::Men),
            size: Some(9.0),
            ..Default::default()
        };
        let relaxed = SearchFilters {
            gender: filters.gender,
            size: filters.size,
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        assert!(result.is_fallback);
        assert_eq!(result.products, apply_filters(catalog.all(), &relaxed));
    }

    #[test]
    fn test_results_are_ordered_subsequence_of_catalog() {
        let catalog = catalog();
        let filters = SearchFilters {
            color: Some("b".to_string()),
            ..Default::default()
        };
        let result = search(&catalog, &filters);
        let positions: Vec<usize> = result
            .products
            .iter()
            .map(|p| catalog.all().iter().position(|c| c.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_search_is_idempotent() {
        let catalog = catalog();
        let filters = SearchFilters {
            brand: Some("Puma".to_string()),
            gender: Some(Gender::Men),
            size: Some(11.0),
            ..Default::default()
        };
        assert_eq!(search(&catalog, &filters), search(&catalog, &filters));
    }

    #[test]
    fn test_retain_keeps_listed_fields_only() {
        let filters = SearchFilters {
            brand: Some("Nike".to_string()),
            color: Some("Blue".to_string()),
            gender: Some(Gender::Men),
            size: Some(10.0),
            price_min: Some(1.0),
            price_max: Some(2.0),
            category: Some("Running".to_string()),
        };
        let relaxed = filters.retain(&FALLBACK_FIELDS);
        assert_eq!(
            relaxed,
            SearchFilters {
                gender: Some(Gender::Men),
                size: Some(10.0),
                ..Default::default()
            }
        );
        assert!(filters.retain(&[]).is_empty());
    }
}
