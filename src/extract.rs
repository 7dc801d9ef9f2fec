//! Turning free-form text into [`SearchFilters`].
//!
//! The HTTP layer talks to a [`FilterExtractor`]; the matcher never does. A remote
//! language-model client can implement the trait. [`KeywordExtractor`] is the offline
//! default: it recognises the catalog vocabulary word by word.

use crate::error::ExtractionError;
use crate::models::{Brand, Category, Gender, SearchFilters};
use futures::future::{self, BoxFuture, FutureExt};

pub trait FilterExtractor: Send + Sync {
    fn extract<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<SearchFilters, ExtractionError>>;
}

const COLORS: &[&str] = &[
    "black", "white", "blue", "navy", "red", "green", "grey", "gray", "brown", "pink", "yellow",
    "orange", "purple", "beige", "silver", "gold", "teal",
];

#[derive(Debug, Default, Clone)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        KeywordExtractor
    }

    pub fn parse(&self, text: &str) -> Result<SearchFilters, ExtractionError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(ExtractionError::EmptyQuery);
        }

        let mut filters = SearchFilters::default();
        for (i, token) in tokens.iter().enumerate() {
            let word = token.as_str();
            let next_number = || number_at(&tokens, i + 1);

            if filters.brand.is_none() {
                if let Some(brand) = Brand::ALL.iter().find(|b| b.as_str().eq_ignore_ascii_case(word)) {
                    filters.brand = Some(brand.as_str().to_string());
                    continue;
                }
            }
            if filters.category.is_none() {
                if let Some(category) = category_for(word) {
                    filters.category = Some(category.as_str().to_string());
                    continue;
                }
            }
            if filters.gender.is_none() {
                if let Some(gender) = gender_for(word) {
                    filters.gender = Some(gender);
                    continue;
                }
            }
            if filters.color.is_none() && COLORS.contains(&word) {
                filters.color = Some(word.to_string());
                continue;
            }

            match word {
                "size" | "sized" => {
                    if filters.size.is_none() {
                        filters.size = next_number();
                    }
                }
                "under" | "below" | "max" | "maximum" | "upto" | "within" => {
                    filters.price_max = filters.price_max.or_else(next_number);
                }
                "over" | "above" | "min" | "minimum" | "from" => {
                    filters.price_min = filters.price_min.or_else(next_number);
                }
                "than" if i > 0 => match tokens[i - 1].as_str() {
                    "less" | "cheaper" => filters.price_max = filters.price_max.or_else(next_number),
                    "more" | "greater" => filters.price_min = filters.price_min.or_else(next_number),
                    _ => {}
                },
                "between" => {
                    let low = next_number();
                    let high = tokens
                        .iter()
                        .skip(i + 1)
                        .position(|t| t == "and")
                        .and_then(|offset| number_at(&tokens, i + 2 + offset));
                    if let (Some(low), Some(high)) = (low, high) {
                        filters.price_min = Some(low.min(high));
                        filters.price_max = Some(low.max(high));
                    }
                }
                _ => {}
            }
        }

        tracing::debug!(?filters, "extracted filters from text");
        Ok(filters)
    }
}

impl FilterExtractor for KeywordExtractor {
    fn extract<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<SearchFilters, ExtractionError>> {
        future::ready(self.parse(text)).boxed()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn number_at(tokens: &[String], index: usize) -> Option<f64> {
    tokens
        .get(index)
        .and_then(|t| t.parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 0.0)
}

fn category_for(word: &str) -> Option<Category> {
    let category = match word {
        "running" | "runner" | "runners" | "jogging" => Category::Running,
        "basketball" => Category::Basketball,
        "lifestyle" | "casual" | "sneaker" | "sneakers" => Category::Lifestyle,
        "training" | "trainer" | "trainers" | "gym" => Category::Training,
        "sandal" | "sandals" => Category::Sandals,
        "heel" | "heels" => Category::Heels,
        "slipper" | "slippers" | "slides" | "flipflops" => Category::Slippers,
        _ => return None,
    };
    Some(category)
}

fn gender_for(word: &str) -> Option<Gender> {
    let gender = match word {
        "men" | "man" | "mens" | "male" | "gents" => Gender::Men,
        "women" | "woman" | "womens" | "female" | "ladies" | "lady" => Gender::Women,
        "unisex" => Gender::Unisex,
        "kids" | "kid" | "child" | "children" | "boys" | "girls" => Gender::Kids,
        _ => return None,
    };
    Some(gender)
}
