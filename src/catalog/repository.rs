//! Product repository interface.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Source of products for browse pages.
///
/// All methods return ordered sequences; the order is the repository's
/// natural (insertion) order unless the backend ranks results itself.
/// Unknown slugs and unmatched queries yield empty sequences, never errors.
pub trait ProductRepository {
    /// The full catalog.
    fn get_all(&self) -> Vec<Product>;

    /// Products whose category or subcategory identifier equals `slug`.
    fn get_by_category(&self, slug: &str) -> Vec<Product>;

    /// Products matching a free-text query. Matching and ranking are the
    /// backend's concern; this core returns the result verbatim.
    fn search_by_text(&self, query: &str) -> Vec<Product>;
}

/// Vec-backed repository for tests and embedders without a backing store.
///
/// Text search is a case-insensitive substring match over name and
/// description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InMemoryRepository {
    products: Vec<Product>,
}

impl InMemoryRepository {
    /// Create a repository over the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Append a product, keeping insertion order.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for InMemoryRepository {
    fn get_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn get_by_category(&self, slug: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| {
                p.category.as_str() == slug
                    || p.subcategory.as_ref().is_some_and(|s| s.as_str() == slug)
            })
            .cloned()
            .collect()
    }

    fn search_by_text(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn bdt(amount: i64) -> Money {
        Money::new(amount, Currency::BDT)
    }

    fn repo() -> InMemoryRepository {
        InMemoryRepository::new(vec![
            Product::new("p1", "Smartphone X", "electronics", bdt(1000))
                .with_subcategory("smartphones"),
            Product::new("p2", "Linen Shirt", "fashion", bdt(500))
                .with_description("Breathable summer shirt"),
            Product::new("p3", "Gaming Laptop", "electronics", bdt(2000))
                .with_subcategory("laptops"),
        ])
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let all = repo().get_all();
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_get_by_category_matches_category() {
        let hits = repo().get_by_category("electronics");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_get_by_category_matches_subcategory() {
        let hits = repo().get_by_category("laptops");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "p3");
    }

    #[test]
    fn test_get_by_category_unknown_slug_is_empty() {
        assert!(repo().get_by_category("groceries").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = repo().search_by_text("LAPTOP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "p3");
    }

    #[test]
    fn test_search_matches_description() {
        let hits = repo().search_by_text("summer");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "p2");
    }
}
