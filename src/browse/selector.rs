//! Initial catalog selection.
//!
//! Resolves the working set a page starts from: a free-text search, a
//! category slug, or the whole catalog. Runs once per navigation context
//! change; subsequent filtering always goes back to the full catalog.

use crate::catalog::{Product, ProductRepository};
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Sentinel slug for the "featured/all" landing route. Navigating to it
/// does not seed a category filter.
pub const FEATURED_SLUG: &str = "featured";

/// What the routing layer supplies for one navigation: an optional category
/// slug and an optional free-text query. Read once per navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationContext {
    /// Category slug from the route path, if any.
    pub category_slug: Option<String>,
    /// Free-text query from the query string, if any.
    pub search_query: Option<String>,
}

impl NavigationContext {
    /// Create a context, normalizing empty strings to absent.
    pub fn new(category_slug: Option<String>, search_query: Option<String>) -> Self {
        Self {
            category_slug: category_slug.filter(|s| !s.is_empty()),
            search_query: search_query.filter(|q| !q.is_empty()),
        }
    }

    /// Context for the all-products page.
    pub fn all_products() -> Self {
        Self::default()
    }

    /// Context for a category route.
    pub fn for_category(slug: impl Into<String>) -> Self {
        Self::new(Some(slug.into()), None)
    }

    /// Context for a search route.
    pub fn for_search(query: impl Into<String>) -> Self {
        Self::new(None, Some(query.into()))
    }

    /// The category to seed the filter selection with: the slug, unless it
    /// is absent or the [`FEATURED_SLUG`] sentinel.
    pub fn category_seed(&self) -> Option<CategoryId> {
        self.category_slug
            .as_deref()
            .filter(|s| !s.is_empty() && *s != FEATURED_SLUG)
            .map(CategoryId::new)
    }
}

/// Resolve the initial working set for a navigation.
///
/// A non-empty query wins over a slug and delegates to the search
/// collaborator verbatim; a slug delegates to the category lookup; otherwise
/// the full catalog is returned in its natural order. Unknown slugs and
/// unmatched queries come back as empty sequences, which the page renders as
/// its "no products found" state.
pub fn select_initial<R: ProductRepository>(repo: &R, nav: &NavigationContext) -> Vec<Product> {
    if let Some(query) = nav.search_query.as_deref().filter(|q| !q.is_empty()) {
        return repo.search_by_text(query);
    }
    if let Some(slug) = nav.category_slug.as_deref().filter(|s| !s.is_empty()) {
        return repo.get_by_category(slug);
    }
    repo.get_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryRepository;
    use crate::money::{Currency, Money};

    fn bdt(amount: i64) -> Money {
        Money::new(amount, Currency::BDT)
    }

    fn repo() -> InMemoryRepository {
        InMemoryRepository::new(vec![
            Product::new("p1", "Smartphone X", "electronics", bdt(1000))
                .with_subcategory("smartphones"),
            Product::new("p2", "Linen Shirt", "fashion", bdt(500)),
            Product::new("p3", "Gaming Laptop", "electronics", bdt(2000))
                .with_subcategory("laptops"),
        ])
    }

    #[test]
    fn test_no_context_returns_full_catalog() {
        let result = select_initial(&repo(), &NavigationContext::all_products());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_slug_selects_by_category() {
        let result = select_initial(&repo(), &NavigationContext::for_category("electronics"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_query_wins_over_slug() {
        let nav = NavigationContext::new(
            Some("electronics".to_string()),
            Some("shirt".to_string()),
        );
        let result = select_initial(&repo(), &nav);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p2");
    }

    #[test]
    fn test_empty_query_is_ignored() {
        let nav = NavigationContext::new(Some("fashion".to_string()), Some(String::new()));
        assert!(nav.search_query.is_none());
        let result = select_initial(&repo(), &nav);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p2");
    }

    #[test]
    fn test_unknown_slug_yields_empty_not_error() {
        let result = select_initial(&repo(), &NavigationContext::for_category("groceries"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_seed() {
        assert_eq!(
            NavigationContext::for_category("electronics").category_seed(),
            Some(CategoryId::new("electronics"))
        );
        assert_eq!(
            NavigationContext::for_category(FEATURED_SLUG).category_seed(),
            None
        );
        assert_eq!(NavigationContext::all_products().category_seed(), None);
        // A search context never seeds a category.
        assert_eq!(NavigationContext::for_search("shirt").category_seed(), None);
    }
}
