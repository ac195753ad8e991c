//! The browse page session.

use crate::browse::{apply, select_initial, FilterState, NavigationContext, SortKey};
use crate::catalog::{CatalogConfig, Product, ProductRepository};
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Owner of one category page's browse state.
///
/// Holds the immutable reference config, the full catalog (fetched once at
/// open), the filter state, and the derived working result. Every mutator
/// synchronously recomputes the result over the full catalog; nothing else
/// mutates the state. Single-threaded and event-driven by design.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowseSession {
    config: CatalogConfig,
    nav: NavigationContext,
    catalog: Vec<Product>,
    filter: FilterState,
    results: Vec<Product>,
}

impl BrowseSession {
    /// Open a session for a navigation context.
    ///
    /// Runs the catalog selector once and shows its output until the first
    /// filter or sort mutation; a navigation category (other than the
    /// featured sentinel) starts out selected.
    pub fn open<R: ProductRepository>(
        repo: &R,
        config: CatalogConfig,
        nav: NavigationContext,
    ) -> Self {
        let results = select_initial(repo, &nav);
        let catalog = repo.get_all();
        let filter = FilterState::seeded(config.max_price(), nav.category_seed());
        Self {
            config,
            nav,
            catalog,
            filter,
            results,
        }
    }

    /// The current working result, in display order.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    /// Number of products currently shown.
    pub fn product_count(&self) -> usize {
        self.results.len()
    }

    /// The current filter state, for rendering the control widgets.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The reference config the session was opened with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The page heading.
    pub fn title(&self) -> String {
        if let Some(query) = self.nav.search_query.as_deref().filter(|q| !q.is_empty()) {
            return format!("Search Results for \"{}\"", query);
        }
        if let Some(slug) = self.nav.category_slug.as_deref().filter(|s| !s.is_empty()) {
            return self
                .config
                .category_name(&CategoryId::new(slug))
                .unwrap_or("Products")
                .to_string();
        }
        "All Products".to_string()
    }

    /// Toggle a category or subcategory selection.
    pub fn toggle_category(&mut self, id: impl Into<CategoryId>) {
        self.filter.toggle(id.into());
        self.recompute();
    }

    /// Set the price interval; endpoints are clamped and ordered.
    pub fn set_price_range(&mut self, low: Money, high: Money) {
        self.filter.set_price_range(low, high);
        self.recompute();
    }

    /// Set the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.set_sort(sort);
        self.recompute();
    }

    /// Reset the filters to the seeded default.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.results = apply(&self.catalog, &self.filter);
    }
}
