//! Catalog browsing domain logic for storefront category pages.
//!
//! This crate provides the non-trivial core behind a category/search page:
//!
//! - **Catalog**: products, the fixed category/subcategory reference tables,
//!   and the product repository interface
//! - **Browse**: filter state, the filter-sort pipeline, initial catalog
//!   selection, and the page-session owner
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_browse::prelude::*;
//!
//! let repo = InMemoryRepository::new(products);
//! let nav = NavigationContext::for_category("electronics");
//! let mut session = BrowseSession::open(&repo, CatalogConfig::default(), nav);
//!
//! // User narrows the price band and re-sorts; each call recomputes the
//! // visible result synchronously.
//! session.set_price_range(Money::new(0, Currency::BDT), Money::new(1500, Currency::BDT));
//! session.set_sort(SortKey::PriceAsc);
//!
//! for product in session.results() {
//!     println!("{} {}", product.name, product.effective_price());
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod catalog;

pub use error::BrowseError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::BrowseError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogConfig, Category, InMemoryRepository, Product, ProductRepository, Subcategory,
    };

    // Browse
    pub use crate::browse::{
        BrowseSession, FilterState, NavigationContext, PriceRange, SortKey, FEATURED_SLUG,
    };
}
