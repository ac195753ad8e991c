//! Sort options for browse results.

use serde::{Deserialize, Serialize};

/// Orderings a shopper can apply to the filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Keep the catalog's own order.
    #[default]
    Featured,
    /// Effective price, low to high.
    PriceAsc,
    /// Effective price, high to low.
    PriceDesc,
    /// New arrivals first.
    Newest,
    /// Highest rated first.
    Popular,
    /// Biggest discount fraction first.
    Discount,
}

impl SortKey {
    /// Wire name, as used in routes and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
            SortKey::Discount => "discount",
        }
    }

    /// Parse a wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(SortKey::Featured),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "newest" => Some(SortKey::Newest),
            "popular" => Some(SortKey::Popular),
            "discount" => Some(SortKey::Discount),
            _ => None,
        }
    }

    /// Label for the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest First",
            SortKey::Popular => "Most Popular",
            SortKey::Discount => "Biggest Discount",
        }
    }
}
