//! The filter-sort pipeline.

use crate::browse::{FilterState, SortKey};
use crate::catalog::Product;
use std::cmp::{Ordering, Reverse};

/// Derive the visible, ordered product list from the full catalog and the
/// active filter state.
///
/// Pure function of its inputs; re-invoking it on unchanged state yields the
/// same result. Steps run in a fixed order: category/subcategory filter,
/// price filter, then sort. Every sort is stable, so equal-keyed products
/// keep their relative catalog order.
pub fn apply(products: &[Product], filter: &FilterState) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| filter.selection_matches(p))
        .filter(|p| filter.price().contains(p.effective_price()))
        .cloned()
        .collect();

    match filter.sort() {
        SortKey::Featured => {}
        SortKey::PriceAsc => {
            result.sort_by_key(|p| p.effective_price().amount_minor);
        }
        SortKey::PriceDesc => {
            result.sort_by_key(|p| Reverse(p.effective_price().amount_minor));
        }
        SortKey::Newest => {
            // Stable partition on the is-new flag; there is no timestamp.
            let (fresh, rest): (Vec<_>, Vec<_>) = result.into_iter().partition(|p| p.is_new);
            result = fresh;
            result.extend(rest);
        }
        SortKey::Popular => {
            result.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::Discount => {
            result.sort_by(|a, b| {
                b.discount_fraction()
                    .partial_cmp(&a.discount_fraction())
                    .unwrap_or(Ordering::Equal)
            });
        }
    }

    result
}
