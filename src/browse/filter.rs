//! Filter state for a browse session.

use crate::browse::SortKey;
use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An inclusive price interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub low: Money,
    /// Upper bound, inclusive.
    pub high: Money,
}

impl PriceRange {
    /// Create a range, ordering the endpoints if given reversed.
    pub fn new(low: Money, high: Money) -> Self {
        if low.amount_minor > high.amount_minor {
            Self { low: high, high: low }
        } else {
            Self { low, high }
        }
    }

    /// The widest range under a bound: [0, max].
    pub fn full(max: Money) -> Self {
        Self {
            low: Money::zero(max.currency),
            high: max,
        }
    }

    /// Check whether a price lies within the interval.
    pub fn contains(&self, price: Money) -> bool {
        price.amount_minor >= self.low.amount_minor && price.amount_minor <= self.high.amount_minor
    }
}

/// The active filters and sort of one browse page session.
///
/// Selected category and subcategory identifiers live in one flat set and
/// are matched independently against a product's two fields: selecting a
/// category does not select its subcategories, and a selected subcategory
/// keeps matching after its parent is deselected. That asymmetric-OR policy
/// mirrors the storefront's observed behavior and is intentional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    selected: BTreeSet<CategoryId>,
    price: PriceRange,
    sort: SortKey,
    seed: Option<CategoryId>,
    max_price: Money,
}

impl FilterState {
    /// Create the state for a fresh page entry.
    ///
    /// `seed` is the navigation category, if any; it starts selected and is
    /// what [`FilterState::clear`] restores.
    pub fn seeded(max_price: Money, seed: Option<CategoryId>) -> Self {
        let mut selected = BTreeSet::new();
        if let Some(id) = &seed {
            selected.insert(id.clone());
        }
        Self {
            selected,
            price: PriceRange::full(max_price),
            sort: SortKey::default(),
            seed,
            max_price,
        }
    }

    /// The selected category/subcategory identifiers.
    pub fn selected(&self) -> &BTreeSet<CategoryId> {
        &self.selected
    }

    /// Check whether an identifier is selected.
    pub fn is_selected(&self, id: &CategoryId) -> bool {
        self.selected.contains(id)
    }

    /// The active price interval.
    pub fn price(&self) -> PriceRange {
        self.price
    }

    /// The active sort.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Toggle an identifier: remove it if selected, select it if not.
    pub fn toggle(&mut self, id: CategoryId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Set the price interval, clamping both endpoints into [0, max] and
    /// ordering them.
    pub fn set_price_range(&mut self, low: Money, high: Money) {
        let zero = Money::zero(self.max_price.currency);
        self.price = PriceRange::new(
            low.clamp(zero, self.max_price),
            high.clamp(zero, self.max_price),
        );
    }

    /// Set the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Reset to the seeded default: full price range, featured sort, and the
    /// navigation category (or nothing) selected.
    pub fn clear(&mut self) {
        self.selected.clear();
        if let Some(id) = &self.seed {
            self.selected.insert(id.clone());
        }
        self.price = PriceRange::full(self.max_price);
        self.sort = SortKey::default();
    }

    /// Check whether a product passes the category filter.
    ///
    /// An empty selection constrains nothing. Otherwise a product matches if
    /// its category OR its subcategory is selected.
    pub fn selection_matches(&self, product: &Product) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        self.selected.contains(&product.category)
            || product
                .subcategory
                .as_ref()
                .is_some_and(|s| self.selected.contains(s))
    }
}
