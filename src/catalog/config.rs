//! Immutable browse configuration.
//!
//! Reference data injected at startup: the category and subcategory tables,
//! the price slider bound, and its step. Kept separate from the product
//! repository so the engine stays testable against alternative catalogs and
//! bounds. Referential consistency with product identifiers is the catalog
//! owner's responsibility and is not checked at runtime.

use crate::catalog::{Category, Subcategory};
use crate::error::BrowseError;
use crate::ids::CategoryId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Fixed reference data for a storefront's browse pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    categories: Vec<Category>,
    subcategories: Vec<Subcategory>,
    max_price: Money,
    price_step: Money,
}

impl CatalogConfig {
    /// Build a config, validating the reference dataset.
    ///
    /// Returns an error if a subcategory's parent is missing from the
    /// category table, or if the price bound or step is not positive.
    pub fn new(
        categories: Vec<Category>,
        subcategories: Vec<Subcategory>,
        max_price: Money,
        price_step: Money,
    ) -> Result<Self, BrowseError> {
        if !max_price.is_positive() || !price_step.is_positive() {
            return Err(BrowseError::InvalidPriceBounds {
                max: max_price.amount_minor,
                step: price_step.amount_minor,
            });
        }

        for sub in &subcategories {
            if !categories.iter().any(|c| c.id == sub.parent_id) {
                return Err(BrowseError::UnknownParentCategory {
                    subcategory: sub.id.as_str().to_string(),
                    parent: sub.parent_id.as_str().to_string(),
                });
            }
        }

        Ok(Self {
            categories,
            subcategories,
            max_price,
            price_step,
        })
    }

    /// All top-level categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All subcategories, in display order.
    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    /// Upper bound of the price slider.
    pub fn max_price(&self) -> Money {
        self.max_price
    }

    /// Step of the price slider.
    pub fn price_step(&self) -> Money {
        self.price_step
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a category's display name.
    pub fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    /// Subcategories under a given parent, in display order.
    pub fn subcategories_of<'a>(
        &'a self,
        parent_id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a Subcategory> {
        self.subcategories
            .iter()
            .filter(move |s| &s.parent_id == parent_id)
    }
}

impl Default for CatalogConfig {
    /// The built-in storefront reference dataset: four categories, twelve
    /// subcategories, a ৳250,000 price bound with ৳5,000 steps.
    fn default() -> Self {
        let categories = vec![
            Category::new("electronics", "Electronics"),
            Category::new("fashion", "Fashion"),
            Category::new("home-living", "Home & Living"),
            Category::new("beauty", "Beauty"),
        ];

        let subcategories = vec![
            Subcategory::new("smartphones", "Smartphones", "electronics"),
            Subcategory::new("laptops", "Laptops", "electronics"),
            Subcategory::new("audio", "Audio & Headphones", "electronics"),
            Subcategory::new("wearables", "Wearables", "electronics"),
            Subcategory::new("men", "Men's Fashion", "fashion"),
            Subcategory::new("women", "Women's Fashion", "fashion"),
            Subcategory::new("accessories", "Accessories", "fashion"),
            Subcategory::new("furniture", "Furniture", "home-living"),
            Subcategory::new("kitchen", "Kitchen", "home-living"),
            Subcategory::new("lighting", "Lighting", "home-living"),
            Subcategory::new("skincare", "Skincare", "beauty"),
            Subcategory::new("makeup", "Makeup", "beauty"),
        ];

        Self {
            categories,
            subcategories,
            max_price: Money::new(250_000, Currency::BDT),
            price_step: Money::new(5_000, Currency::BDT),
        }
    }
}
