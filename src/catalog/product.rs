//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as presented on a category page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings and text search.
    pub description: Option<String>,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Subcategory, if the product has one.
    pub subcategory: Option<CategoryId>,
    /// Base price.
    pub price: Money,
    /// Whether a discount is active.
    pub discount: bool,
    /// Discounted price, meaningful only while `discount` is set.
    pub discount_price: Option<Money>,
    /// Average customer rating.
    pub rating: f64,
    /// Whether the product is flagged as a new arrival.
    pub is_new: bool,
}

impl Product {
    /// Create a new product with no subcategory, discount, or rating.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: category.into(),
            subcategory: None,
            price,
            discount: false,
            discount_price: None,
            rating: 0.0,
            is_new: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the subcategory.
    pub fn with_subcategory(mut self, subcategory: impl Into<CategoryId>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Activate a discount at the given price.
    pub fn with_discount(mut self, discount_price: Money) -> Self {
        self.discount = true;
        self.discount_price = Some(discount_price);
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Flag the product as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// The price the customer actually pays.
    ///
    /// The discounted price applies only while the discount flag is set and
    /// a discounted price is present; a dangling flag falls back to the base
    /// price.
    pub fn effective_price(&self) -> Money {
        if self.discount {
            self.discount_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }

    /// Fraction of the base price saved by the active discount.
    ///
    /// 0 when no discount is active, and 0 for a zero base price.
    pub fn discount_fraction(&self) -> f64 {
        if !self.discount || self.price.is_zero() {
            return 0.0;
        }
        let base = self.price.amount_minor as f64;
        let effective = self.effective_price().amount_minor as f64;
        (base - effective) / base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn bdt(amount: i64) -> Money {
        Money::new(amount, Currency::BDT)
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new("prod-1", "Noise-Cancelling Headphones", "electronics", bdt(1000));
        assert_eq!(product.id.as_str(), "prod-1");
        assert_eq!(product.category.as_str(), "electronics");
        assert!(!product.discount);
        assert!(product.subcategory.is_none());
    }

    #[test]
    fn test_effective_price_without_discount() {
        let product = Product::new("prod-1", "Desk Lamp", "home-living", bdt(500));
        assert_eq!(product.effective_price(), bdt(500));
    }

    #[test]
    fn test_effective_price_with_discount() {
        let product = Product::new("prod-1", "Sneakers", "fashion", bdt(500)).with_discount(bdt(250));
        assert_eq!(product.effective_price(), bdt(250));
    }

    #[test]
    fn test_effective_price_dangling_discount_flag() {
        // Discount flagged but no discounted price recorded: base price wins.
        let mut product = Product::new("prod-1", "Sneakers", "fashion", bdt(500));
        product.discount = true;
        assert_eq!(product.effective_price(), bdt(500));
        assert_eq!(product.discount_fraction(), 0.0);
    }

    #[test]
    fn test_discount_fraction() {
        let product = Product::new("prod-1", "Sneakers", "fashion", bdt(500)).with_discount(bdt(250));
        assert!((product.discount_fraction() - 0.5).abs() < 1e-9);

        let full_price = Product::new("prod-2", "Belt", "fashion", bdt(300));
        assert_eq!(full_price.discount_fraction(), 0.0);
    }

    #[test]
    fn test_discount_fraction_zero_base_price() {
        let product = Product::new("prod-1", "Sample", "beauty", bdt(0)).with_discount(bdt(0));
        assert_eq!(product.discount_fraction(), 0.0);
    }
}
