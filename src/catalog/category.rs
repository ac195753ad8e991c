//! Category reference types.
//!
//! Categories and subcategories form a fixed two-level reference dataset.
//! It is configuration, not derived from products, and the browse engine
//! never consults the parent links: a subcategory id in the selection set
//! matches on its own (see the filter module).

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A top-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A subcategory under a top-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subcategory {
    /// Unique subcategory identifier. Shares the category id space.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Identifier of the parent category.
    pub parent_id: CategoryId,
}

impl Subcategory {
    /// Create a new subcategory.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        parent_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("electronics", "Electronics");
        assert_eq!(cat.id.as_str(), "electronics");
        assert_eq!(cat.name, "Electronics");
    }

    #[test]
    fn test_subcategory_parent_link() {
        let sub = Subcategory::new("laptops", "Laptops", "electronics");
        assert_eq!(sub.parent_id.as_str(), "electronics");
    }
}
