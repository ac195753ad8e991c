//! Browse error types.

use thiserror::Error;

/// Errors that can occur while assembling browse reference data.
///
/// The browse pipeline itself is infallible by construction: range inputs
/// clamp, the sort key is a closed enumeration, and unmatched slugs or empty
/// catalogs degrade to empty results. Only building a [`crate::catalog::CatalogConfig`]
/// can fail.
#[derive(Error, Debug)]
pub enum BrowseError {
    /// A subcategory references a parent that is not in the category table.
    #[error("Unknown parent category {parent} for subcategory {subcategory}")]
    UnknownParentCategory { subcategory: String, parent: String },

    /// The price bound or slider step is not positive.
    #[error("Invalid price bounds: max {max}, step {step}")]
    InvalidPriceBounds { max: i64, step: i64 },
}
