//! Products service errors.

use thiserror::Error;

use crate::domain::products::repository::ProductsRepositoryError;

/// Reasons a product payload is rejected.
///
/// The display string of each variant is the user-facing reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount is not a decimal number, or the currency is unknown.
    #[error("Price is not correct")]
    BadPrice,

    /// Image URL does not parse as an absolute URL.
    #[error("Image URL is not correct")]
    BadImageUrl,

    /// Tag name is empty.
    #[error("Tag can not be empty")]
    EmptyTag,

    /// Description exceeds the maximum length.
    #[error("Description can not be longer than 400 characters")]
    TooLongDescription,

    /// Create payload without a non-empty name.
    #[error("Product name can not be empty")]
    EmptyProductName,

    /// Create payload without a price object.
    #[error("Price is required to create a product")]
    MissingPrice,

    /// Update payload without a single valid name, price, image or description.
    #[error("No valid fields to update")]
    NothingToUpdate,
}

/// Products service failures.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// No product is stored under the id.
    #[error("product not found")]
    NotFound,

    /// The stored product changed while it was being written.
    #[error("product changed concurrently")]
    Conflict,

    /// The payload was rejected.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl From<ProductsRepositoryError> for ProductsServiceError {
    fn from(error: ProductsRepositoryError) -> Self {
        match error {
            ProductsRepositoryError::NotFound => Self::NotFound,
            ProductsRepositoryError::Conflict => Self::Conflict,
        }
    }
}
