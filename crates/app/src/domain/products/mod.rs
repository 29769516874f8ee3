//! Products

pub mod data;
pub mod errors;
pub mod models;
mod repository;
pub mod service;
mod validation;
pub mod values;

pub use errors::{ProductsServiceError, ValidationError};
pub use repository::{
    InMemoryProductsRepository, MockProductsRepository, ProductsRepository,
    ProductsRepositoryError,
};
pub use service::*;
pub use validation::{merge_product, new_product};
