//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::products::{
    data::ProductPayload,
    errors::ProductsServiceError,
    models::{Product, ProductId},
    repository::{InMemoryProductsRepository, ProductsRepository, ProductsRepositoryError},
    validation::{merge_product, new_product},
    values::Tag,
};

/// Products service over a [`ProductsRepository`].
#[derive(Clone)]
pub struct CatalogProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl CatalogProductsService {
    /// Service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }

    /// Service backed by a fresh in-memory repository.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductsRepository::new()))
    }
}

impl Debug for CatalogProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogProductsService")
            .finish_non_exhaustive()
    }
}

fn sort_by_id(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| a.id().cmp(b.id()));

    products
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    #[tracing::instrument(name = "products.service.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(sort_by_id(self.repository.get_all().await))
    }

    #[tracing::instrument(
        name = "products.service.list_products_by_tag",
        skip(self),
        fields(products_count = tracing::field::Empty),
        err
    )]
    async fn list_products_by_tag(&self, tag: String) -> Result<Vec<Product>, ProductsServiceError> {
        let tag = Tag::build(&tag)?;

        let products = sort_by_id(self.repository.find_by_tag(tag).await);

        tracing::Span::current().record("products_count", products.len());

        Ok(products)
    }

    #[tracing::instrument(
        name = "products.service.get_product",
        skip(self),
        fields(product_id = %product),
        err
    )]
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        Ok(self.repository.find_by_id(product).await?)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, payload),
        fields(product_id = tracing::field::Empty),
        err
    )]
    async fn create_product(&self, payload: ProductPayload) -> Result<Product, ProductsServiceError> {
        let product = new_product(ProductId::generate(), Timestamp::now(), &payload)?;

        tracing::Span::current().record("product_id", tracing::field::display(product.id()));

        self.repository.save(product.clone()).await;

        info!(product_id = %product.id(), "created product");

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, payload),
        fields(product_id = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductId,
        payload: ProductPayload,
    ) -> Result<Product, ProductsServiceError> {
        loop {
            let existing = self.repository.find_by_id(product.clone()).await?;
            let merged = merge_product(&existing, &payload)?;

            match self.repository.replace(existing, merged).await {
                Ok(updated) => {
                    info!(product_id = %updated.id(), "updated product");

                    return Ok(updated);
                }
                Err(ProductsRepositoryError::Conflict) => {
                    debug!(product_id = %product, "product changed during update, retrying");
                }
                Err(error) => return Err(error.into()),
            }
        }
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(product_id = %product),
        err
    )]
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        self.repository.delete_by_id(product.clone()).await?;

        info!(product_id = %product, "deleted product");

        Ok(())
    }
}

/// Product catalog operations.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, sorted by id.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the products carrying the given tag, sorted by id.
    async fn list_products_by_tag(&self, tag: String) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Validates the payload and stores it as a new product with a fresh id.
    async fn create_product(&self, payload: ProductPayload) -> Result<Product, ProductsServiceError>;

    /// Merges the payload onto the stored product and stores the result.
    async fn update_product(
        &self,
        product: ProductId,
        payload: ProductPayload,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
