//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::products::{
    models::{Product, ProductId},
    values::Tag,
};

/// Storage failures.
#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    /// No product is stored under the id.
    #[error("product not found")]
    NotFound,

    /// The stored product is no longer the one the write was based on.
    #[error("product changed since it was read")]
    Conflict,
}

/// Product storage keyed by id.
///
/// Each operation is atomic for its key: readers never observe a partially
/// written product.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Insert or overwrite a product.
    async fn save(&self, product: Product);

    /// Overwrite `expected` with `product`, provided `expected` is still the
    /// stored value for its id.
    async fn replace(
        &self,
        expected: Product,
        product: Product,
    ) -> Result<Product, ProductsRepositoryError>;

    /// Product stored under the id.
    async fn find_by_id(&self, product: ProductId) -> Result<Product, ProductsRepositoryError>;

    /// Remove the product stored under the id.
    async fn delete_by_id(&self, product: ProductId) -> Result<(), ProductsRepositoryError>;

    /// All products, in no particular order.
    async fn get_all(&self) -> Vec<Product>;

    /// Products whose tag set contains `tag`, in no particular order.
    async fn find_by_tag(&self, tag: Tag) -> Vec<Product>;
}

/// Products held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    products: RwLock<FxHashMap<ProductId, Product>>,
}

impl InMemoryProductsRepository {
    /// Empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn save(&self, product: Product) {
        debug!(product_id = %product.id(), "saving product");

        self.products
            .write()
            .await
            .insert(product.id().clone(), product);
    }

    async fn replace(
        &self,
        expected: Product,
        product: Product,
    ) -> Result<Product, ProductsRepositoryError> {
        let mut products = self.products.write().await;

        let Some(stored) = products.get_mut(product.id()) else {
            debug!(product_id = %product.id(), "product to replace is gone");

            return Err(ProductsRepositoryError::NotFound);
        };

        if *stored != expected {
            debug!(product_id = %product.id(), "product to replace has changed");

            return Err(ProductsRepositoryError::Conflict);
        }

        *stored = product.clone();

        debug!(product_id = %product.id(), "replaced product");

        Ok(product)
    }

    async fn find_by_id(&self, product: ProductId) -> Result<Product, ProductsRepositoryError> {
        self.products
            .read()
            .await
            .get(&product)
            .cloned()
            .ok_or(ProductsRepositoryError::NotFound)
    }

    async fn delete_by_id(&self, product: ProductId) -> Result<(), ProductsRepositoryError> {
        if self.products.write().await.remove(&product).is_none() {
            return Err(ProductsRepositoryError::NotFound);
        }

        debug!(product_id = %product, "deleted product");

        Ok(())
    }

    async fn get_all(&self) -> Vec<Product> {
        self.products.read().await.values().cloned().collect()
    }

    async fn find_by_tag(&self, tag: Tag) -> Vec<Product> {
        self.products
            .read()
            .await
            .values()
            .filter(|product| product.has_tag(&tag))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::products::{
        data::{PricePayload, ProductPayload, TagPayload},
        errors::ValidationError,
        validation::new_product,
    };

    use super::*;

    fn make_product(id: &str, tags: &[&str]) -> Result<Product, ValidationError> {
        make_named_product(id, "product", tags)
    }

    fn make_named_product(id: &str, name: &str, tags: &[&str]) -> Result<Product, ValidationError> {
        new_product(
            ProductId::from(id),
            Timestamp::UNIX_EPOCH,
            &ProductPayload {
                name: Some(name.to_owned()),
                price: Some(PricePayload::new("100", "PLN")),
                tags: Some(tags.iter().map(|tag| TagPayload::new(*tag)).collect()),
                ..ProductPayload::default()
            },
        )
    }

    #[tokio::test]
    async fn save_then_find_returns_product() -> TestResult {
        let repository = InMemoryProductsRepository::new();
        let product = make_product("a", &[])?;

        repository.save(product.clone()).await;

        assert_eq!(repository.find_by_id(ProductId::from("a")).await?, product);

        Ok(())
    }

    #[tokio::test]
    async fn save_overwrites_existing_id() -> TestResult {
        let repository = InMemoryProductsRepository::new();

        repository.save(make_product("a", &[])?).await;
        repository.save(make_product("a", &["x"])?).await;

        let all = repository.get_all().await;

        assert_eq!(all.len(), 1);
        assert_eq!(all.first().map(|product| product.tags().len()), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn find_unknown_id_returns_not_found() {
        let repository = InMemoryProductsRepository::new();

        let result = repository.find_by_id(ProductId::from("missing")).await;

        assert!(
            matches!(result, Err(ProductsRepositoryError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn replace_missing_product_returns_not_found() -> TestResult {
        let repository = InMemoryProductsRepository::new();

        let result = repository
            .replace(make_product("a", &[])?, make_named_product("a", "renamed", &[])?)
            .await;

        assert!(
            matches!(result, Err(ProductsRepositoryError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert!(repository.get_all().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn replace_current_product_stores_new_value() -> TestResult {
        let repository = InMemoryProductsRepository::new();
        let original = make_product("a", &[])?;
        let renamed = make_named_product("a", "renamed", &[])?;

        repository.save(original.clone()).await;

        assert_eq!(repository.replace(original, renamed.clone()).await?, renamed);
        assert_eq!(repository.find_by_id(ProductId::from("a")).await?, renamed);

        Ok(())
    }

    #[tokio::test]
    async fn replace_stale_product_is_a_conflict() -> TestResult {
        let repository = InMemoryProductsRepository::new();
        let original = make_product("a", &[])?;
        let current = make_named_product("a", "current", &[])?;

        repository.save(current.clone()).await;

        let result = repository
            .replace(original, make_named_product("a", "stale", &[])?)
            .await;

        assert!(
            matches!(result, Err(ProductsRepositoryError::Conflict)),
            "expected Conflict, got {result:?}"
        );
        assert_eq!(repository.find_by_id(ProductId::from("a")).await?, current);

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_product_once() -> TestResult {
        let repository = InMemoryProductsRepository::new();

        repository.save(make_product("a", &[])?).await;
        repository.delete_by_id(ProductId::from("a")).await?;

        let result = repository.delete_by_id(ProductId::from("a")).await;

        assert!(
            matches!(result, Err(ProductsRepositoryError::NotFound)),
            "expected NotFound on second delete, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_by_tag_matches_exact_tag_only() -> TestResult {
        let repository = InMemoryProductsRepository::new();

        repository.save(make_product("a", &["x"])?).await;
        repository.save(make_product("b", &["X", "xx"])?).await;
        repository.save(make_product("c", &["x", "y"])?).await;

        let mut ids: Vec<String> = repository
            .find_by_tag(Tag::build("x")?)
            .await
            .into_iter()
            .map(|product| product.id().to_string())
            .collect();

        ids.sort();

        assert_eq!(ids, ["a", "c"]);

        Ok(())
    }
}
