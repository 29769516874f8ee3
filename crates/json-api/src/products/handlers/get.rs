//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::models::Product;

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: String,

    /// The name of the product
    pub name: String,

    /// The price of the product
    pub price: PriceResponse,

    /// The product image, if any
    pub image: Option<ImageResponse>,

    /// The product description, if any
    pub description: Option<DescriptionResponse>,

    /// The product tags, `null` when the product has none
    pub tags: Option<Vec<TagResponse>>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceResponse {
    /// Decimal amount, as written when the price was set
    pub amount: String,

    /// ISO 4217 currency code
    pub currency: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImageResponse {
    pub url: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct DescriptionResponse {
    pub text: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct TagResponse {
    pub name: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let tags = (!product.tags().is_empty()).then(|| {
            product
                .tags()
                .iter()
                .map(|tag| TagResponse {
                    name: tag.name().to_owned(),
                })
                .collect()
        });

        ProductResponse {
            id: product.id().to_string(),
            name: product.name().to_owned(),
            price: PriceResponse {
                amount: product.price().amount_text(),
                currency: product.price().currency_code().to_owned(),
            },
            image: product.image().map(|image| ImageResponse {
                url: image.url().to_string(),
            }),
            description: product.description().map(|description| DescriptionResponse {
                text: description.text().to_owned(),
            }),
            tags,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let product = app
        .products
        .get_product(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use smallvec::smallvec;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError,
        data::{DescriptionPayload, ImagePayload, PricePayload, ProductPayload, TagPayload},
    };

    use crate::test_helpers::{make_product, make_product_from, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_product_json() -> TestResult {
        let product = make_product_from(
            "abc",
            ProductPayload {
                price: Some(PricePayload::new("100.50", "PLN")),
                image: Some(ImagePayload::new("https://via.placeholder.com/150")),
                description: Some(DescriptionPayload::new("description")),
                tags: Some(smallvec![TagPayload::new("b"), TagPayload::new("a")]),
                ..ProductPayload::default()
            },
        )?;

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| id.as_str() == "abc")
            .return_once(move |_| Ok(product));

        products.expect_list_products().never();
        products.expect_list_products_by_tag().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let mut res = TestClient::get("http://example.com/products/abc")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(
            body,
            json!({
                "id": "abc",
                "name": "product",
                "price": { "amount": "100.50", "currency": "PLN" },
                "image": { "url": "https://via.placeholder.com/150" },
                "description": { "text": "description" },
                "tags": [{ "name": "a" }, { "name": "b" }],
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_renders_absent_fields_as_null() -> TestResult {
        let product = make_product("abc")?;

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(move |_| Ok(product));

        products.expect_list_products().never();
        products.expect_list_products_by_tag().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let body: Value = TestClient::get("http://example.com/products/abc")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(body["image"], Value::Null);
        assert_eq!(body["description"], Value::Null);
        assert_eq!(body["tags"], Value::Null);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| id.as_str() == "emptyDB")
            .return_once(|_| Err(ProductsServiceError::NotFound));

        products.expect_list_products().never();
        products.expect_list_products_by_tag().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let res = TestClient::get("http://example.com/products/emptyDB")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
