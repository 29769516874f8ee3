//! Update Product Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use catalog_app::domain::products::models::ProductId;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse, requests::ProductRequest},
};

/// Product Update Handler
///
/// Fields that are present and valid replace the stored ones; the rest are
/// kept.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "No valid fields to update"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty, tags_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let product = ProductId::from(id.into_inner());
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(&product));

    if let Some(tags) = &request.tags {
        span.record("tags_count", tags.len());
    }

    let updated = app
        .products
        .update_product(product, request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
