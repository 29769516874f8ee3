//! Product Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products, sorted by id
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns every product, or only those carrying `tag` when it is given.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products listed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty tag filter"),
    ),
)]
pub(crate) async fn handler(
    tag: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let products = match tag.into_inner() {
        Some(tag) => app.products.list_products_by_tag(tag).await,
        None => app.products.list_products().await,
    }
    .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
