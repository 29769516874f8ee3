//! Product Errors

use salvo::http::StatusError;
use tracing::debug;

use catalog_app::domain::products::ProductsServiceError;

/// Translate a service error into its HTTP status.
///
/// Validation failures carry their reason as the brief.
pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Conflict => {
            StatusError::conflict().brief("Product changed concurrently, retry the request")
        }
        ProductsServiceError::Invalid(reason) => {
            debug!(%reason, "rejected product payload");

            StatusError::bad_request().brief(reason.to_string())
        }
    }
}
