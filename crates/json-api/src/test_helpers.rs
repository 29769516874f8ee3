//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{
        MockProductsService, ValidationError,
        data::{PricePayload, ProductPayload},
        models::{Product, ProductId},
        new_product,
    },
};

use crate::state::State;

/// Product `id` named "product", priced 100 PLN, with no optional fields.
pub(crate) fn make_product(id: &str) -> Result<Product, ValidationError> {
    make_product_from(id, ProductPayload::default())
}

/// Product `id` built from `payload`, defaulting name and price when absent.
pub(crate) fn make_product_from(
    id: &str,
    payload: ProductPayload,
) -> Result<Product, ValidationError> {
    let payload = ProductPayload {
        name: payload.name.or_else(|| Some("product".to_owned())),
        price: payload
            .price
            .or_else(|| Some(PricePayload::new("100", "PLN"))),
        ..payload
    };

    new_product(ProductId::from(id), Timestamp::UNIX_EPOCH, &payload)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(AppContext::new(Arc::new(
                products,
            )))))
            .push(route),
    )
}
