//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::domain::products::{CatalogProductsService, ProductsService};

/// Application services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Product catalog service.
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context over the given products service.
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context over a fresh in-memory product store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(CatalogProductsService::in_memory()))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
