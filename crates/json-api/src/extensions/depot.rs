//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use catalog_app::context::AppContext;

use crate::state::State;

/// Helpers for pulling injected state out of the depot.
pub(crate) trait DepotExt {
    /// Application context injected by the router, or a logged 500.
    fn app_or_500(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn app_or_500(&self) -> Result<&AppContext, StatusError> {
        self.obtain::<Arc<State>>()
            .map(|state| &state.app)
            .map_err(|_ignored| {
                error!("application state missing from depot");

                StatusError::internal_server_error()
            })
    }
}
