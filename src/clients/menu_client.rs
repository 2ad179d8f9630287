use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::MenuItem;
use crate::error::MenuError;
use crate::menu_actor::MenuQuery;

/// Client for the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// One vendor's dishes, in the order they were added.
    #[instrument(skip(self))]
    pub async fn list_menu(&self, vendor_id: String) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        self.inner.list(Some(MenuQuery::ForVendor(vendor_id))).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: String) -> Result<Option<MenuItem>, MenuError> {
        debug!("Sending request");
        self.inner.get(id).await
    }
}
