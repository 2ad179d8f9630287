use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Vendor, VendorPatch};
use crate::error::VendorError;
use crate::vendor_actor::VendorQuery;

/// Client for the vendor directory actor.
#[derive(Clone)]
pub struct VendorClient {
    inner: ResourceClient<Vendor>,
}

impl VendorClient {
    pub fn new(inner: ResourceClient<Vendor>) -> Self {
        Self { inner }
    }

    /// Every vendor, in seed insertion order.
    #[instrument(skip(self))]
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, VendorError> {
        debug!("Sending request");
        self.inner.list(None).await
    }

    /// Only the vendors currently accepting orders.
    #[instrument(skip(self))]
    pub async fn list_open(&self) -> Result<Vec<Vendor>, VendorError> {
        debug!("Sending request");
        self.inner.list(Some(VendorQuery::Open)).await
    }

    #[instrument(skip(self))]
    pub async fn get_vendor(&self, id: String) -> Result<Option<Vendor>, VendorError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    /// The storefront open/closed toggle.
    #[instrument(skip(self))]
    pub async fn set_open(&self, id: String, is_open: bool) -> Result<Vendor, VendorError> {
        debug!("Sending request");
        self.inner
            .update(
                id,
                VendorPatch {
                    is_open: Some(is_open),
                },
            )
            .await
    }
}
