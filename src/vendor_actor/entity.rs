use super::queries::VendorQuery;
use crate::actor_framework::Entity;
use crate::domain::{Vendor, VendorCreate, VendorPatch};
use crate::error::VendorError;

impl Entity for Vendor {
    type Id = String;
    type CreateParams = VendorCreate;
    type Patch = VendorPatch;
    type Action = ();
    type ActionResult = ();
    type Query = VendorQuery;
    type Error = VendorError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: VendorCreate) -> Result<Self, VendorError> {
        Ok(Self {
            id,
            name: params.name,
            cuisine: params.cuisine,
            rating: params.rating,
            is_open: params.is_open,
            image_url: params.image_url,
        })
    }

    /// Flips the open/closed toggle. Nothing else about a vendor changes
    /// after creation.
    fn on_update(&mut self, patch: VendorPatch) -> Result<(), VendorError> {
        if let Some(is_open) = patch.is_open {
            self.is_open = is_open;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), VendorError> {
        Ok(())
    }

    fn matches(&self, query: &VendorQuery) -> bool {
        match query {
            VendorQuery::Open => self.is_open,
        }
    }

    fn not_found(id: &String) -> VendorError {
        VendorError::NotFound(id.clone())
    }

    fn channel_closed() -> VendorError {
        VendorError::ActorClosed
    }
}
