use super::queries::MenuQuery;
use crate::actor_framework::Entity;
use crate::domain::{MenuItem, MenuItemCreate};
use crate::error::MenuError;

impl Entity for MenuItem {
    type Id = String;
    type CreateParams = MenuItemCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Query = MenuQuery;
    type Error = MenuError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: MenuItemCreate) -> Result<Self, MenuError> {
        Ok(Self {
            id,
            vendor_id: params.vendor_id,
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), MenuError> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), MenuError> {
        Ok(())
    }

    fn matches(&self, query: &MenuQuery) -> bool {
        match query {
            MenuQuery::ForVendor(vendor_id) => self.vendor_id == *vendor_id,
        }
    }

    fn not_found(id: &String) -> MenuError {
        MenuError::NotFound(id.clone())
    }

    fn channel_closed() -> MenuError {
        MenuError::ActorClosed
    }
}
