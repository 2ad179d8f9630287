/// A dish offered by one vendor.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub description: String,
    /// Price in whole currency units. All money in this system is integer
    /// arithmetic; there are no fractional amounts anywhere.
    pub price: u32,
    pub image_url: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        vendor_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vendor_id: vendor_id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }
}

/// Payload for adding a dish to a vendor's menu.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub vendor_id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image_url: String,
}
