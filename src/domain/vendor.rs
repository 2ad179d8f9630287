/// A food vendor on campus.
///
/// In the seed data a vendor's id coincides with its staff account's user id.
/// That is a dataset convention, not an enforced invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    pub is_open: bool,
    pub image_url: String,
}

impl Vendor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        rating: f32,
        is_open: bool,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            rating,
            is_open,
            image_url: image_url.into(),
        }
    }
}

/// Payload for creating a new vendor.
#[derive(Debug, Clone)]
pub struct VendorCreate {
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub is_open: bool,
    pub image_url: String,
}

/// Payload for updating a vendor. Currently only the open/closed toggle.
#[derive(Debug, Clone)]
pub struct VendorPatch {
    pub is_open: Option<bool>,
}
