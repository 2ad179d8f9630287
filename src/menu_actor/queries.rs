/// Listing filters for menu items.
#[derive(Debug, Clone)]
pub enum MenuQuery {
    /// One vendor's menu, in the order the dishes were added.
    ForVendor(String),
}
