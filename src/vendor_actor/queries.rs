/// Listing filters for the vendor directory.
#[derive(Debug, Clone)]
pub enum VendorQuery {
    /// Vendors currently accepting orders.
    Open,
}
