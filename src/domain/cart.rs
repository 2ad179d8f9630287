use super::menu::MenuItem;

/// Flat delivery fee in whole currency units. Not vendor- or
/// distance-dependent.
pub const DELIVERY_FEE: u32 = 300;

/// One line in a cart: a dish and how many of it.
///
/// Invariant: `quantity >= 1`. [`Cart::set_quantity`] removes the line
/// instead of ever storing a zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
}

/// A student's shopping cart: an ordered list of lines, one per dish.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`. An existing line for the same dish is
    /// incremented in place; otherwise a new line is appended at the end,
    /// leaving the order of earlier lines untouched.
    pub fn add_item(&mut self, item: MenuItem) {
        match self.items.iter_mut().find(|ci| ci.menu_item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartItem {
                menu_item: item,
                quantity: 1,
            }),
        }
    }

    /// Sets the quantity of the line for `menu_item_id`. A quantity of zero
    /// removes the line entirely. An id with no line in the cart is a no-op.
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.items.retain(|ci| ci.menu_item.id != menu_item_id);
        } else if let Some(line) = self
            .items
            .iter_mut()
            .find(|ci| ci.menu_item.id == menu_item_id)
        {
            line.quantity = quantity;
        }
    }

    /// Sum of `price * quantity` over every line. Integer arithmetic,
    /// saturating at `u32::MAX` since `set_quantity` accepts any quantity.
    pub fn subtotal(&self) -> u32 {
        self.items.iter().fold(0u32, |acc, ci| {
            acc.saturating_add(ci.menu_item.price.saturating_mul(ci.quantity))
        })
    }

    /// Subtotal plus the delivery fee.
    pub fn total(&self, delivery_fee: u32) -> u32 {
        self.subtotal().saturating_add(delivery_fee)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, ci| acc.saturating_add(ci.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Empties the cart, handing back the lines. Used at checkout.
    pub fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: &str, price: u32) -> MenuItem {
        MenuItem::new(id, "v1", format!("Dish {id}"), "", price, "")
    }

    #[test]
    fn add_same_item_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));
        cart.add_item(dish("m1", 1500));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn new_items_append_after_existing_lines() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));
        cart.add_item(dish("m2", 1800));
        cart.add_item(dish("m1", 1500));

        let ids: Vec<&str> = cart.items().iter().map(|ci| ci.menu_item.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));
        cart.add_item(dish("m2", 1800));

        cart.set_quantity("m1", 0);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].menu_item.id, "m2");
        assert!(cart.items().iter().all(|ci| ci.quantity >= 1));
    }

    #[test]
    fn set_quantity_overwrites_existing_line() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));

        cart.set_quantity("m1", 4);

        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.subtotal(), 6000);
    }

    #[test]
    fn set_quantity_for_unknown_item_is_a_noop() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));

        cart.set_quantity("m99", 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));
        cart.add_item(dish("m2", 1800));
        cart.set_quantity("m2", 2);

        assert_eq!(cart.subtotal(), 1500 + 2 * 1800);
    }

    #[test]
    fn total_adds_the_flat_delivery_fee() {
        // Two dishes at 1500 and 1800 plus the 300 fee comes to 3600.
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));
        cart.add_item(dish("m2", 1800));

        assert_eq!(cart.total(DELIVERY_FEE), 3600);
    }

    #[test]
    fn absurd_quantities_saturate_instead_of_overflowing() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 5000));
        cart.set_quantity("m1", u32::MAX);

        assert_eq!(cart.subtotal(), u32::MAX);
        assert_eq!(cart.total(DELIVERY_FEE), u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn take_items_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add_item(dish("m1", 1500));

        let items = cart.take_items();

        assert_eq!(items.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
