//! The fixed campus dataset the system boots with.
//!
//! Three accounts (one per role), four vendors, eight dishes, and four
//! in-flight orders. The vendor staff account shares its id with the vendor
//! record; that is a convention of this dataset, nothing enforces it.

use chrono::{Duration, Utc};

use crate::domain::{
    CartItem, MenuItem, Order, OrderStatus, User, UserRole, Vendor,
};

pub fn users() -> Vec<User> {
    vec![
        User::new(
            "u1",
            "Tunde",
            "student@bellachow.com",
            UserRole::Student,
            Some(5000),
        ),
        User::new("v1", "BukaTeria", "vendor@bellachow.com", UserRole::Vendor, None),
        User::new("r1", "David", "rider@bellachow.com", UserRole::Rider, None),
    ]
}

pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor::new(
            "v1",
            "BukaTeria",
            "Nigerian",
            4.5,
            true,
            "https://picsum.photos/400/200?random=1",
        ),
        Vendor::new(
            "v2",
            "Chops & Grills",
            "Fast Food",
            4.2,
            true,
            "https://picsum.photos/400/200?random=2",
        ),
        Vendor::new(
            "v3",
            "Mama's Kitchen",
            "Local Delicacies",
            4.8,
            false,
            "https://picsum.photos/400/200?random=3",
        ),
        Vendor::new(
            "v4",
            "Pizza Palace",
            "Italian",
            4.0,
            true,
            "https://picsum.photos/400/200?random=4",
        ),
    ]
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        // BukaTeria (v1)
        MenuItem::new(
            "m1",
            "v1",
            "Jollof Rice & Chicken",
            "Classic Nigerian party jollof with grilled chicken.",
            1500,
            "https://picsum.photos/200/200?random=11",
        ),
        MenuItem::new(
            "m2",
            "v1",
            "Efo Riro & Semo",
            "Rich vegetable soup with assorted meat.",
            1800,
            "https://picsum.photos/200/200?random=12",
        ),
        MenuItem::new(
            "m3",
            "v1",
            "Amala & Gbegiri",
            "Abeokuta's finest with ewedu and goat meat.",
            2000,
            "https://picsum.photos/200/200?random=13",
        ),
        // Chops & Grills (v2)
        MenuItem::new(
            "m4",
            "v2",
            "Beef Burger",
            "Juicy beef patty with cheese, lettuce, and tomatoes.",
            2500,
            "https://picsum.photos/200/200?random=21",
        ),
        MenuItem::new(
            "m5",
            "v2",
            "Shawarma Wrap",
            "Spicy chicken shawarma with fresh veggies.",
            1800,
            "https://picsum.photos/200/200?random=22",
        ),
        MenuItem::new(
            "m6",
            "v2",
            "Loaded Fries",
            "Fries topped with minced meat and cheese sauce.",
            2200,
            "https://picsum.photos/200/200?random=23",
        ),
        // Pizza Palace (v4)
        MenuItem::new(
            "m7",
            "v4",
            "Pepperoni Pizza",
            "Classic pepperoni with mozzarella cheese.",
            4500,
            "https://picsum.photos/200/200?random=41",
        ),
        MenuItem::new(
            "m8",
            "v4",
            "Chicken BBQ Pizza",
            "Grilled chicken, onions, and BBQ sauce.",
            5000,
            "https://picsum.photos/200/200?random=42",
        ),
    ]
}

pub fn orders() -> Vec<Order> {
    let menu = menu_items();
    let line = |index: usize, quantity: u32| CartItem {
        menu_item: menu[index].clone(),
        quantity,
    };
    let now = Utc::now();

    vec![
        Order {
            id: "o1".into(),
            student_id: "u1".into(),
            vendor_id: "v1".into(),
            rider_id: Some("r1".into()),
            items: vec![line(0, 1), line(1, 1)],
            total: 3300,
            status: OrderStatus::Preparing,
            created_at: now - Duration::minutes(10),
            delivery_address: "Akindeko Hall, Room 201".into(),
        },
        Order {
            id: "o2".into(),
            student_id: "u1".into(),
            vendor_id: "v2".into(),
            rider_id: None,
            items: vec![line(4, 2)],
            total: 3600,
            status: OrderStatus::Pending,
            created_at: now - Duration::minutes(2),
            delivery_address: "Fajuyi Hall, Block 4".into(),
        },
        Order {
            id: "o3".into(),
            student_id: "u1".into(),
            vendor_id: "v1".into(),
            rider_id: None,
            items: vec![line(2, 1)],
            total: 2000,
            status: OrderStatus::ReadyForPickup,
            created_at: now - Duration::minutes(20),
            delivery_address: "Moremi Hall, Room G-05".into(),
        },
        Order {
            id: "o4".into(),
            student_id: "u1".into(),
            vendor_id: "v2".into(),
            rider_id: Some("r1".into()),
            items: vec![line(3, 1)],
            total: 2500,
            status: OrderStatus::OutForDelivery,
            created_at: now - Duration::minutes(5),
            delivery_address: "Awolowo Hall, Room 112".into(),
        },
    ]
}
