//! Built-in demo catalog passed to the browse grid and the chat dialog.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::types::Listing;

struct Seed {
    id: &'static str,
    name: &'static str,
    restaurant: &'static str,
    category: &'static str,
    rating: f64,
    price: f64,
    original: f64,
    quantity: u32,
    pickup_until: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed { id: "lst-001", name: "Sourdough Loaf", restaurant: "Corner Bakery", category: "Bakery", rating: 4.7, price: 0.0, original: 6.0, quantity: 4, pickup_until: "20:00" },
    Seed { id: "lst-002", name: "Butter Chicken Bowl", restaurant: "Spice Route", category: "Meals", rating: 4.9, price: 3.5, original: 12.0, quantity: 2, pickup_until: "22:00" },
    Seed { id: "lst-003", name: "Croissant Bag", restaurant: "Corner Bakery", category: "Bakery", rating: 4.5, price: 2.0, original: 8.0, quantity: 6, pickup_until: "20:00" },
    Seed { id: "lst-004", name: "Seasonal Veggie Box", restaurant: "Green Fork", category: "Produce", rating: 4.6, price: 0.0, original: 10.0, quantity: 3, pickup_until: "19:30" },
    Seed { id: "lst-005", name: "Pad Thai", restaurant: "Noodle House", category: "Meals", rating: 4.3, price: 4.0, original: 11.0, quantity: 5, pickup_until: "21:30" },
    Seed { id: "lst-006", name: "Yogurt Parfait Cups", restaurant: "Bean There Café", category: "Dairy", rating: 4.1, price: 1.5, original: 5.0, quantity: 8, pickup_until: "18:00" },
    Seed { id: "lst-007", name: "Mezze Platter", restaurant: "Olive & Thyme", category: "Meals", rating: 4.8, price: 5.0, original: 16.0, quantity: 1, pickup_until: "22:30" },
    Seed { id: "lst-008", name: "Bagel Dozen", restaurant: "Rise & Shine Bakehouse", category: "Bakery", rating: 4.2, price: 0.0, original: 9.0, quantity: 2, pickup_until: "17:00" },
];

/// The demo catalog as owned listings.
pub fn demo_listings() -> Vec<Listing> {
    SEEDS
        .iter()
        .map(|seed| Listing {
            id: seed.id.to_owned(),
            name: seed.name.to_owned(),
            restaurant: seed.restaurant.to_owned(),
            category: seed.category.to_owned(),
            rating: seed.rating,
            discounted_price: seed.price,
            original_price: Some(seed.original),
            quantity: Some(seed.quantity),
            pickup_until: Some(seed.pickup_until.to_owned()),
        })
        .collect()
}
