//! Aggregate numbers over the listing slice a chat was opened with.
//!
//! Computed fresh for every reply; nothing here is cached between turns.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::types::Listing;

/// Summary of a listing slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingStats<'a> {
    pub total: usize,
    pub free_count: usize,
    /// All listings ordered by descending rating. Ties keep input order.
    pub ranked: Vec<&'a Listing>,
    /// Free listings in input order.
    pub free_items: Vec<&'a Listing>,
    /// Distinct categories in first-seen order.
    pub categories: Vec<&'a str>,
    /// Distinct restaurants in first-seen order.
    pub restaurants: Vec<&'a str>,
    pub average_rating: f64,
}

impl<'a> ListingStats<'a> {
    pub fn compute(listings: &'a [Listing]) -> Self {
        let mut ranked: Vec<&Listing> = listings.iter().collect();
        // Stable sort: equal ratings stay in their original order.
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));

        let free_items: Vec<&Listing> = listings.iter().filter(|l| l.is_free()).collect();

        let mut categories: Vec<&str> = Vec::new();
        let mut restaurants: Vec<&str> = Vec::new();
        for listing in listings {
            if !categories.contains(&listing.category.as_str()) {
                categories.push(&listing.category);
            }
            if !restaurants.contains(&listing.restaurant.as_str()) {
                restaurants.push(&listing.restaurant);
            }
        }

        let average_rating = if listings.is_empty() {
            0.0
        } else {
            listings.iter().map(|l| l.rating).sum::<f64>() / as_f64(listings.len())
        };

        Self {
            total: listings.len(),
            free_count: free_items.len(),
            ranked,
            free_items,
            categories,
            restaurants,
            average_rating,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Highest-rated listing, first occurrence on ties.
    pub fn top_rated(&self) -> Option<&'a Listing> {
        self.ranked.first().copied()
    }

    /// `round(100 * free / total)`, or 0 with no listings.
    pub fn free_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        round_u32(100.0 * as_f64(self.free_count) / as_f64(self.total))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_u32(value: f64) -> u32 {
    value.round() as u32
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: usize) -> f64 {
    n as f64
}
