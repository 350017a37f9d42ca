//! Browse-page filter over the listing catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home and search pages render the same listing slice the chat dialog
//! answers questions about. Filtering never reorders or mutates listings.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::types::Listing;

/// Search box text plus the selected category chip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub query: String,
    /// `None` shows every category.
    pub category: Option<String>,
    pub free_only: bool,
}

impl CatalogFilter {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.category.is_some() || self.free_only
    }

    /// Select `category`, or clear the selection if it is already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_owned());
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let query = self.query.trim().to_lowercase();
        matches_query(listing, &query, self.category.as_deref()) && (!self.free_only || listing.is_free())
    }

    /// Matching listings in their original order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let mut hits = filter_listings(listings, &self.query, self.category.as_deref());
        if self.free_only {
            hits.retain(|l| l.is_free());
        }
        hits
    }
}

/// Listings whose name, restaurant, or category contains `query`
/// (trimmed, case-insensitive) and, when given, whose category is exactly
/// `category`. Order is preserved.
pub fn filter_listings<'a>(listings: &'a [Listing], query: &str, category: Option<&str>) -> Vec<&'a Listing> {
    let query = query.trim().to_lowercase();
    listings.iter().filter(|l| matches_query(l, &query, category)).collect()
}

/// `query` must already be trimmed and lower-cased.
fn matches_query(listing: &Listing, query: &str, category: Option<&str>) -> bool {
    let text_ok = query.is_empty()
        || [&listing.name, &listing.restaurant, &listing.category]
            .iter()
            .any(|field| field.to_lowercase().contains(query));
    text_ok && category.is_none_or(|c| c == listing.category)
}

/// Distinct categories in first-seen order, for the filter chips.
pub fn categories(listings: &[Listing]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for listing in listings {
        if !out.contains(&listing.category) {
            out.push(listing.category.clone());
        }
    }
    out
}
