//! Shared records passed between pages, components, and the responder.
//!
//! DESIGN
//! ======
//! Listings are supplied by a parent in the camelCase JSON shape
//! (`discountedPrice`), so serde renames keep that shape intact while Rust
//! code stays snake_case. Everything here is read-only once constructed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One food item available for reservation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Listing identifier, empty when the parent did not supply one.
    #[serde(default)]
    pub id: String,
    /// Display name of the dish or bundle.
    pub name: String,
    /// Restaurant offering the item.
    pub restaurant: String,
    /// Free-form category (e.g. `"Bakery"`, `"Meals"`).
    pub category: String,
    /// Average customer rating, 0.0 to 5.0.
    pub rating: f64,
    /// Price after the surplus discount. Zero means the item is free.
    pub discounted_price: f64,
    /// Price before the discount, if known.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Portions left, if the parent tracks it.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Human-readable pickup deadline (e.g. `"21:00"`).
    #[serde(default)]
    pub pickup_until: Option<String>,
}

impl Listing {
    /// Whether the item is given away at no cost: a discounted price of
    /// exactly zero. Negative prices are malformed, not free.
    #[allow(clippy::float_cmp)]
    pub fn is_free(&self) -> bool {
        self.discounted_price == 0.0
    }

    /// Whole-percent discount relative to the original price.
    pub fn savings_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || self.discounted_price > original {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = ((original - self.discounted_price) / original * 100.0).round() as u32;
        Some(pct)
    }

    /// Price label shown on cards and in chat replies.
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_owned()
        } else {
            format!("${:.2}", self.discounted_price)
        }
    }
}

/// Account role picked during signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Someone rescuing food. Also the role assigned when none was chosen.
    #[default]
    User,
    Restaurant,
    Ngo,
    Volunteer,
}

impl Role {
    /// Every selectable role, in the order the signup form lists them.
    pub const ALL: [Role; 4] = [Role::User, Role::Restaurant, Role::Ngo, Role::Volunteer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Restaurant => "restaurant",
            Role::Ngo => "ngo",
            Role::Volunteer => "volunteer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::User => "Food rescuer",
            Role::Restaurant => "Restaurant partner",
            Role::Ngo => "NGO / charity",
            Role::Volunteer => "Volunteer driver",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Which identifier the auth form asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    #[default]
    Email,
    Phone,
    /// Cosmetic "continue with Gmail" branch. Collects no identifier and no
    /// password.
    Gmail,
}

impl LoginMethod {
    pub const ALL: [LoginMethod; 3] = [LoginMethod::Email, LoginMethod::Phone, LoginMethod::Gmail];

    pub fn as_str(self) -> &'static str {
        match self {
            LoginMethod::Email => "email",
            LoginMethod::Phone => "phone",
            LoginMethod::Gmail => "gmail",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::Email => "Email",
            LoginMethod::Phone => "Phone",
            LoginMethod::Gmail => "Gmail",
        }
    }

    /// Whether this method asks for a password.
    pub fn uses_password(self) -> bool {
        !matches!(self, LoginMethod::Gmail)
    }
}

/// User record synthesized client-side after a successful form submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Generated UUID v4 string.
    pub id: String,
    pub username: String,
    /// Set only when the user logged in with [`LoginMethod::Email`].
    pub email: Option<String>,
    /// Set only when the user logged in with [`LoginMethod::Phone`].
    pub phone: Option<String>,
    pub role: Role,
    pub login_method: LoginMethod,
}

/// Top-level views reachable through the view-change callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    #[default]
    Home,
    Search,
    Impact,
    Partners,
}

impl Destination {
    pub const ALL: [Destination; 4] =
        [Destination::Home, Destination::Search, Destination::Impact, Destination::Partners];

    /// Identifier string carried by view-change callbacks.
    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::Search => "search",
            Destination::Impact => "impact",
            Destination::Partners => "partners",
        }
    }

    /// Router path for this view.
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Search => "/search",
            Destination::Impact => "/impact",
            Destination::Partners => "/partners",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Search => "Browse food",
            Destination::Impact => "Our impact",
            Destination::Partners => "Partners",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = UnknownDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Destination::ALL
            .into_iter()
            .find(|dest| dest.as_str() == wanted)
            .ok_or_else(|| UnknownDestination(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown destination: {0}")]
pub struct UnknownDestination(pub String);
