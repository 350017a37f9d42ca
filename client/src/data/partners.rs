//! Partner leaderboard data and the rank badge lookup.

#[cfg(test)]
#[path = "partners_test.rs"]
mod partners_test;

/// Tier shown next to a partner's rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Crown,
    Gold,
    Silver,
    Bronze,
    Star,
    Rising,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Crown => "Crown",
            Badge::Gold => "Gold",
            Badge::Silver => "Silver",
            Badge::Bronze => "Bronze",
            Badge::Star => "Star",
            Badge::Rising => "Rising",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Badge::Crown => "👑",
            Badge::Gold => "🥇",
            Badge::Silver => "🥈",
            Badge::Bronze => "🥉",
            Badge::Star => "⭐",
            Badge::Rising => "🌱",
        }
    }

    /// CSS modifier, e.g. `partner-badge--gold`.
    pub fn css_class(self) -> &'static str {
        match self {
            Badge::Crown => "partner-badge--crown",
            Badge::Gold => "partner-badge--gold",
            Badge::Silver => "partner-badge--silver",
            Badge::Bronze => "partner-badge--bronze",
            Badge::Star => "partner-badge--star",
            Badge::Rising => "partner-badge--rising",
        }
    }
}

/// 1 Crown, 2 Gold, 3 Silver, 4-5 Bronze, 6-10 Star, anything else Rising.
pub fn badge_for_rank(rank: u32) -> Badge {
    match rank {
        1 => Badge::Crown,
        2 => Badge::Gold,
        3 => Badge::Silver,
        4..=5 => Badge::Bronze,
        6..=10 => Badge::Star,
        _ => Badge::Rising,
    }
}

/// One row of the leaderboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partner {
    pub rank: u32,
    pub name: &'static str,
    pub kind: PartnerKind,
    pub city: &'static str,
    pub meals_saved: u32,
    pub rating: f32,
}

impl Partner {
    pub fn badge(&self) -> Badge {
        badge_for_rank(self.rank)
    }
}

/// Grouping used by the category tabs on the partners view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartnerKind {
    Restaurant,
    Bakery,
    Grocery,
    Cafe,
    Hotel,
}

impl PartnerKind {
    pub const ALL: [PartnerKind; 5] = [
        PartnerKind::Restaurant,
        PartnerKind::Bakery,
        PartnerKind::Grocery,
        PartnerKind::Cafe,
        PartnerKind::Hotel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartnerKind::Restaurant => "Restaurants",
            PartnerKind::Bakery => "Bakeries",
            PartnerKind::Grocery => "Grocers",
            PartnerKind::Cafe => "Cafés",
            PartnerKind::Hotel => "Hotels",
        }
    }
}

pub const PARTNERS: &[Partner] = &[
    Partner { rank: 1, name: "Spice Route", kind: PartnerKind::Restaurant, city: "Downtown", meals_saved: 4820, rating: 4.9 },
    Partner { rank: 2, name: "Corner Bakery", kind: PartnerKind::Bakery, city: "Old Town", meals_saved: 4310, rating: 4.8 },
    Partner { rank: 3, name: "Green Fork", kind: PartnerKind::Restaurant, city: "Riverside", meals_saved: 3975, rating: 4.8 },
    Partner { rank: 4, name: "Daily Harvest Market", kind: PartnerKind::Grocery, city: "Northgate", meals_saved: 3502, rating: 4.6 },
    Partner { rank: 5, name: "Bean There Café", kind: PartnerKind::Cafe, city: "University", meals_saved: 2988, rating: 4.7 },
    Partner { rank: 6, name: "The Grand Plaza", kind: PartnerKind::Hotel, city: "Downtown", meals_saved: 2715, rating: 4.5 },
    Partner { rank: 7, name: "Noodle House", kind: PartnerKind::Restaurant, city: "Chinatown", meals_saved: 2240, rating: 4.6 },
    Partner { rank: 8, name: "Rise & Shine Bakehouse", kind: PartnerKind::Bakery, city: "Westside", meals_saved: 1980, rating: 4.4 },
    Partner { rank: 9, name: "FreshMart", kind: PartnerKind::Grocery, city: "Eastside", meals_saved: 1725, rating: 4.3 },
    Partner { rank: 10, name: "Olive & Thyme", kind: PartnerKind::Restaurant, city: "Harbor", meals_saved: 1510, rating: 4.5 },
    Partner { rank: 11, name: "Morning Brew", kind: PartnerKind::Cafe, city: "Old Town", meals_saved: 1102, rating: 4.2 },
    Partner { rank: 12, name: "Seaside Inn", kind: PartnerKind::Hotel, city: "Harbor", meals_saved: 860, rating: 4.1 },
];

/// Partners of one kind, in rank order.
pub fn partners_of(kind: PartnerKind) -> impl Iterator<Item = &'static Partner> {
    PARTNERS.iter().filter(move |p| p.kind == kind)
}
