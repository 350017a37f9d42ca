//! Environmental impact figures for the impact view.

#[cfg(test)]
#[path = "impact_test.rs"]
mod impact_test;

/// Headline number card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactStat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

pub const HEADLINE_STATS: &[ImpactStat] = &[
    ImpactStat { icon: "🍽️", value: "48,200", label: "Meals rescued", detail: "Surplus portions that reached a plate instead of a bin." },
    ImpactStat { icon: "🌍", value: "120 t", label: "CO₂e avoided", detail: "Emissions saved by not producing replacement food." },
    ImpactStat { icon: "💧", value: "9.6M L", label: "Water saved", detail: "Water embedded in food that would have been wasted." },
    ImpactStat { icon: "🏪", value: "310", label: "Partner venues", detail: "Restaurants, bakeries, and grocers listing surplus." },
];

/// Share of rescued food per category, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: &'static str,
    pub percent: u8,
}

pub const CATEGORY_BREAKDOWN: &[CategoryShare] = &[
    CategoryShare { category: "Bakery", percent: 34 },
    CategoryShare { category: "Prepared meals", percent: 29 },
    CategoryShare { category: "Produce", percent: 21 },
    CategoryShare { category: "Dairy", percent: 9 },
    CategoryShare { category: "Other", percent: 7 },
];

/// Timeline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { period: "Jan 2024", title: "First 10 partner restaurants" },
    Milestone { period: "Jun 2024", title: "10,000 meals rescued" },
    Milestone { period: "Nov 2024", title: "NGO pickup program launched" },
    Milestone { period: "Mar 2025", title: "100 tonnes of CO₂e avoided" },
];

/// Everyday tips shown at the bottom of the view.
pub const TIPS: &[&str] = &[
    "Plan meals before shopping and buy only what you need.",
    "Store bread in the freezer to keep it fresh for weeks.",
    "Use \"best before\" as a guide: many foods are fine after the date.",
    "Share extra portions with neighbours or a community fridge.",
];
