use super::*;

#[test]
fn category_breakdown_sums_to_one_hundred() {
    let total: u32 = CATEGORY_BREAKDOWN.iter().map(|c| u32::from(c.percent)).sum();
    assert_eq!(total, 100);
}

#[test]
fn headline_stats_are_filled_in() {
    assert_eq!(HEADLINE_STATS.len(), 4);
    for stat in HEADLINE_STATS {
        assert!(!stat.value.is_empty());
        assert!(!stat.label.is_empty());
    }
}

#[test]
fn milestones_and_tips_are_present() {
    assert!(!MILESTONES.is_empty());
    assert!(!TIPS.is_empty());
}
