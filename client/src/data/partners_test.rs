use super::*;

#[test]
fn badge_for_rank_table() {
    assert_eq!(badge_for_rank(1), Badge::Crown);
    assert_eq!(badge_for_rank(2), Badge::Gold);
    assert_eq!(badge_for_rank(3), Badge::Silver);
    assert_eq!(badge_for_rank(4), Badge::Bronze);
    assert_eq!(badge_for_rank(5), Badge::Bronze);
    for rank in 6..=10 {
        assert_eq!(badge_for_rank(rank), Badge::Star, "rank {rank}");
    }
    assert_eq!(badge_for_rank(11), Badge::Rising);
    assert_eq!(badge_for_rank(500), Badge::Rising);
    assert_eq!(badge_for_rank(0), Badge::Rising);
}

#[test]
fn badge_labels() {
    assert_eq!(Badge::Crown.label(), "Crown");
    assert_eq!(Badge::Rising.label(), "Rising");
}

#[test]
fn partner_ranks_are_sequential_from_one() {
    for (i, partner) in PARTNERS.iter().enumerate() {
        assert_eq!(partner.rank as usize, i + 1, "{}", partner.name);
    }
}

#[test]
fn partners_are_sorted_by_meals_saved() {
    for pair in PARTNERS.windows(2) {
        assert!(pair[0].meals_saved >= pair[1].meals_saved);
    }
}

#[test]
fn every_kind_has_partners() {
    for kind in PartnerKind::ALL {
        assert!(partners_of(kind).next().is_some(), "{kind:?}");
    }
}

#[test]
fn partner_badge_uses_rank() {
    assert_eq!(PARTNERS[0].badge(), Badge::Crown);
    assert_eq!(PARTNERS[PARTNERS.len() - 1].badge(), Badge::Rising);
}
