use super::*;

fn listing(name: &str, rating: f64, price: f64) -> Listing {
    Listing {
        id: String::new(),
        name: name.to_owned(),
        restaurant: "Corner Bakery".to_owned(),
        category: "Bakery".to_owned(),
        rating,
        discounted_price: price,
        original_price: None,
        quantity: None,
        pickup_until: None,
    }
}

#[test]
fn unavailable_only_for_food_and_reservation() {
    assert_eq!(unavailable(Intent::Food), Some(&NO_FOOD_REPLIES[..]));
    assert_eq!(unavailable(Intent::Reservation), Some(&NO_RESERVATION_REPLIES[..]));
    assert!(unavailable(Intent::Greeting).is_none());
    assert!(unavailable(Intent::Statistics).is_none());
}

#[test]
fn every_intent_has_candidates_with_and_without_listings() {
    let listings = vec![listing("Bagels", 4.0, 0.0)];
    let full = ListingStats::compute(&listings);
    let empty = ListingStats::compute(&[]);
    let intents = [
        Intent::Greeting,
        Intent::Food,
        Intent::Reservation,
        Intent::Profile,
        Intent::Points,
        Intent::Help,
        Intent::Recommendation,
        Intent::Thanks,
        Intent::OffTopic,
        Intent::Frustration,
        Intent::Urgency,
        Intent::Statistics,
        Intent::AboutApp,
        Intent::Fallback,
    ];
    for intent in intents {
        assert!(!candidates(intent, &full).is_empty(), "{intent:?}");
        assert!(!follow_ups(intent, &full).is_empty(), "{intent:?}");
        if !matches!(intent, Intent::Food | Intent::Reservation) {
            assert!(!candidates(intent, &empty).is_empty(), "{intent:?}");
        }
    }
}

#[test]
fn reservation_candidates_list_five_numbered_steps() {
    for text in candidates(Intent::Reservation, &ListingStats::compute(&[])) {
        for (i, step) in RESERVATION_STEPS.iter().enumerate() {
            assert!(text.contains(&format!("{}. {step}", i + 1)));
        }
    }
}

#[test]
fn greeting_reports_total_and_free_count() {
    let listings = vec![listing("A", 4.0, 0.0), listing("B", 4.5, 2.0), listing("C", 3.0, 1.0)];
    for text in candidates(Intent::Greeting, &ListingStats::compute(&listings)) {
        assert!(text.contains("3 items"), "{text}");
        assert!(text.contains("1 free item"), "{text}");
        assert!(!text.contains("free items"), "{text}");
    }
}

#[test]
fn statistics_summarize_numbers() {
    let listings = vec![listing("A", 4.0, 0.0), listing("B", 5.0, 2.0), listing("C", 3.0, 1.0)];
    let texts = candidates(Intent::Statistics, &ListingStats::compute(&listings));
    for text in texts {
        assert!(text.contains("Listings: 3"));
        assert!(text.contains("Free: 1 (33%)"));
        assert!(text.contains("Average rating: 4.0★"));
        assert!(text.contains("Top rated: **B**"));
    }
}

#[test]
fn empty_statistics_mention_no_numbers() {
    let texts = candidates(Intent::Statistics, &ListingStats::compute(&[]));
    assert!(texts.iter().all(|t| !t.contains('%')));
}

#[test]
fn recommendation_points_at_top_rated() {
    let listings = vec![listing("A", 4.0, 1.0), listing("B", 4.9, 2.0)];
    let texts = candidates(Intent::Recommendation, &ListingStats::compute(&listings));
    assert!(texts[0].contains("**B**"));
}

#[test]
fn generic_follow_up_prefixes_candidate() {
    let stats = ListingStats::compute(&[]);
    let texts = follow_ups(Intent::Points, &stats);
    assert!(texts.iter().all(|t| t.starts_with("As I mentioned: ")));
}

#[test]
fn plural_forms() {
    assert_eq!(plural(1, "item", "items"), "1 item");
    assert_eq!(plural(0, "item", "items"), "0 items");
    assert_eq!(plural(4, "category", "categories"), "4 categories");
}

#[test]
fn join_names_uses_and_before_last() {
    assert_eq!(join_names(&[]), "none");
    assert_eq!(join_names(&["Bakery"]), "Bakery");
    assert_eq!(join_names(&["Bakery", "Meals", "Produce"]), "Bakery, Meals and Produce");
}
