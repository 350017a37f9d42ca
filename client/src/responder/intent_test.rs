use super::*;

// =============================================================
// tokenize
// =============================================================

#[test]
fn tokenize_lowercases_and_strips_punctuation() {
    assert_eq!(tokenize("  Hi, KindBite!! "), vec!["hi", "kindbite"]);
}

#[test]
fn tokenize_keeps_inner_apostrophes() {
    assert_eq!(tokenize("What\u{2019}s good?"), vec!["what's", "good"]);
    assert_eq!(tokenize("'quoted'"), vec!["quoted"]);
}

#[test]
fn tokenize_empty_input() {
    assert!(tokenize("   ").is_empty());
    assert!(tokenize("?!").is_empty());
}

// =============================================================
// classify: one representative per rule
// =============================================================

#[test]
fn classify_each_intent() {
    let cases = [
        ("hi", Intent::Greeting),
        ("Good morning!", Intent::Greeting),
        ("I'm hungry", Intent::Food),
        ("reserve", Intent::Reservation),
        ("can I make a reservation?", Intent::Reservation),
        ("where is my profile", Intent::Profile),
        ("how many points do I have", Intent::Points),
        ("help", Intent::Help),
        ("how do I use this?", Intent::Help),
        ("recommend something", Intent::Recommendation),
        ("thanks!", Intent::Thanks),
        ("what's the weather like", Intent::OffTopic),
        ("this is useless", Intent::Frustration),
        ("it doesn't work", Intent::Frustration),
        ("urgent please", Intent::Urgency),
        ("show me the stats", Intent::Statistics),
        ("how many listings are there", Intent::Statistics),
        ("what is kindbite", Intent::AboutApp),
        ("who are you", Intent::AboutApp),
        ("qwerty", Intent::Fallback),
        ("", Intent::Fallback),
    ];
    for (input, expected) in cases {
        assert_eq!(classify(input), expected, "input: {input:?}");
    }
}

// =============================================================
// classify: priority and word boundaries
// =============================================================

#[test]
fn classify_first_rule_wins() {
    // Greeting outranks food.
    assert_eq!(classify("hey, any food left?"), Intent::Greeting);
    // Food outranks reservation.
    assert_eq!(classify("reserve some food"), Intent::Food);
    // Reservation outranks help.
    assert_eq!(classify("how do I reserve?"), Intent::Reservation);
    // Points outranks statistics.
    assert_eq!(classify("how many points"), Intent::Points);
}

#[test]
fn classify_short_words_need_whole_word_match() {
    assert_eq!(classify("this"), Intent::Fallback);
    assert_eq!(classify("which one"), Intent::Fallback);
    assert_eq!(classify("great"), Intent::Fallback);
}

#[test]
fn classify_phrases_respect_word_boundaries() {
    assert_eq!(classify("how tomorrow"), Intent::Fallback);
    assert_eq!(classify("how to start"), Intent::Help);
}

#[test]
fn needs_listings_covers_data_backed_intents() {
    assert!(Intent::Food.needs_listings());
    assert!(Intent::Reservation.needs_listings());
    assert!(Intent::Statistics.needs_listings());
    assert!(!Intent::Greeting.needs_listings());
    assert!(!Intent::Thanks.needs_listings());
}

#[test]
fn classify_matches_inflected_and_compound_forms() {
    let cases = [
        ("anything for lunchtime?", Intent::Food),
        ("snacking", Intent::Food),
        ("foodbank?", Intent::Food),
        ("what's been eaten", Intent::Food),
        ("I booked it", Intent::Reservation),
        ("claimed it", Intent::Reservation),
        ("any pickups left", Intent::Reservation),
        ("thankyou", Intent::Thanks),
        ("so annoyed", Intent::Frustration),
        ("averages please", Intent::Statistics),
    ];
    for (input, expected) in cases {
        assert_eq!(classify(input), expected, "input: {input:?}");
    }
}
