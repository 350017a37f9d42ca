//! Canned reply text for each intent.
//!
//! Replies are Markdown; the chat dialog renders assistant messages through
//! `pulldown-cmark`. Each intent offers several phrasings and the responder
//! decides which one to use.

#[cfg(test)]
#[path = "replies_test.rs"]
mod replies_test;

use super::intent::Intent;
use super::stats::ListingStats;
use crate::types::Listing;

/// Food questions while nothing is listed.
pub const NO_FOOD_REPLIES: [&str; 3] = [
    "There's no food listed right now. Restaurants post their surplus throughout the day, so check back soon!",
    "Nothing is available at the moment. New listings usually appear around closing time.",
    "The shelves are empty right now. Try again a little later, partners add food all day long.",
];

/// Reservation questions while nothing is listed.
pub const NO_RESERVATION_REPLIES: [&str; 3] = [
    "There's nothing to reserve right now. As soon as a restaurant lists surplus food you'll be able to claim it.",
    "No items are open for reservation at the moment. Check back in a bit!",
    "I can't reserve anything for you yet because nothing is listed. New items show up throughout the day.",
];

const NO_RECOMMENDATION_REPLIES: [&str; 2] = [
    "I'd love to recommend something, but nothing is listed right now.",
    "No recommendations yet: there are no listings at the moment. Check back soon!",
];

const NO_STATS_REPLIES: [&str; 2] = [
    "There are no listings right now, so there are no numbers to show yet.",
    "Nothing is listed at the moment. Stats will appear as soon as restaurants post food.",
];

/// The numbered guide shown for reservation questions.
pub const RESERVATION_STEPS: [&str; 5] = [
    "Browse the listings on the **Browse food** page.",
    "Open an item to see its price, rating, and pickup time.",
    "Log in or sign up so the reservation is saved to your name.",
    "Press **Reserve** and confirm the pickup window.",
    "Pick the food up from the restaurant before the deadline.",
];

/// Fixed "nothing listed" replies for intents that cannot be answered
/// without listings. Checked before any statistic is computed.
pub fn unavailable(intent: Intent) -> Option<&'static [&'static str]> {
    match intent {
        Intent::Food => Some(&NO_FOOD_REPLIES),
        Intent::Reservation => Some(&NO_RESERVATION_REPLIES),
        _ => None,
    }
}

/// Phrasings for `intent` given the current listing numbers.
pub fn candidates(intent: Intent, stats: &ListingStats<'_>) -> Vec<String> {
    match intent {
        Intent::Greeting => greeting(stats),
        Intent::Food => food(stats),
        Intent::Reservation => reservation(),
        Intent::Profile => owned(&[
            "Your username and role are shown in the top bar once you're logged in. Use **Log out** there to switch accounts.",
            "Profile details live in the header: your name, your role, and the log out button.",
        ]),
        Intent::Points => owned(&[
            "You earn kindness points for every meal you rescue. Partners climb the leaderboard the same way!",
            "Points add up with each pickup. Check the **Partners** page to see who's leading.",
        ]),
        Intent::Help => owned(&[
            "I can tell you **what food is available**, explain **how to reserve**, share **stats**, or **recommend** something. Just ask!",
            "Try asking things like \"what's available?\", \"how do I reserve?\", or \"recommend something\".",
        ]),
        Intent::Recommendation => recommendation(stats),
        Intent::Thanks => owned(&[
            "You're welcome! Every rescued meal counts. 💚",
            "Happy to help! Enjoy your food.",
            "Anytime! Thanks for fighting food waste.",
        ]),
        Intent::OffTopic => owned(&[
            "I'm only good at food, I'm afraid! Ask me what's available or how to reserve.",
            "That's outside my kitchen. I can help with listings, reservations, and stats though.",
        ]),
        Intent::Frustration => owned(&[
            "Sorry this is frustrating. Tell me what you're looking for and I'll keep it simple.",
            "I hear you, let's sort it out. Are you trying to find food or reserve something?",
        ]),
        Intent::Urgency => urgency(stats),
        Intent::Statistics => statistics(stats),
        Intent::AboutApp => owned(&[
            "KindBite connects restaurants that have surplus food with people nearby who can use it, at a discount or for free.",
            "I'm the KindBite assistant. KindBite helps restaurants share leftover food instead of throwing it away.",
        ]),
        Intent::Fallback => owned(&[
            "I'm not sure I understood. You can ask about available food, reservations, or stats.",
            "Hmm, I didn't catch that. Try \"what's available?\" or \"help\".",
        ]),
    }
}

/// Phrasings used when the user repeats the question they just asked.
pub fn follow_ups(intent: Intent, stats: &ListingStats<'_>) -> Vec<String> {
    match intent {
        Intent::Greeting => owned(&["Hello again! What can I find for you?"]),
        Intent::Food => vec![format!(
            "Still browsing? The categories right now are {}. The **Browse food** page lets you filter by category.",
            join_names(&stats.categories)
        )],
        Intent::Reservation => owned(&[
            "Same steps as before: find an item, log in, press **Reserve**, then pick it up before the deadline.",
        ]),
        Intent::Help => owned(&[
            "Still stuck? Start with \"what's available?\" and I'll walk you through the rest.",
        ]),
        Intent::Thanks => owned(&["You're very welcome, again! 😊"]),
        Intent::Frustration => owned(&[
            "Sorry it's still not working out. The **Browse food** page shows every listing without needing me.",
        ]),
        other => candidates(other, stats)
            .into_iter()
            .map(|text| format!("As I mentioned: {text}"))
            .collect(),
    }
}

fn greeting(stats: &ListingStats<'_>) -> Vec<String> {
    if stats.is_empty() {
        return owned(&[
            "Hi there! 👋 Nothing is listed right now, but restaurants post surplus food throughout the day.",
            "Hello! No food is listed at the moment. Ask me anything about KindBite while you wait.",
        ]);
    }
    let items = plural(stats.total, "item", "items");
    let free = plural(stats.free_count, "free item", "free items");
    vec![
        format!("Hi there! 👋 Right now there are {items} listed, including {free}. What are you in the mood for?"),
        format!("Hello! We have {items} available today and {free}. Ask me what's good!"),
    ]
}

fn food(stats: &ListingStats<'_>) -> Vec<String> {
    let mut out = vec![format!(
        "There are {} from {} right now, across {}: {}.",
        plural(stats.total, "item", "items"),
        plural(stats.restaurants.len(), "restaurant", "restaurants"),
        plural(stats.categories.len(), "category", "categories"),
        join_names(&stats.categories),
    )];
    if let Some(top) = stats.top_rated() {
        out.push(format!(
            "Hungry? The top-rated item right now is {}. {}",
            describe(top),
            free_sentence(stats)
        ));
    }
    out
}

fn reservation() -> Vec<String> {
    let steps = RESERVATION_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    vec![
        format!("Reserving is easy:\n\n{steps}"),
        format!("Here's how to claim food:\n\n{steps}"),
    ]
}

fn recommendation(stats: &ListingStats<'_>) -> Vec<String> {
    let Some(top) = stats.top_rated() else {
        return owned(&NO_RECOMMENDATION_REPLIES);
    };
    let mut out = vec![format!("I'd go for {}. It's the best-rated item right now.", describe(top))];
    if let Some(free) = stats.free_items.first() {
        out.push(format!("On a budget? {} is free right now.", describe(free)));
    }
    let picks = stats
        .ranked
        .iter()
        .take(3)
        .map(|listing| format!("- {}", describe(listing)))
        .collect::<Vec<_>>()
        .join("\n");
    out.push(format!("Top picks today:\n\n{picks}"));
    out
}

fn urgency(stats: &ListingStats<'_>) -> Vec<String> {
    let quickest = stats.free_items.first().copied().or_else(|| stats.top_rated());
    match quickest {
        Some(listing) => vec![format!(
            "Let's be quick: {} is available now. Log in and press **Reserve** to hold it.",
            describe(listing)
        )],
        None => owned(&[
            "I'm sorry, nothing is listed right now. Local food banks may be able to help straight away.",
        ]),
    }
}

fn statistics(stats: &ListingStats<'_>) -> Vec<String> {
    let Some(top) = stats.top_rated() else {
        return owned(&NO_STATS_REPLIES);
    };
    let summary = format!(
        "- Listings: {}\n- Free: {} ({}%)\n- Average rating: {:.1}★\n- Top rated: {}\n- Categories: {}\n- Restaurants: {}",
        stats.total,
        stats.free_count,
        stats.free_percent(),
        stats.average_rating,
        describe(top),
        stats.categories.len(),
        stats.restaurants.len(),
    );
    vec![
        format!("Here are today's numbers:\n\n{summary}"),
        format!("📊 Quick stats:\n\n{summary}"),
    ]
}

fn describe(listing: &Listing) -> String {
    format!(
        "**{}** from {} ({:.1}★, {})",
        listing.name,
        listing.restaurant,
        listing.rating,
        listing.price_label()
    )
}

fn free_sentence(stats: &ListingStats<'_>) -> String {
    match stats.free_count {
        0 => "Nothing is free at the moment, but everything is discounted.".to_owned(),
        n => format!("{} completely free.", plural(n, "item is", "items are")),
    }
}

/// `"1 item"` / `"3 items"`.
pub fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 { format!("1 {one}") } else { format!("{n} {many}") }
}

fn join_names(names: &[&str]) -> String {
    match names {
        [] => "none".to_owned(),
        [only] => (*only).to_owned(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}

fn owned(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| (*t).to_owned()).collect()
}
