//! Keyword classification of chat input.
//!
//! Rules are tested top to bottom and the first hit wins, so a message that
//! mentions both food and a reservation is answered as a food question.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

/// What the user appears to be asking about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Food,
    Reservation,
    Profile,
    Points,
    Help,
    Recommendation,
    Thanks,
    OffTopic,
    Frustration,
    Urgency,
    Statistics,
    AboutApp,
    /// Nothing matched.
    Fallback,
}

impl Intent {
    /// Whether answering needs listing data.
    pub fn needs_listings(self) -> bool {
        matches!(
            self,
            Intent::Food | Intent::Reservation | Intent::Recommendation | Intent::Urgency | Intent::Statistics
        )
    }
}

/// How one keyword is matched against the tokenized input.
#[derive(Clone, Copy, Debug)]
enum Keyword {
    /// A whole word. Only for short tokens like `hi` that would fire
    /// inside unrelated words ("this").
    Word(&'static str),
    /// A word prefix: `reserv` covers reserve, reserved, reservation, and
    /// `lunch` covers lunchtime.
    Stem(&'static str),
    /// Consecutive words.
    Phrase(&'static str),
}

use Keyword::{Phrase, Stem, Word};

struct Rule {
    intent: Intent,
    keywords: &'static [Keyword],
}

const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Greeting,
        keywords: &[
            Word("hi"),
            Word("hello"),
            Word("hey"),
            Word("hiya"),
            Word("howdy"),
            Word("hola"),
            Word("yo"),
            Word("greetings"),
            Phrase("good morning"),
            Phrase("good afternoon"),
            Phrase("good evening"),
        ],
    },
    Rule {
        intent: Intent::Food,
        keywords: &[
            Stem("food"),
            Stem("eat"),
            Stem("hungr"),
            Stem("meal"),
            Stem("menu"),
            Stem("dish"),
            Stem("breakfast"),
            Stem("lunch"),
            Stem("dinner"),
            Stem("snack"),
            Stem("avail"),
        ],
    },
    Rule {
        intent: Intent::Reservation,
        keywords: &[
            Stem("reserv"),
            Stem("book"),
            Stem("claim"),
            Stem("pickup"),
            Phrase("pick up"),
            Phrase("set aside"),
        ],
    },
    Rule {
        intent: Intent::Profile,
        keywords: &[
            Stem("profile"),
            Stem("account"),
            Stem("username"),
            Stem("setting"),
            Word("logout"),
            Phrase("log out"),
            Phrase("sign out"),
            Phrase("my details"),
        ],
    },
    Rule {
        intent: Intent::Points,
        keywords: &[
            Word("point"),
            Word("points"),
            Stem("reward"),
            Word("karma"),
            Stem("badge"),
            Stem("leaderboard"),
        ],
    },
    Rule {
        intent: Intent::Help,
        keywords: &[
            Word("help"),
            Word("support"),
            Word("guide"),
            Word("tutorial"),
            Phrase("how do i"),
            Phrase("how does"),
            Phrase("how to"),
        ],
    },
    Rule {
        intent: Intent::Recommendation,
        keywords: &[
            Stem("recommend"),
            Stem("suggest"),
            Word("best"),
            Word("popular"),
            Word("favorite"),
            Word("favourite"),
            Phrase("what's good"),
            Phrase("should i"),
        ],
    },
    Rule {
        intent: Intent::Thanks,
        keywords: &[
            Stem("thank"),
            Word("thx"),
            Word("ty"),
            Word("cheers"),
            Phrase("appreciate it"),
        ],
    },
    Rule {
        intent: Intent::OffTopic,
        keywords: &[
            Word("weather"),
            Word("football"),
            Word("soccer"),
            Word("politics"),
            Stem("movie"),
            Word("music"),
            Stem("joke"),
            Word("crypto"),
            Word("stocks"),
            Word("homework"),
        ],
    },
    Rule {
        intent: Intent::Frustration,
        keywords: &[
            Word("useless"),
            Word("stupid"),
            Stem("annoy"),
            Stem("frustrat"),
            Word("terrible"),
            Word("hate"),
            Word("broken"),
            Phrase("doesn't work"),
            Phrase("not working"),
            Phrase("makes no sense"),
        ],
    },
    Rule {
        intent: Intent::Urgency,
        keywords: &[
            Stem("urgen"),
            Word("asap"),
            Word("emergency"),
            Word("immediately"),
            Stem("hurr"),
            Stem("quick"),
            Stem("starv"),
            Phrase("right now"),
            Phrase("as soon as possible"),
        ],
    },
    Rule {
        intent: Intent::Statistics,
        keywords: &[
            Word("stats"),
            Stem("statistic"),
            Stem("averag"),
            Stem("total"),
            Word("count"),
            Word("numbers"),
            Phrase("how many"),
        ],
    },
    Rule {
        intent: Intent::AboutApp,
        keywords: &[
            Word("kindbite"),
            Phrase("what is this"),
            Phrase("what's this"),
            Phrase("this app"),
            Phrase("who are you"),
            Phrase("what are you"),
            Phrase("what do you do"),
        ],
    },
];

/// Lower-case, trim, and split into words. Apostrophes stay inside words so
/// `what's` survives; typographic apostrophes are folded to ASCII.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .trim()
        .to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

fn matches(keyword: Keyword, words: &[String], joined: &str) -> bool {
    match keyword {
        Word(w) => words.iter().any(|word| word == w),
        Stem(s) => words.iter().any(|word| word.starts_with(s)),
        Phrase(p) => joined.contains(&format!(" {p} ")),
    }
}

/// Classify raw input. The first rule with any matching keyword wins.
pub fn classify(input: &str) -> Intent {
    let words = tokenize(input);
    if words.is_empty() {
        return Intent::Fallback;
    }
    let joined = format!(" {} ", words.join(" "));

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| matches(*kw, &words, &joined)))
        .map_or(Intent::Fallback, |rule| rule.intent)
}
