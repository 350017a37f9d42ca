//! Scripted chat assistant.
//!
//! DESIGN
//! ======
//! One responder serves every chat surface. Surfaces differ only in their
//! [`ResponderProfile`]:
//! - **selection**: pick a phrasing at random, or cycle through them with a
//!   running reply counter
//! - **context**: when the user repeats the intent of their previous message,
//!   answer with a follow-up phrasing instead
//! - **thinking delay**: how long the dialog waits before appending the reply
//!
//! Classification lives in [`intent`], numbers in [`stats`], and text in
//! [`replies`]. The responder itself only wires them together.

pub mod intent;
pub mod replies;
pub mod stats;


use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::chat::{ChatMessage, Sender};
use crate::types::Listing;
use intent::Intent;
use stats::ListingStats;

/// How a phrasing is chosen among an intent's candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Random,
    /// `reply_counter % candidates`.
    RoundRobin,
}

/// Behavior knobs for one chat surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponderProfile {
    pub name: &'static str,
    pub selection: Selection,
    /// Look at the last two log entries for a repeated question.
    pub context_aware: bool,
    /// Wait before appending the reply. `None` replies immediately.
    pub thinking_delay: Option<Duration>,
    /// Disable sending while a reply is pending. Off by default: the input
    /// stays usable and replies are appended in send order.
    pub block_input_while_thinking: bool,
    /// First assistant message when the dialog opens.
    pub welcome: &'static str,
}

impl ResponderProfile {
    /// Random phrasing, instant replies.
    pub const SNAPPY: Self = Self {
        name: "snappy",
        selection: Selection::Random,
        context_aware: false,
        thinking_delay: None,
        block_input_while_thinking: false,
        welcome: "Hi! I'm the KindBite assistant. Ask me what's available today.",
    };

    /// Cycles phrasings in order, instant replies.
    pub const STEADY: Self = Self {
        name: "steady",
        selection: Selection::RoundRobin,
        context_aware: false,
        thinking_delay: None,
        block_input_while_thinking: false,
        welcome: "Hello! I can help you find surplus food and reserve it.",
    };

    /// Cycles phrasings, notices repeated questions, pauses before replying.
    pub const ATTENTIVE: Self = Self {
        name: "attentive",
        selection: Selection::RoundRobin,
        context_aware: true,
        thinking_delay: Some(Duration::from_millis(900)),
        block_input_while_thinking: false,
        welcome: "Hi, I'm KindBite AI 🤖. Ask me about food, reservations, or today's stats!",
    };

    /// Random phrasing with a longer pause, one question at a time.
    pub const RELAXED: Self = Self {
        name: "relaxed",
        selection: Selection::Random,
        context_aware: true,
        thinking_delay: Some(Duration::from_millis(1500)),
        block_input_while_thinking: true,
        welcome: "Hey there! Take your time. What are you hungry for?",
    };

    pub const ALL: [Self; 4] = [Self::SNAPPY, Self::STEADY, Self::ATTENTIVE, Self::RELAXED];
}

impl Default for ResponderProfile {
    fn default() -> Self {
        Self::ATTENTIVE
    }
}

/// One assistant answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
    /// Whether the follow-up phrasing was used.
    pub follow_up: bool,
}

/// Stateful responder: owns the reply counter and the random source.
#[derive(Clone, Debug)]
pub struct Responder {
    profile: ResponderProfile,
    replies_given: u64,
    rng: StdRng,
}

impl Responder {
    pub fn new(profile: ResponderProfile) -> Self {
        Self { profile, replies_given: 0, rng: StdRng::from_os_rng() }
    }

    /// Deterministic random source, for tests and previews.
    pub fn with_seed(profile: ResponderProfile, seed: u64) -> Self {
        Self { profile, replies_given: 0, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn replies_given(&self) -> u64 {
        self.replies_given
    }

    /// Answer `input`.
    ///
    /// `history` is the log as it stood before `input` was sent. Statistics
    /// are recomputed from `listings` on every call.
    pub fn reply(&mut self, input: &str, listings: &[Listing], history: &[ChatMessage]) -> Reply {
        let intent = intent::classify(input);
        let follow_up = self.profile.context_aware && intent != Intent::Fallback && repeats(intent, history);
        log::debug!("chat intent {intent:?} (follow_up={follow_up}, listings={})", listings.len());

        if listings.is_empty() && intent.needs_listings() {
            if let Some(fixed) = replies::unavailable(intent) {
                let text = fixed[self.pick(fixed.len())].to_owned();
                return self.finish(intent, text, false);
            }
        }

        let stats = ListingStats::compute(listings);
        let candidates = if follow_up {
            replies::follow_ups(intent, &stats)
        } else {
            replies::candidates(intent, &stats)
        };
        let index = self.pick(candidates.len());
        let text = candidates.into_iter().nth(index).unwrap_or_default();
        self.finish(intent, text, follow_up)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        match self.profile.selection {
            Selection::Random => self.rng.random_range(0..len),
            Selection::RoundRobin => usize::try_from(self.replies_given % len as u64).unwrap_or(0),
        }
    }

    fn finish(&mut self, intent: Intent, text: String, follow_up: bool) -> Reply {
        self.replies_given += 1;
        Reply { intent, text, follow_up }
    }
}

/// Whether the most recent user message among the last two log entries
/// classifies to `intent`.
fn repeats(intent: Intent, history: &[ChatMessage]) -> bool {
    history
        .iter()
        .rev()
        .take(2)
        .find(|msg| msg.sender == Sender::User)
        .is_some_and(|msg| intent::classify(&msg.text) == intent)
}
