//! Reply composition for chat messages.
//!
//! Detects a known symptom in free text and fills fixed sentence templates
//! from the first matching record, without any language model.

use rand::Rng;
use serde::Serialize;

use medimind_core::{Dataset, MatchResult};

/// Reply used when no known symptom appears in the message.
pub const FALLBACK_REPLY: &str = "I couldn't identify a specific symptom from that description. \
     Could you try using a keyword like 'fever' or 'headache'?";

/// Closing sentence of every matched reply.
pub const DISCLAIMER: &str = "Please consult a professional for a final diagnosis.";

// =============================================================================
// Detection
// =============================================================================

/// First vocabulary token that occurs inside `message`, ignoring case.
///
/// The vocabulary is scanned in its stored (sorted) order. Note the
/// direction: the token must be a substring of the message, which is the
/// reverse of the search widget's query-in-field test.
pub fn detect_symptom<'a>(message: &str, vocabulary: &'a [String]) -> Option<&'a str> {
    let message_lower = message.to_lowercase();
    vocabulary
        .iter()
        .find(|token| message_lower.contains(token.to_lowercase().as_str()))
        .map(String::as_str)
}

// =============================================================================
// ComposedReply
// =============================================================================

/// The text reply for one message and the match it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedReply {
    pub reply: String,
    pub detected_symptom: Option<String>,
    pub consumed_match: Option<MatchResult>,
}

impl ComposedReply {
    fn fallback(detected_symptom: Option<String>) -> Self {
        Self {
            reply: FALLBACK_REPLY.to_string(),
            detected_symptom,
            consumed_match: None,
        }
    }
}

// =============================================================================
// ResponseComposer
// =============================================================================

/// Builds chat replies from the dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose the reply for `symptom`, the result of [`detect_symptom`],
    /// drawing phrasing choices from `rng`.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        symptom: Option<&str>,
        dataset: &Dataset,
        rng: &mut R,
    ) -> ComposedReply {
        let Some(symptom) = symptom else {
            tracing::debug!("No symptom detected in message");
            return ComposedReply::fallback(None);
        };

        // Every token comes from some record, so this only misses if the
        // vocabulary and records disagree.
        let Some(matched) = dataset.find_first(symptom) else {
            tracing::warn!(symptom, "Detected symptom has no matching record");
            return ComposedReply::fallback(Some(symptom.to_string()));
        };

        tracing::debug!(symptom, disease = %matched.disease, "Composing reply");
        ComposedReply {
            reply: self.matched_reply(symptom, &matched, rng),
            detected_symptom: Some(symptom.to_string()),
            consumed_match: Some(matched),
        }
    }

    fn matched_reply<R: Rng + ?Sized>(&self, symptom: &str, m: &MatchResult, rng: &mut R) -> String {
        let opening = pick(
            rng,
            format!("I'm sorry you're dealing with {}.", symptom),
            format!("It sounds like {} is the issue.", symptom),
        );
        let finding = pick(
            rng,
            format!("This is often associated with **{}**.", m.disease),
            format!("My data suggests this points toward **{}**.", m.disease),
        );
        let medication = pick(
            rng,
            format!("Common treatments include {}.", m.medications),
            format!("Standard medications for this are {}.", m.medications),
        );
        let precaution = pick(
            rng,
            format!("For better recovery, try to: {}.", m.precautions),
            format!("You should follow these precautions: {}.", m.precautions),
        );
        let specialist = pick(
            rng,
            format!("I recommend consulting a **{}**.", m.doctor_specialist),
            format!(
                "It would be best to see a **{}** for professional advice.",
                m.doctor_specialist
            ),
        );

        [opening, finding, medication, precaution, specialist, DISCLAIMER.to_string()].join(" ")
    }
}

/// Uniform choice between two phrasings.
fn pick<R: Rng + ?Sized>(rng: &mut R, first: String, second: String) -> String {
    if rng.random_bool(0.5) {
        first
    } else {
        second
    }
}

// =============================================================================
// Tests
// =============================================================================
