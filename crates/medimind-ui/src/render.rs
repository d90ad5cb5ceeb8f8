//! Markdown-flavoured text blocks for results and transcripts.

use medimind_core::{ConversationMessage, MatchResult, Role, SearchOutcome};

/// The block shown for one matched disease.
pub fn render_match(m: &MatchResult) -> String {
    format!(
        "### 🦠 Disease: {}\n💊 **Medications:** {}\n🛡️ **Precautions:** {}\n👨‍⚕️ **Specialist:** {}\n---",
        m.disease, m.medications, m.precautions, m.doctor_specialist
    )
}

/// Status line plus one block per match.
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    let prefix = match outcome {
        SearchOutcome::Found(_) => "",
        SearchOutcome::NotFound => "❌ ",
        SearchOutcome::NoSymptomSelected => "⚠️ ",
    };
    let mut lines = vec![format!("{}{}", prefix, outcome.message())];
    lines.extend(outcome.matches().iter().map(render_match));
    lines.join("\n")
}

/// Every message of a transcript, labelled by role.
pub fn render_transcript(messages: &[ConversationMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let label = match m.role {
                Role::User => "You",
                Role::Assistant => "Assistant",
            };
            format!("{}: {}", label, m.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
