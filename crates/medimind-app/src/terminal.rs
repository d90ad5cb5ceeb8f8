//! Terminal presentation host.
//!
//! Prints the vocabulary and search results, and runs the chat loop with
//! the reply revealed word by word at the configured pace.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use medimind_chat::{ChatOrchestrator, Conversation, RevealFrames, CURSOR};
use medimind_core::{analyze_condition, Dataset};
use medimind_ui::{render_outcome, render_transcript, PAGE_ICON, PAGE_TITLE};

const HISTORY_COMMAND: &str = "/history";
const QUIT_COMMAND: &str = "/quit";

pub async fn print_symptoms<W: AsyncWrite + Unpin>(
    dataset: &Dataset,
    out: &mut W,
) -> std::io::Result<()> {
    for symptom in dataset.symptoms() {
        out.write_all(symptom.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    out.flush().await
}

pub async fn print_search<W: AsyncWrite + Unpin>(
    dataset: &Dataset,
    symptom: &str,
    out: &mut W,
) -> std::io::Result<()> {
    let outcome = analyze_condition(symptom, dataset);
    out.write_all(render_outcome(&outcome).as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

/// Write `frames` as they arrive, one tick of `delay` apart.
///
/// Each frame extends the previous one, so only the new suffix is written.
/// The cursor glyph is not drawn.
pub async fn reveal<W: AsyncWrite + Unpin>(
    frames: RevealFrames,
    delay: Duration,
    out: &mut W,
) -> std::io::Result<()> {
    let mut interval = (!delay.is_zero()).then(|| tokio::time::interval(delay));
    let mut shown = String::new();

    for frame in frames {
        if let Some(ref mut interval) = interval {
            interval.tick().await;
        }
        let visible = frame.trim_end_matches(CURSOR);
        if let Some(rest) = visible.strip_prefix(shown.as_str()) {
            out.write_all(rest.as_bytes()).await?;
            shown = visible.to_string();
        }
        out.flush().await?;
    }
    out.write_all(b"\n").await?;
    out.flush().await
}

/// Run the chat loop until EOF or `/quit`.
///
/// The conversation lives for the duration of this call.
pub async fn run_chat<R, W>(
    orchestrator: &ChatOrchestrator,
    delay: Duration,
    input: R,
    out: &mut W,
) -> std::io::Result<Conversation>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut conversation = Conversation::new();
    let mut lines = input.lines();

    let banner = format!(
        "{} {} - 💬 Health Assistant Chatbot\nDescribe how you feel (Ex: I have a persistent cough...). \
         Type {} to review the conversation, {} to leave.\n",
        PAGE_ICON, PAGE_TITLE, HISTORY_COMMAND, QUIT_COMMAND
    );
    out.write_all(banner.as_bytes()).await?;

    loop {
        out.write_all(b"> ").await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();

        match message {
            "" => continue,
            QUIT_COMMAND => break,
            HISTORY_COMMAND => {
                let transcript = render_transcript(conversation.messages());
                out.write_all(transcript.as_bytes()).await?;
                if !transcript.is_empty() {
                    out.write_all(b"\n").await?;
                }
                continue;
            }
            _ => {}
        }

        match orchestrator.handle_turn(&mut conversation, message) {
            Ok(outcome) => reveal(outcome.frames(), delay, out).await?,
            Err(e) => {
                tracing::debug!(error = %e, "Chat turn rejected");
                out.write_all(format!("⚠️ {}\n", e).as_bytes()).await?;
            }
        }
    }

    tracing::debug!(
        session_id = %conversation.id(),
        messages = conversation.len(),
        "Chat session ended"
    );
    Ok(conversation)
}
