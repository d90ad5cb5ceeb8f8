//! Incremental "typing" reveal of a finished reply.
//!
//! The reply is already complete when the reveal starts. [`RevealFrames`]
//! only yields growing prefixes; the presentation layer decides how fast to
//! show them and when to stop.

/// Glyph appended to every frame except the last.
pub const CURSOR: char = '▌';

/// A lazy, finite sequence of display frames for one reply.
///
/// Frame `i` holds the first `i + 1` words, each followed by a space, then
/// [`CURSOR`]. The final frame is the reply itself. The iterator is consumed
/// as it runs and cannot be restarted.
#[derive(Debug)]
pub struct RevealFrames {
    reply: String,
    /// Byte offset of the end of each word in `reply`.
    word_ends: Vec<usize>,
    word_starts: Vec<usize>,
    next: usize,
    finished: bool,
}

impl RevealFrames {
    pub fn new(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        let mut word_starts = Vec::new();
        let mut word_ends = Vec::new();
        let mut in_word = false;
        for (idx, ch) in reply.char_indices() {
            if ch.is_whitespace() {
                if in_word {
                    word_ends.push(idx);
                    in_word = false;
                }
            } else if !in_word {
                word_starts.push(idx);
                in_word = true;
            }
        }
        if in_word {
            word_ends.push(reply.len());
        }

        Self {
            reply,
            word_ends,
            word_starts,
            next: 0,
            finished: false,
        }
    }

    /// Total number of frames including the final one.
    pub fn frame_count(&self) -> usize {
        self.word_ends.len() + 1
    }

    fn prefix_frame(&self, upto: usize) -> String {
        let mut frame = String::with_capacity(self.word_ends[upto] + upto + 4);
        for i in 0..=upto {
            frame.push_str(&self.reply[self.word_starts[i]..self.word_ends[i]]);
            frame.push(' ');
        }
        frame.push(CURSOR);
        frame
    }
}

impl Iterator for RevealFrames {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        if self.next < self.word_ends.len() {
            let frame = self.prefix_frame(self.next);
            self.next += 1;
            return Some(frame);
        }
        self.finished = true;
        Some(std::mem::take(&mut self.reply))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            self.word_ends.len() - self.next + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RevealFrames {}

impl std::iter::FusedIterator for RevealFrames {}
