//! Character-by-character text reveal.

use std::time::Duration;

pub const REPLY_STEP: Duration = Duration::from_millis(20);
pub const HEADER_STEP: Duration = Duration::from_millis(100);
pub const HEADER_HOLD: Duration = Duration::from_millis(2500);
pub const HEADER_TEXT: &str = "hi! i'm anshul";

/// Reveals `text` one character per step.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    chars: Vec<char>,
    shown: usize,
}

impl Reveal {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Shows one more character. Returns false once nothing is left.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Looping header animation: type the text, hold it, clear, repeat.
#[derive(Debug, Clone)]
pub struct HeaderTypewriter {
    reveal: Reveal,
}

impl HeaderTypewriter {
    pub fn new(text: &str) -> Self {
        Self {
            reveal: Reveal::new(text),
        }
    }

    /// Advances the animation and returns the text to display together with
    /// the delay before the next step.
    pub fn step(&mut self) -> (String, Duration) {
        if self.reveal.step() {
            let delay = if self.reveal.is_done() { HEADER_HOLD } else { HEADER_STEP };
            return (self.reveal.visible(), delay);
        }
        self.reveal = Reveal::new(&self.reveal.full_text());
        (String::new(), HEADER_STEP)
    }
}

impl Default for HeaderTypewriter {
    fn default() -> Self {
        Self::new(HEADER_TEXT)
    }
}
