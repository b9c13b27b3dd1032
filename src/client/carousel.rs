use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub const ROTATION_PERIOD: Duration = Duration::from_secs(8);

pub const DEFAULT_SUGGESTIONS: [&str; 5] = [
    "What are your skills?",
    "Where do you work?",
    "What are you working on currently?",
    "What's your dream project?",
    "What do you do for fun?",
];

/// Rotating list of suggested prompts shown under the chat log.
#[derive(Debug, Clone)]
pub struct SuggestionCarousel {
    prompts: Vec<String>,
    index: usize,
}

impl SuggestionCarousel {
    /// Returns `None` for an empty list.
    pub fn new(prompts: Vec<String>) -> Option<Self> {
        if prompts.is_empty() {
            return None;
        }
        Some(Self { prompts, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.prompts[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Advances to the next prompt, wrapping around at the end.
    pub fn tick(&mut self) -> &str {
        self.index = (self.index + 1) % self.prompts.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// The prompt to submit when the visible suggestion is clicked.
    pub fn select(&self) -> String {
        self.current().to_string()
    }

    /// Timer that fires once per rotation period, starting one period from now.
    pub fn ticker() -> Interval {
        let mut ticker = interval_at(Instant::now() + ROTATION_PERIOD, ROTATION_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }
}

impl Default for SuggestionCarousel {
    fn default() -> Self {
        Self {
            prompts: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            index: 0,
        }
    }
}
