//! Canned in-persona replies used when the chat proxy cannot be reached.

pub const OFFLINE_SUFFIX: &str = " (I'm offline right now, so that's my cached answer!)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Skills,
    Work,
    Projects,
    Fun,
    Default,
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

// Evaluated top to bottom; the first rule with a matching keyword wins.
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Skills,
        keywords: &["skill", "stack", "tech"],
    },
    Rule {
        topic: Topic::Work,
        keywords: &["work", "job", "company"],
    },
    Rule {
        topic: Topic::Projects,
        keywords: &["project", "build"],
    },
    Rule {
        topic: Topic::Fun,
        keywords: &["fun", "hobby"],
    },
];

impl Topic {
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
            .map_or(Topic::Default, |rule| rule.topic)
    }

    pub fn reply(self) -> &'static str {
        match self {
            Topic::Skills => "I speak fluent Python, SQL and ML, with a side of product thinking to keep the models honest.",
            Topic::Work => "I'm an AI/ML product manager shipping tools that turn messy data into simple decisions.",
            Topic::Projects => "I've built an NL-to-SQL copilot and a bidding bot that haggles with vendors so humans don't have to.",
            Topic::Fun => "When I'm not debugging models I'm probably debugging my playlist or hunting down good food.",
            Topic::Default => "Great question! I build AI products and love a good chat about data, ML and product.",
        }
    }
}

/// Picks the canned reply for `message` and marks it as offline.
pub fn fallback_reply(message: &str) -> String {
    format!("{}{}", Topic::classify(message).reply(), OFFLINE_SUFFIX)
}
