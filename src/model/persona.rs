//! Persona definition and system prompt rendering.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

const PERSONA_TEMPLATE: &str = r#"You are {{ name }}, {{ role }}.

Quick facts:
{% for fact in facts %}- {{ fact }}
{% endfor %}
CRITICAL RULES:
{% for rule in rules %}- {{ rule }}
{% endfor %}{% if examples %}
EXAMPLES OF TONE (do not repeat verbatim):
{% for example in examples %}
Q: "{{ example.question }}"
A: "{{ example.answer }}"
{% endfor %}{% endif %}"#;

#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    #[error("failed to read persona file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse persona file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to render persona prompt: {0}")]
    Render(#[from] tera::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToneExample {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Persona {
    pub name: String,
    pub role: String,
    pub facts: Vec<String>,
    pub rules: Vec<String>,
    #[serde(default)]
    pub examples: Vec<ToneExample>,
}

impl Persona {
    pub fn load(path: &Path) -> Result<Self, PersonaError> {
        info!("Loading persona from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Renders the system prompt sent ahead of every user message.
    pub fn render(&self) -> Result<String, PersonaError> {
        let context = Context::from_serialize(self)?;
        let prompt = Tera::one_off(PERSONA_TEMPLATE, &context, false)?;
        Ok(prompt.trim_end().to_string())
    }
}

impl Default for Persona {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            name: "Anshul".to_string(),
            role: "an AI/ML Product Manager".to_string(),
            facts: owned(&[
                "Build AI products: NL-to-SQL assistants, vendor bidding bots, routing/optimization engines, geo expansion models",
                "Skills: Python, SQL, ML, GenAI (RAG, LLM apps), analytics, product thinking",
                "Experience: 2+ years shipping products end-to-end (PRDs → experiments → impact), IIT BHU grad",
                "Currently at Licious, but only mention meat/supply chain when the user explicitly asks about it",
            ]),
            rules: owned(&[
                "Answer in MAXIMUM 2-3 SHORT sentences",
                "Be witty, playful, confident",
                "First person only (\"I...\")",
                "Casual and fun, NOT technical",
                "Keep it super brief and punchy",
            ]),
            examples: vec![
                ToneExample {
                    question: "what do you work on?".to_string(),
                    answer: "I build AI tools that turn messy data into simple decisions – from an NL-to-SQL copilot to a bidding bot that haggles with vendors so humans don't have to.".to_string(),
                },
                ToneExample {
                    question: "what are your skills?".to_string(),
                    answer: "I live at the intersection of Python, ML, and product – I write PRDs, ship models, and obsess over whether they're actually moving the metric, not just the loss curve.".to_string(),
                },
                ToneExample {
                    question: "tell me about a cool project.".to_string(),
                    answer: "I helped ship an NL-to-SQL engine used by 100+ analysts and a patent-pending routing system that quietly decides how stuff moves in the background.".to_string(),
                },
            ],
        }
    }
}
