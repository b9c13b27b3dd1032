//! Chat panel state: transcript, send guard, and animated replies.

use log::{info, warn};

use crate::client::fallback::fallback_reply;
use crate::client::transport::{ChatTransport, TransportError};
use crate::client::typewriter::{Reveal, REPLY_STEP};

pub const GREETING: &str = "hey! nice to meet you. i'm an ai/ml product manager. i speak fluent python and human, and i debug both!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub author: Author,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Sending,
    Rendering,
    FallbackRendering,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("message is empty")]
    Empty,
    #[error("a reply is still in progress")]
    Busy,
}

#[derive(Debug)]
pub struct ChatWidget {
    state: WidgetState,
    transcript: Vec<Entry>,
    reveal: Option<Reveal>,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self {
            state: WidgetState::Idle,
            transcript: vec![Entry {
                author: Author::Bot,
                text: GREETING.to_string(),
            }],
            reveal: None,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn transcript(&self) -> &[Entry] {
        &self.transcript
    }

    pub fn typing_indicator_visible(&self) -> bool {
        self.state == WidgetState::Sending
    }

    /// Records the user's message and moves to `Sending`.
    ///
    /// Returns the trimmed text that should go over the wire.
    pub fn submit(&mut self, input: &str) -> Result<String, WidgetError> {
        if self.state != WidgetState::Idle {
            return Err(WidgetError::Busy);
        }
        let message = input.trim();
        if message.is_empty() {
            return Err(WidgetError::Empty);
        }
        self.transcript.push(Entry {
            author: Author::User,
            text: message.to_string(),
        });
        self.state = WidgetState::Sending;
        Ok(message.to_string())
    }

    /// Starts revealing the server reply, or a canned one if the call failed.
    pub fn receive(&mut self, sent: &str, result: Result<String, TransportError>) {
        if self.state != WidgetState::Sending {
            warn!("Ignoring chat reply received while {:?}", self.state);
            return;
        }
        let (text, state) = match result {
            Ok(reply) => (reply, WidgetState::Rendering),
            Err(e) => {
                warn!("Chat error: {}", e);
                (fallback_reply(sent), WidgetState::FallbackRendering)
            }
        };
        self.transcript.push(Entry {
            author: Author::Bot,
            text: String::new(),
        });
        let reveal = Reveal::new(&text);
        if reveal.is_done() {
            self.state = WidgetState::Idle;
            return;
        }
        self.reveal = Some(reveal);
        self.state = state;
    }

    /// Reveals one more character of the pending reply.
    ///
    /// Returns true while more characters remain.
    pub fn step(&mut self) -> bool {
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        reveal.step();
        if let Some(last) = self.transcript.last_mut() {
            last.text = reveal.visible();
        }
        if reveal.is_done() {
            self.reveal = None;
            self.state = WidgetState::Idle;
            return false;
        }
        true
    }

    /// Submits `input` and waits for the reply to come back.
    pub async fn send<T: ChatTransport + ?Sized>(&mut self, transport: &T, input: &str) -> Result<(), WidgetError> {
        let message = self.submit(input)?;
        info!("Sending chat message ({} characters)", message.chars().count());
        let result = transport.send(&message).await;
        self.receive(&message, result);
        Ok(())
    }

    /// Plays the pending reveal at the reply typing speed.
    pub async fn play(&mut self) {
        while self.step() {
            tokio::time::sleep(REPLY_STEP).await;
        }
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fallback::OFFLINE_SUFFIX;
    use async_trait::async_trait;

    struct Canned(Option<&'static str>);

    #[async_trait]
    impl ChatTransport for Canned {
        async fn send(&self, _message: &str) -> Result<String, TransportError> {
            match self.0 {
                Some(reply) => Ok(reply.to_string()),
                None => Err(TransportError::Status(503)),
            }
        }
    }

    #[test]
    fn starts_idle_with_greeting() {
        let widget = ChatWidget::new();
        assert_eq!(widget.state(), WidgetState::Idle);
        assert_eq!(widget.transcript()[0].text, GREETING);
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut widget = ChatWidget::new();
        assert_eq!(widget.submit("   "), Err(WidgetError::Empty));
        assert_eq!(widget.transcript().len(), 1);
    }

    #[test]
    fn submit_moves_to_sending_and_shows_indicator() {
        let mut widget = ChatWidget::new();
        assert_eq!(widget.submit("  hi  ").unwrap(), "hi");
        assert_eq!(widget.state(), WidgetState::Sending);
        assert!(widget.typing_indicator_visible());
        assert_eq!(widget.submit("again"), Err(WidgetError::Busy));
    }

    #[test]
    fn sends_are_rejected_while_rendering() {
        let mut widget = ChatWidget::new();
        let sent = widget.submit("hi").unwrap();
        widget.receive(&sent, Ok("hello!".to_string()));
        assert_eq!(widget.state(), WidgetState::Rendering);
        assert!(!widget.typing_indicator_visible());
        assert_eq!(widget.submit("next"), Err(WidgetError::Busy));
    }

    #[test]
    fn reveal_runs_to_completion_then_idles() {
        let mut widget = ChatWidget::new();
        let sent = widget.submit("hi").unwrap();
        widget.receive(&sent, Ok("yo!".to_string()));
        assert!(widget.step());
        assert_eq!(widget.transcript().last().unwrap().text, "y");
        assert!(widget.step());
        assert!(!widget.step());
        assert_eq!(widget.transcript().last().unwrap().text, "yo!");
        assert_eq!(widget.state(), WidgetState::Idle);
        assert!(widget.submit("next").is_ok());
    }

    #[test]
    fn empty_reply_returns_straight_to_idle() {
        let mut widget = ChatWidget::new();
        let sent = widget.submit("hi").unwrap();
        widget.receive(&sent, Ok(String::new()));
        assert_eq!(widget.state(), WidgetState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_send_renders_keyword_fallback() {
        let mut widget = ChatWidget::new();
        widget.send(&Canned(None), "what's your tech stack?").await.unwrap();
        assert_eq!(widget.state(), WidgetState::FallbackRendering);
        widget.play().await;
        assert_eq!(widget.state(), WidgetState::Idle);
        let reply = &widget.transcript().last().unwrap().text;
        assert!(reply.starts_with("I speak fluent Python"));
        assert!(reply.ends_with(OFFLINE_SUFFIX));
    }

    #[tokio::test(start_paused = true)]
    async fn successful_send_renders_server_reply() {
        let mut widget = ChatWidget::new();
        widget.send(&Canned(Some("I build AI tools.")), "hi").await.unwrap();
        widget.play().await;
        let transcript = widget.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1], Entry { author: Author::User, text: "hi".to_string() });
        assert_eq!(transcript[2], Entry { author: Author::Bot, text: "I build AI tools.".to_string() });
    }
}
