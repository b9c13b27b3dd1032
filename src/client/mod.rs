//! Browser-side behavior of the portfolio page, independent of the DOM.
//!
//! A [`Page`] is built once and owns every interactive piece: the chat
//! widget, the suggestion carousel, the header typewriter and the scene.

pub mod carousel;
pub mod fallback;
pub mod scene;
pub mod transport;
pub mod typewriter;
pub mod widget;

use carousel::SuggestionCarousel;
use scene::{SceneController, Viewport};
use transport::{ChatTransport, HttpTransport};
use typewriter::HeaderTypewriter;
use widget::{ChatWidget, WidgetError};

pub const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:5555/api/chat";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub chat_endpoint: String,
    pub viewport: Viewport,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            viewport: Viewport {
                width: 1280.0,
                height: 720.0,
            },
        }
    }
}

pub struct Page<T: ChatTransport = HttpTransport> {
    pub widget: ChatWidget,
    pub carousel: SuggestionCarousel,
    pub header: HeaderTypewriter,
    pub scene: SceneController,
    transport: T,
}

impl Page<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new(config.chat_endpoint.clone()))
    }
}

impl<T: ChatTransport> Page<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            widget: ChatWidget::new(),
            carousel: SuggestionCarousel::default(),
            header: HeaderTypewriter::default(),
            scene: SceneController::new(config.viewport),
            transport,
        }
    }

    /// Sends typed input and plays the reply.
    pub async fn send(&mut self, input: &str) -> Result<(), WidgetError> {
        self.widget.send(&self.transport, input).await?;
        self.widget.play().await;
        Ok(())
    }

    /// Rotates the carousel once per period, reporting each new prompt.
    ///
    /// Runs until the caller drops the future.
    pub async fn run_carousel(&mut self, mut on_change: impl FnMut(&str)) {
        let mut ticker = SuggestionCarousel::ticker();
        loop {
            ticker.tick().await;
            on_change(self.carousel.tick());
        }
    }

    /// Submits the suggestion currently shown in the carousel.
    pub async fn click_suggestion(&mut self) -> Result<(), WidgetError> {
        let prompt = self.carousel.select();
        self.send(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::carousel::{DEFAULT_SUGGESTIONS, ROTATION_PERIOD};
    use crate::client::fallback::OFFLINE_SUFFIX;
    use crate::client::transport::TransportError;
    use crate::client::widget::{Author, WidgetState};
    use async_trait::async_trait;
    use std::time::Duration;

    struct Offline;

    #[async_trait]
    impl ChatTransport for Offline {
        async fn send(&self, _message: &str) -> Result<String, TransportError> {
            Err(TransportError::Status(500))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn suggestion_click_submits_current_prompt() {
        let mut page = Page::with_transport(&ClientConfig::default(), Offline);
        page.carousel.tick();
        page.click_suggestion().await.unwrap();

        let transcript = page.widget.transcript();
        let asked = &transcript[transcript.len() - 2];
        assert_eq!(asked.author, Author::User);
        assert_eq!(asked.text, "Where do you work?");
        let answer = &transcript[transcript.len() - 1];
        assert!(answer.text.ends_with(OFFLINE_SUFFIX));
        assert_eq!(page.widget.state(), WidgetState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn carousel_cycles_back_to_first_prompt() {
        let mut page = Page::with_transport(&ClientConfig::default(), Offline);
        let mut shown = Vec::new();
        let ticks = DEFAULT_SUGGESTIONS.len() as u32;
        let run = page.run_carousel(|prompt| shown.push(prompt.to_string()));
        let deadline = ROTATION_PERIOD * ticks + Duration::from_millis(1);
        assert!(tokio::time::timeout(deadline, run).await.is_err());

        assert_eq!(shown.len(), DEFAULT_SUGGESTIONS.len());
        assert_eq!(shown[0], "Where do you work?");
        assert_eq!(shown.last().unwrap(), DEFAULT_SUGGESTIONS[0]);
        assert_eq!(page.carousel.index(), 0);
    }
}
