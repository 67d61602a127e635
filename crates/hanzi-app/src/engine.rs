//! Engine - orchestration state shared by the frontends
//!
//! Owns the TEA state, the message channel and the backend services. The TUI
//! runner feeds it terminal events and drains background results from it.

use hanzi_backend::{
    GeminiClient, GeminiConfig, HttpStrokeSource, MetadataSource, StrokeSource,
    DEFAULT_STROKE_URL_TEMPLATE,
};
use hanzi_core::prelude::*;
use tokio::sync::mpsc;

use crate::actions::Services;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Hanzi Board.
///
/// Generic over the backends so tests can swap in in-memory sources; the
/// default parameters are the HTTP clients used by the binary.
pub struct Engine<M = GeminiClient, S = HttpStrokeSource> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, event pump).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Backends used by background tasks
    services: Services<M, S>,
}

impl Engine {
    /// Create an engine talking to the configured HTTP backends.
    ///
    /// A stroke URL template without a `{char}` placeholder is replaced by
    /// the default one. Fails only when an HTTP client cannot be built.
    pub fn new(mut settings: Settings, api_key: Option<String>) -> Result<Self> {
        let timeout = settings.backend.timeout();
        let metadata = GeminiClient::new(GeminiConfig {
            api_key,
            model: settings.backend.model.clone(),
            base_url: settings.backend.base_url.clone(),
            timeout,
        })?;
        let strokes = match HttpStrokeSource::new(settings.strokes.url_template.clone(), timeout) {
            Ok(source) => source,
            Err(e) => {
                warn!("{}, using {}", e, DEFAULT_STROKE_URL_TEMPLATE);
                settings.strokes.url_template = DEFAULT_STROKE_URL_TEMPLATE.to_string();
                HttpStrokeSource::new(DEFAULT_STROKE_URL_TEMPLATE, timeout)?
            }
        };

        Ok(Self::with_services(settings, Services::new(metadata, strokes)))
    }
}

impl<M, S> Engine<M, S>
where
    M: MetadataSource + Sync + 'static,
    S: StrokeSource + Sync + 'static,
{
    /// Create an engine with explicit backends. Spawns the signal handler,
    /// so a tokio runtime must be running.
    pub fn with_services(settings: Settings, services: Services<M, S>) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            services,
        }
    }

    /// Initial lookup of the default character
    pub fn startup(&mut self) {
        info!("Starting with '{}'", self.state.input);
        self.process_message(Message::Generate);
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.services);
    }

    /// Process everything already queued on the channel without waiting.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn services(&self) -> &Services<M, S> {
        &self.services
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::board::BoardModeKind;
    use crate::state::STATUS_READY;
    use hanzi_backend::test_utils::{
        cat_fields, StubMetadataSource, StubStrokeSource, PLUS_STROKES_JSON,
    };

    type StubEngine = Engine<StubMetadataSource, StubStrokeSource>;

    fn stub_engine(metadata: StubMetadataSource, strokes: StubStrokeSource) -> StubEngine {
        let mut settings = Settings::default();
        settings.board.auto_animate_delay_ms = 10;
        Engine::with_services(settings, Services::new(metadata, strokes))
    }

    /// Wait for and process `count` background messages
    async fn pump(engine: &mut StubEngine, count: usize) {
        for _ in 0..count {
            let msg = tokio::time::timeout(Duration::from_secs(2), engine.msg_rx.recv())
                .await
                .expect("timed out waiting for a message")
                .expect("channel closed");
            engine.process_message(msg);
        }
    }

    #[tokio::test]
    async fn test_engine_starts_ready() {
        let engine = stub_engine(StubMetadataSource::failing(), StubStrokeSource::failing());
        assert_eq!(engine.state.status, STATUS_READY);
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_startup_loads_metadata_and_animates() {
        let mut engine = stub_engine(
            StubMetadataSource::succeeding(cat_fields()),
            StubStrokeSource::serving(PLUS_STROKES_JSON),
        );
        engine.startup();
        assert!(engine.state.loading);

        // MetadataLoaded, StrokesLoaded, AutoAnimate in some order
        pump(&mut engine, 3).await;

        assert!(!engine.state.loading);
        assert_eq!(engine.state.status, "已加载: 猫。准备练习。");
        assert_eq!(engine.state.board.mode_kind(), BoardModeKind::Animating);
        assert_eq!(engine.services().metadata.requests(), vec!["猫".to_string()]);
        assert_eq!(engine.services().strokes.requests(), vec!['猫']);
    }

    #[tokio::test]
    async fn test_backend_failure_yields_fallback_data() {
        let mut engine = stub_engine(StubMetadataSource::failing(), StubStrokeSource::failing());
        engine.startup();

        // MetadataLoaded (fallback), StrokesFailed, AutoAnimate
        pump(&mut engine, 3).await;

        let data = engine.state.char_data.as_ref().expect("metadata stored");
        assert!(data.is_fallback());
        assert!(engine.state.board.has_load_failed());
        assert_eq!(engine.state.board.mode_kind(), BoardModeKind::Idle);
    }

    #[tokio::test]
    async fn test_template_without_placeholder_falls_back_to_default() {
        let mut settings = Settings::default();
        settings.strokes.url_template = "https://cdn.example.test/data.json".to_string();

        let engine = Engine::new(settings, None).expect("engine starts with defaults");

        assert_eq!(
            engine.state.settings.strokes.url_template,
            DEFAULT_STROKE_URL_TEMPLATE
        );
        assert_eq!(
            engine.services().strokes.url_for('猫').unwrap().as_str(),
            "https://cdn.jsdelivr.net/npm/hanzi-writer-data@2.0/%E7%8C%AB.json"
        );
    }

    #[tokio::test]
    async fn test_quit_message_from_channel() {
        let mut engine = stub_engine(StubMetadataSource::failing(), StubStrokeSource::failing());
        engine.msg_sender().send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 1);
        assert!(engine.should_quit());
    }
}
