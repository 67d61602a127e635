//! Application state (Model in TEA pattern)

use std::time::Instant;

use hanzi_core::CharacterData;

use crate::board::BoardState;
use crate::config::Settings;

/// Status shown before the first lookup
pub const STATUS_READY: &str = "准备就绪! 选择模式开始。";
/// Status for empty or non-ideograph input
pub const STATUS_INVALID_INPUT: &str = "请输入有效的中文汉字。";
/// Status while metadata is being fetched
pub const STATUS_ANALYZING: &str = "正在分析汉字...";
/// Status while the demo animation is requested
pub const STATUS_ANIMATING: &str = "演示笔画顺序...";
/// Status when the quiz starts
pub const STATUS_QUIZ: &str = "描红模式：请在田字格中书写。";
/// Status when the quiz is completed
pub const STATUS_QUIZ_COMPLETE: &str = "太棒了！书写正确！🎉";
/// Status after a wrong stroke
pub const STATUS_MISTAKE: &str = "笔画顺序错误，请重试。";
/// Status when the lookup itself failed
pub const STATUS_FETCH_FAILED: &str = "获取数据失败，请检查网络或 API Key。";

/// Status once metadata for `c` has arrived
pub fn status_loaded(c: char) -> String {
    format!("已加载: {c}。准备练习。")
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Clickable buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Generate,
    Animate,
    Quiz,
}

/// Keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Button(Button),
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Input,
        Focus::Button(Button::Generate),
        Focus::Button(Button::Animate),
        Focus::Button(Button::Quiz),
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Raw text of the input field (at most one character)
    pub input: String,

    /// Character bound to the board and last sent for lookup
    pub active_char: Option<char>,

    /// Metadata for the active character, once loaded
    pub char_data: Option<CharacterData>,

    /// A metadata request is pending
    pub loading: bool,

    /// User-facing status line
    pub status: String,

    pub focus: Focus,

    pub board: BoardState,

    pub phase: AppPhase,

    /// Token of the most recent metadata request; older results are stale
    pub request_token: u64,

    /// Frame counter for the loading spinner
    pub spinner_frame: usize,

    /// Settings loaded from config file
    pub settings: Settings,

    /// Time of the previous tick, for animation deltas
    pub last_tick: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let input = settings
            .behavior
            .default_character
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        Self {
            input,
            active_char: None,
            char_data: None,
            loading: false,
            status: STATUS_READY.to_string(),
            focus: Focus::Input,
            board: BoardState::new(&settings.board),
            phase: AppPhase::Running,
            request_token: 0,
            spinner_frame: 0,
            settings,
            last_tick: None,
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Start a new metadata request and return its token
    pub fn next_request_token(&mut self) -> u64 {
        self.request_token += 1;
        self.request_token
    }

    /// Whether `token` belongs to the most recent request
    pub fn is_current_request(&self, token: u64) -> bool {
        token == self.request_token
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
