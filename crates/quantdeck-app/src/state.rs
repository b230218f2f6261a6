//! Application state (Model in TEA pattern)

use quantdeck_core::{Content, ContentShape, ReplicationResult, Section, Strategy};
use rand::Rng;

use crate::config::Settings;

/// Text written into the text slot when a fetch fails
pub const FAILURE_MESSAGE: &str = "Failed to load content. Please try refreshing the page.";

/// Lines moved by PageUp/PageDown
pub const PAGE_SCROLL: u16 = 10;

/// Messages cycled by the loading spinner
const LOADING_MESSAGES: &[&str] = &[
    "Generating AI Insights...",
    "Backtesting the narrative...",
    "Reconciling sandbox P&L...",
    "Calibrating alpha signals...",
    "Replaying the order book...",
    "Estimating slippage...",
    "Cross-checking fills...",
    "Warming up the risk engine...",
    "Negotiating with the exchange...",
    "Consulting the quant oracle...",
];

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Spinner state shown while a fetch is in flight
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    /// Current index into LOADING_MESSAGES for cycling
    message_index: usize,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index].to_string(),
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Tick animation frame, cycling the message every 15 frames
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.animation_frame % 15 == 0 {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index].to_string();
        }
    }

    pub fn messages() -> &'static [&'static str] {
        LOADING_MESSAGES
    }
}

impl PartialEq for LoadingState {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.animation_frame == other.animation_frame
    }
}

/// What the content area should show, derived from [`AppState`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentView<'a> {
    /// A fetch is in flight
    Loading(&'a LoadingState),
    /// Free text with markup (also used for the failure message)
    Text(&'a str),
    Strategies(&'a [Strategy]),
    Replication(&'a ReplicationResult),
    /// Replication section with no report loaded
    Empty,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Currently selected section
    pub active_section: Section,

    /// True exactly while a fetch for the active section is in flight
    pub loading: bool,

    pub loading_state: LoadingState,

    /// Text slot
    pub text: String,

    /// Strategy list slot
    pub strategies: Vec<Strategy>,

    /// Replication report slot
    pub replication: Option<ReplicationResult>,

    /// Whether the last settled fetch failed
    pub failed: bool,

    /// Generation of the most recent fetch; older completions are stale
    pub load_generation: u64,

    /// Vertical scroll offset of the content area
    pub scroll_offset: u16,

    /// Largest offset that still shows content (set during render)
    pub scroll_limit: u16,

    /// Show key hints in the footer
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state on the default section, loading
    pub fn new() -> Self {
        Self {
            phase: AppPhase::Running,
            active_section: Section::default(),
            loading: true,
            loading_state: LoadingState::new(),
            text: String::new(),
            strategies: Vec::new(),
            replication: None,
            failed: false,
            load_generation: 0,
            scroll_offset: 0,
            scroll_limit: 0,
            show_help: true,
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            active_section: settings.ui.default_section,
            show_help: settings.ui.show_help,
            ..Self::new()
        }
    }

    /// Make `section` active and start a new load generation
    ///
    /// Returns the generation the caller must tag its fetch with.
    pub fn select(&mut self, section: Section) -> u64 {
        self.active_section = section;
        self.load_generation = self.load_generation.wrapping_add(1);
        self.loading = true;
        self.failed = false;
        self.loading_state = LoadingState::new();
        self.scroll_offset = 0;
        self.load_generation
    }

    /// Whether a completion tagged `generation` belongs to the latest fetch
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.load_generation
    }

    /// Store fetched content in the slot matching its shape
    pub fn apply_content(&mut self, content: Content) {
        match content {
            Content::Text(text) => self.text = text,
            Content::Strategies(strategies) => self.strategies = strategies,
            Content::Replication(result) => self.replication = Some(result),
        }
        self.failed = false;
        self.loading = false;
    }

    /// Replace the text slot with [`FAILURE_MESSAGE`]
    pub fn apply_failure(&mut self) {
        self.text = FAILURE_MESSAGE.to_string();
        self.failed = true;
        self.loading = false;
    }

    /// Decide what the content area shows
    pub fn view(&self) -> ContentView<'_> {
        if self.loading {
            return ContentView::Loading(&self.loading_state);
        }
        if self.failed {
            return ContentView::Text(&self.text);
        }

        match self.active_section.shape() {
            ContentShape::Text => ContentView::Text(&self.text),
            ContentShape::StrategyList => ContentView::Strategies(&self.strategies),
            ContentShape::ReplicationResult => match &self.replication {
                Some(result) => ContentView::Replication(result),
                None => ContentView::Empty,
            },
        }
    }

    pub fn tick(&mut self) {
        if self.loading {
            self.loading_state.tick();
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(lines)
            .min(self.scroll_limit);
    }

    /// Record how far the rendered content can scroll, pulling the
    /// offset back if the content shrank
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll_offset = self.scroll_offset.min(limit);
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
