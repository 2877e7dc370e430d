use serde::Serialize;

use crate::consts::{ENTER_CONTENT_NOTICE, REQUEST_FAILED_NOTICE};

/// Which remote action an exchange performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExchangeKind {
    Translate,
    Analyze,
}

impl ExchangeKind {
    /// Discriminator sent in the request body.
    pub fn label(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Analyze => "Analysis",
        }
    }
}

impl std::fmt::Display for ExchangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Translate => write!(f, "Translate"),
            Self::Analyze => write!(f, "Analyze"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExchangePhase {
    #[default]
    Idle,
    Sending,
    Streaming,
    Completed,
    Failed,
}

impl ExchangePhase {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Sending | Self::Streaming)
    }
}

impl std::fmt::Display for ExchangePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Sending => write!(f, "sending"),
            Self::Streaming => write!(f, "streaming"),
            Self::Completed => write!(f, "done"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// JSON body of `POST /api/message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageRequest {
    pub text: String,
    pub label: &'static str,
}

/// Everything a transport needs to run one exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeTicket {
    pub kind: ExchangeKind,
    pub generation: u64,
    pub request: MessageRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeUpdate {
    /// Response headers arrived; body chunks follow.
    Streaming,
    /// One decoded piece of the body.
    Chunk(String),
    Completed,
    Failed(String),
}

/// Progress report for one exchange, tagged with the generation it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeEvent {
    pub kind: ExchangeKind,
    pub generation: u64,
    pub update: ExchangeUpdate,
}

/// Display state of one exchange kind.
///
/// Each trigger bumps `generation`; events carrying an older generation are
/// dropped, so a superseded response never overwrites a newer result.
#[derive(Clone, Debug)]
pub struct ExchangeState {
    kind: ExchangeKind,
    phase: ExchangePhase,
    result: String,
    generation: u64,
}

impl ExchangeState {
    pub fn new(kind: ExchangeKind) -> Self {
        Self {
            kind,
            phase: ExchangePhase::Idle,
            result: String::new(),
            generation: 0,
        }
    }

    pub fn kind(&self) -> ExchangeKind {
        self.kind
    }

    pub fn phase(&self) -> ExchangePhase {
        self.phase
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new exchange for `text`.
    ///
    /// Blank text shows [`ENTER_CONTENT_NOTICE`] and returns `None`; nothing
    /// must be sent. Otherwise the previous result is cleared and the ticket
    /// for the request is returned.
    pub fn trigger(&mut self, text: &str) -> Option<ExchangeTicket> {
        self.generation += 1;
        if text.trim().is_empty() {
            self.phase = ExchangePhase::Idle;
            self.result = ENTER_CONTENT_NOTICE.to_string();
            return None;
        }

        self.phase = ExchangePhase::Sending;
        self.result.clear();
        Some(ExchangeTicket {
            kind: self.kind,
            generation: self.generation,
            request: MessageRequest {
                text: text.to_string(),
                label: self.kind.label(),
            },
        })
    }

    /// Apply a progress event. Returns `false` if it was stale or out of order.
    pub fn apply(&mut self, event: &ExchangeEvent) -> bool {
        if event.kind != self.kind
            || event.generation != self.generation
            || !self.phase.is_in_flight()
        {
            return false;
        }

        match &event.update {
            ExchangeUpdate::Streaming => self.phase = ExchangePhase::Streaming,
            ExchangeUpdate::Chunk(text) => {
                self.phase = ExchangePhase::Streaming;
                self.result.push_str(text);
            }
            ExchangeUpdate::Completed => self.phase = ExchangePhase::Completed,
            ExchangeUpdate::Failed(_) => {
                self.phase = ExchangePhase::Failed;
                self.result = REQUEST_FAILED_NOTICE.to_string();
            }
        }
        true
    }

    /// Back to idle with an empty result. In-flight responses become stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = ExchangePhase::Idle;
        self.result.clear();
    }
}
