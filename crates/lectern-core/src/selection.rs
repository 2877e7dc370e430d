use crate::exchange::{ExchangeKind, ExchangeState};

/// Selected text, its user-editable copy, and the two exchanges fed from it.
#[derive(Clone, Debug)]
pub struct SelectionState {
    raw_selected: String,
    editable: String,
    translate: ExchangeState,
    analyze: ExchangeState,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            raw_selected: String::new(),
            editable: String::new(),
            translate: ExchangeState::new(ExchangeKind::Translate),
            analyze: ExchangeState::new(ExchangeKind::Analyze),
        }
    }
}

impl SelectionState {
    pub fn raw_selected(&self) -> &str {
        &self.raw_selected
    }

    pub fn editable(&self) -> &str {
        &self.editable
    }

    /// Mutable access for the edit box. Does not touch `raw_selected`.
    pub fn editable_mut(&mut self) -> &mut String {
        &mut self.editable
    }

    /// Record a new selection and re-seed the editable copy from it.
    ///
    /// Whitespace-only selections are ignored. Returns `true` if the
    /// selection changed.
    pub fn set_raw_selection(&mut self, selected: &str) -> bool {
        let trimmed = selected.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.raw_selected = trimmed.to_string();
        self.editable = self.raw_selected.clone();
        true
    }

    pub fn exchange(&self, kind: ExchangeKind) -> &ExchangeState {
        match kind {
            ExchangeKind::Translate => &self.translate,
            ExchangeKind::Analyze => &self.analyze,
        }
    }

    pub fn exchange_mut(&mut self, kind: ExchangeKind) -> &mut ExchangeState {
        match kind {
            ExchangeKind::Translate => &mut self.translate,
            ExchangeKind::Analyze => &mut self.analyze,
        }
    }

    /// Clear both texts and both results. Responses still in flight become stale.
    pub fn reset(&mut self) {
        self.raw_selected.clear();
        self.editable.clear();
        self.translate.reset();
        self.analyze.reset();
    }
}
