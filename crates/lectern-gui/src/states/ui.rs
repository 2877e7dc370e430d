use lectern_core::exchange::ExchangeKind;

/// Most recent log lines kept for the status panel.
const MAX_LOG_LINES: usize = 200;

/// UI-only state that is not part of the document model.
#[derive(Default)]
pub struct UIState {
    /// A file is being read and derived on the worker.
    pub opening: bool,

    /// Text currently highlighted in the page text pane, not yet taken over.
    pub pending_selection: String,

    /// Value of the page-jump field.
    pub jump_target: u32,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.opening
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    pub fn exchange_placeholder(kind: ExchangeKind) -> &'static str {
        match kind {
            ExchangeKind::Translate => "Translating...",
            ExchangeKind::Analyze => "Analyzing...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_bounded() {
        let mut ui = UIState::default();
        for i in 0..(MAX_LOG_LINES + 5) {
            ui.add_log(format!("line {i}"));
        }
        assert_eq!(ui.log_messages.len(), MAX_LOG_LINES);
        assert_eq!(ui.log_messages[0], "line 5");
    }
}
