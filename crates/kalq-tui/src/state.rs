//! Application state.
//!
//! One cohesive state object owned by the event loop: the reducer in
//! `update` is the only writer, the renderer in `render` the only other
//! reader. No globals.

use kalq_core::config::Config;
use kalq_core::modes::ModeEngine;
use kalq_core::result::EvalResult;

use crate::expr_buffer::ExprBuffer;
use crate::selection::Selection;

/// The plot overlay's source expression (shown until any key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotState {
    pub source: String,
}

/// Full calculator state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The editable expression and its text cursor.
    pub expr: ExprBuffer,
    /// Button-grid selection cursor.
    pub selection: Selection,
    /// Active mode plus the history it owns.
    pub engine: ModeEngine,
    /// Last evaluation result, if any.
    pub result: Option<EvalResult>,
    /// Help overlay visibility; the next key only dismisses it.
    pub show_help: bool,
    /// Plot overlay, dismissed like help.
    pub plot: Option<PlotState>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            expr: ExprBuffer::default(),
            selection: Selection::default(),
            engine: ModeEngine::new(config.start_mode()),
            result: None,
            show_help: false,
            plot: None,
        }
    }

    /// The previous numeric result for the `ans` binding.
    ///
    /// Checked via the result tag: text and error results count as 0.
    pub fn ans_value(&self) -> f64 {
        self.result
            .as_ref()
            .and_then(EvalResult::as_number)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use kalq_core::result::{EvalErrorKind, EvalResult};

    use super::*;

    #[test]
    fn ans_uses_the_tag_not_the_rendered_string() {
        let mut state = AppState::new(&Config::default());
        assert_eq!(state.ans_value(), 0.0);

        state.result = Some(EvalResult::Number(42.0));
        assert_eq!(state.ans_value(), 42.0);

        state.result = Some(EvalResult::error(EvalErrorKind::EvalError, "boom"));
        assert_eq!(state.ans_value(), 0.0);

        // A text result that looks numeric still does not count.
        state.result = Some(EvalResult::Text("123".to_string()));
        assert_eq!(state.ans_value(), 0.0);
    }
}
