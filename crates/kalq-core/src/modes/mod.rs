//! Calculator modes: button grids, activation dispatch, and evaluation.
//!
//! Each mode owns a button grid and its own reading of `=`. Labels are
//! opaque strings; only the active mode's dispatch understands them.

pub mod baseconv;
pub mod gates;
pub mod pattern;

use std::collections::HashMap;

use tracing::debug;

use crate::expr;
use crate::history::HistoryLog;
use crate::result::EvalResult;

/// The active calculator mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Standard,
    Programmer,
    LogicGate,
    Regex,
    BaseConversion,
}

/// A button grid: rows of labels. Rows may have different lengths.
pub type Grid = &'static [&'static [&'static str]];

const CONTROL_ROW: &[&str] = &["=", "C", "Del", "Ans", "Help", "Quit"];

const STANDARD_GRID: Grid = &[
    &["7", "8", "9", "/", "sin(", "cos("],
    &["4", "5", "6", "*", "tan(", "sqrt("],
    &["1", "2", "3", "-", "log(", "exp("],
    &["0", ".", "π", "+", "(", ")"],
    CONTROL_ROW,
];

const PROGRAMMER_GRID: Grid = &[
    &["7", "8", "9", "/", "abs(", "floor("],
    &["4", "5", "6", "*", "ceil(", "round("],
    &["1", "2", "3", "-", "pow(", "min("],
    &["0", ".", "%", "+", "(", ")"],
    CONTROL_ROW,
];

const LOGIC_GATE_GRID: Grid = &[
    &["AND", "OR", "NOT", "XOR", "NAND", "NOR"],
    &["7", "8", "9", "/", "sin(", "cos("],
    &["4", "5", "6", "*", "tan(", "sqrt("],
    &["1", "2", "3", "-", "log(", "exp("],
    &["0", ".", "π", "+", "(", ")"],
    CONTROL_ROW,
];

const REGEX_GRID: Grid = &[
    &[".", "*", "+", "?", "|", ","],
    &["(", ")", "[", "]", "{", "}"],
    &["\\d", "\\w", "\\s", "\\b", "^", "$"],
    &["0", "1", "2", "3", "a", "b"],
    CONTROL_ROW,
];

// The last row is deliberately short: selection clamping must cope with
// ragged grids.
const BASE_CONVERSION_GRID: Grid = &[
    &["2:", "8:", "10:", "16:", ":", "Swap"],
    &["7", "8", "9", "A", "B", "C"],
    &["4", "5", "6", "D", "E", "F"],
    &["1", "2", "3", "0", "=", "Clr"],
    &["Del", "Ans", "Help", "Quit"],
];

impl Mode {
    /// Fixed cycle order; five steps return to the start.
    pub fn cycle(self) -> Mode {
        match self {
            Mode::Standard => Mode::Programmer,
            Mode::Programmer => Mode::LogicGate,
            Mode::LogicGate => Mode::Regex,
            Mode::Regex => Mode::BaseConversion,
            Mode::BaseConversion => Mode::Standard,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Programmer => "programmer",
            Mode::LogicGate => "logic-gate",
            Mode::Regex => "regex",
            Mode::BaseConversion => "base-conversion",
        }
    }

    /// Parses a mode name as used in config and on the command line.
    pub fn from_name(name: &str) -> Option<Mode> {
        Some(match name {
            "standard" => Mode::Standard,
            "programmer" => Mode::Programmer,
            "logic-gate" | "logic" => Mode::LogicGate,
            "regex" => Mode::Regex,
            "base-conversion" | "base" => Mode::BaseConversion,
            _ => return None,
        })
    }

    /// The mode's button grid.
    pub fn grid(self) -> Grid {
        match self {
            Mode::Standard => STANDARD_GRID,
            Mode::Programmer => PROGRAMMER_GRID,
            Mode::LogicGate => LOGIC_GATE_GRID,
            Mode::Regex => REGEX_GRID,
            Mode::BaseConversion => BASE_CONVERSION_GRID,
        }
    }
}

/// What a button activation asks the input layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert text at the cursor, then step the cursor back `cursor_back`
    /// chars (used to land inside freshly inserted parentheses).
    InsertText { text: String, cursor_back: usize },
    /// Replace the whole expression (base-conversion swap).
    SetExpression(String),
    Evaluate,
    ClearAll,
    DeleteBeforeCursor,
    InsertAnswer,
    ToggleHelp,
    Quit,
}

impl Action {
    fn insert(text: &str) -> Action {
        Action::InsertText {
            text: text.to_string(),
            cursor_back: 0,
        }
    }

    /// Inserts `name()` with the cursor between the parens; `name_paren`
    /// must already end with the opening paren.
    fn insert_call(name_paren: &str) -> Action {
        Action::InsertText {
            text: format!("{name_paren})"),
            cursor_back: 1,
        }
    }
}

/// Maps a button label to its action for the given mode.
///
/// Unknown labels insert themselves verbatim; every label a grid can
/// produce is either a control button or plain insertable text.
pub fn activate(mode: Mode, label: &str, expression: &str) -> Action {
    match label {
        "=" => return Action::Evaluate,
        "Del" => return Action::DeleteBeforeCursor,
        "Ans" => return Action::InsertAnswer,
        "Help" => return Action::ToggleHelp,
        "Quit" => return Action::Quit,
        _ => {}
    }

    // "C" is the clear button everywhere except base-conversion mode,
    // where it is the hex digit and "Clr" clears instead.
    match mode {
        Mode::BaseConversion => match label {
            "Clr" => Action::ClearAll,
            // Swapping without a colon leaves the expression untouched.
            "Swap" => match baseconv::swap(expression) {
                Some(swapped) => Action::SetExpression(swapped),
                None => Action::SetExpression(expression.to_string()),
            },
            _ => Action::insert(label),
        },
        _ if label == "C" => Action::ClearAll,
        Mode::LogicGate if is_gate_label(label) => Action::insert_call(&format!("{label}(")),
        _ if label.ends_with('(') && label.len() > 1 => Action::insert_call(label),
        _ => Action::insert(label),
    }
}

fn is_gate_label(label: &str) -> bool {
    matches!(label, "AND" | "OR" | "NOT" | "XOR" | "NAND" | "NOR")
}

/// Outcome of an `=` activation.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated {
    /// A result to display (and, on success, already logged to history).
    Result(EvalResult),
    /// A `plot <expr>` request; the presentation layer renders it.
    Plot(String),
}

/// Dispatches evaluation by mode and owns the history log.
#[derive(Debug, Default)]
pub struct ModeEngine {
    pub mode: Mode,
    pub history: HistoryLog,
}

impl ModeEngine {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            history: HistoryLog::new(),
        }
    }

    /// Advances to the next mode.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.cycle();
        debug!(mode = self.mode.display_name(), "mode switched");
    }

    /// Evaluates the expression under the active mode.
    ///
    /// `ans` is the previous numeric result (0.0 when the previous result
    /// was not a number). Successful results are appended to history.
    pub fn evaluate(&mut self, expression: &str, ans: f64) -> Evaluated {
        let result = match self.mode {
            Mode::Standard | Mode::Programmer => {
                if let Some(source) = expression.strip_prefix("plot ") {
                    return Evaluated::Plot(source.trim().to_string());
                }
                let mut bindings = HashMap::new();
                bindings.insert("ans".to_string(), ans);
                expr::evaluate(expression, &bindings)
            }
            Mode::LogicGate => gates::evaluate(expression),
            Mode::Regex => pattern::test(expression),
            Mode::BaseConversion => baseconv::convert(expression),
        };

        debug!(mode = self.mode.display_name(), %result, "evaluated");
        if result.is_success() {
            self.history.push(expression, result.to_string());
        }
        Evaluated::Result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::EvalErrorKind;

    #[test]
    fn cycling_is_closed_under_five_applications() {
        let mut mode = Mode::Standard;
        for _ in 0..5 {
            mode = mode.cycle();
        }
        assert_eq!(mode, Mode::Standard);
    }

    #[test]
    fn every_grid_has_rows_and_labels() {
        for mode in [
            Mode::Standard,
            Mode::Programmer,
            Mode::LogicGate,
            Mode::Regex,
            Mode::BaseConversion,
        ] {
            let grid = mode.grid();
            assert!(!grid.is_empty());
            assert!(grid.iter().all(|row| !row.is_empty()));
        }
    }

    #[test]
    fn function_buttons_land_cursor_inside_parens() {
        let action = activate(Mode::Standard, "sin(", "");
        assert_eq!(
            action,
            Action::InsertText {
                text: "sin()".to_string(),
                cursor_back: 1,
            }
        );
    }

    #[test]
    fn gate_buttons_insert_calls() {
        let action = activate(Mode::LogicGate, "NAND", "");
        assert_eq!(
            action,
            Action::InsertText {
                text: "NAND()".to_string(),
                cursor_back: 1,
            }
        );
    }

    #[test]
    fn clear_label_depends_on_mode() {
        assert_eq!(activate(Mode::Standard, "C", ""), Action::ClearAll);
        assert_eq!(
            activate(Mode::BaseConversion, "C", ""),
            Action::insert("C")
        );
        assert_eq!(activate(Mode::BaseConversion, "Clr", ""), Action::ClearAll);
    }

    #[test]
    fn swap_rewrites_the_expression() {
        assert_eq!(
            activate(Mode::BaseConversion, "Swap", "16:FF"),
            Action::SetExpression("FF:16".to_string())
        );
    }

    #[test]
    fn evaluate_appends_successes_to_history() {
        let mut engine = ModeEngine::new(Mode::Standard);
        engine.evaluate("2+2", 0.0);
        engine.evaluate("nope", 0.0);
        assert_eq!(engine.history.len(), 1);
        let entry = engine.history.iter().next().unwrap();
        assert_eq!(entry.expression, "2+2");
        assert_eq!(entry.display, "4");
    }

    #[test]
    fn history_is_fifo_bounded_across_evaluations() {
        let mut engine = ModeEngine::new(Mode::Standard);
        for i in 0..11 {
            engine.evaluate(&format!("{i}+0"), 0.0);
        }
        assert_eq!(engine.history.len(), 10);
        assert_eq!(
            engine.history.iter().next().unwrap().expression,
            "1+0"
        );
    }

    #[test]
    fn plot_prefix_is_routed_not_evaluated() {
        let mut engine = ModeEngine::new(Mode::Standard);
        let outcome = engine.evaluate("plot sin(x)", 0.0);
        assert_eq!(outcome, Evaluated::Plot("sin(x)".to_string()));
        assert!(engine.history.is_empty());
    }

    #[test]
    fn ans_binding_flows_through() {
        let mut engine = ModeEngine::new(Mode::Standard);
        let Evaluated::Result(result) = engine.evaluate("ans+1", 41.0) else {
            panic!("expected result");
        };
        assert_eq!(result, EvalResult::Number(42.0));
    }

    #[test]
    fn mode_specific_evaluation_dispatch() {
        let mut engine = ModeEngine::new(Mode::LogicGate);
        let Evaluated::Result(result) = engine.evaluate("AND 101 011", 0.0) else {
            panic!("expected result");
        };
        assert_eq!(result, EvalResult::Text("1".to_string()));

        engine.mode = Mode::Regex;
        let Evaluated::Result(result) = engine.evaluate("a+,baaab", 0.0) else {
            panic!("expected result");
        };
        assert_eq!(result, EvalResult::Text("1 match(es): aaa".to_string()));

        engine.mode = Mode::BaseConversion;
        let Evaluated::Result(result) = engine.evaluate("16:FF", 0.0) else {
            panic!("expected result");
        };
        assert!(matches!(result, EvalResult::Text(s) if s.starts_with("DEC: 255")));
    }

    #[test]
    fn switching_mode_preserves_history() {
        let mut engine = ModeEngine::new(Mode::Standard);
        engine.evaluate("2+2", 0.0);
        engine.cycle_mode();
        assert_eq!(engine.history.len(), 1);
        assert_eq!(engine.mode, Mode::Programmer);
    }

    #[test]
    fn name_errors_do_not_reach_history() {
        let mut engine = ModeEngine::new(Mode::Standard);
        let Evaluated::Result(result) = engine.evaluate("__import__('os')", 0.0) else {
            panic!("expected result");
        };
        let EvalResult::Error(e) = result else {
            panic!("expected error");
        };
        assert_eq!(e.kind, EvalErrorKind::NameNotAllowed);
        assert!(engine.history.is_empty());
    }
}
