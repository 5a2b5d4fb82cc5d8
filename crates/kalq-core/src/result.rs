//! Tagged evaluation results.
//!
//! Every evaluation path (sandboxed expressions, logic gates, base
//! conversion, regex testing) produces an `EvalResult`. Downstream logic
//! branches on the tag; the rendered string is presentation only.

use std::fmt;

/// Classifies evaluation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// An identifier outside the allow-list was referenced.
    NameNotAllowed,
    /// Tokenize/parse/runtime failure inside the sandboxed evaluator.
    EvalError,
    /// A logic gate received fewer operands than its arity requires.
    InsufficientOperands,
    /// Base conversion or regex input missing its required delimiter/base.
    BadFormat,
    /// Invalid regex pattern syntax.
    BadPattern,
}

/// An evaluation failure, recovered at the evaluator boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

/// Outcome of evaluating the current expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    /// Numeric success; formatted with default `f64` display.
    Number(f64),
    /// Textual success (mode-specific computations).
    Text(String),
    /// Recovered failure.
    Error(EvalError),
}

impl EvalResult {
    pub fn error(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        EvalResult::Error(EvalError::new(kind, message))
    }

    /// Returns true for `Number` and `Text` results.
    pub fn is_success(&self) -> bool {
        !matches!(self, EvalResult::Error(_))
    }

    /// Returns the numeric value for `Number` results.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EvalResult::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalResult::Number(v) => write!(f, "{v}"),
            EvalResult::Text(s) => f.write_str(s),
            EvalResult::Error(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formats_without_trailing_zero() {
        assert_eq!(EvalResult::Number(4.0).to_string(), "4");
        assert_eq!(EvalResult::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn error_carries_kind_not_just_prefix() {
        let res = EvalResult::error(EvalErrorKind::NameNotAllowed, "name 'foo' is not allowed");
        assert!(!res.is_success());
        assert!(res.as_number().is_none());
        // A legitimate Text result that happens to start with the error
        // prefix must still be a success by tag.
        let tricky = EvalResult::Text("error: looks scary but is data".into());
        assert!(tricky.is_success());
    }
}
