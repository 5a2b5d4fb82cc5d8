//! Regex testing mode.
//!
//! Input format is `<pattern>,<text>`, split on the first comma only, so
//! patterns may not contain commas but the subject text may.

use regex::Regex;

use crate::result::{EvalErrorKind, EvalResult};

/// Maximum matches listed literally; the rest are summarized as a count.
const MAX_LISTED_MATCHES: usize = 5;

/// Compiles the pattern and reports all non-overlapping matches in the text.
pub fn test(expr: &str) -> EvalResult {
    let Some((pattern, text)) = expr.split_once(',') else {
        return EvalResult::error(EvalErrorKind::BadFormat, "expected '<pattern>,<text>'");
    };

    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_) => {
            return EvalResult::error(
                EvalErrorKind::BadPattern,
                format!("invalid pattern '{pattern}'"),
            );
        }
    };

    let matches: Vec<&str> = regex.find_iter(text).map(|m| m.as_str()).collect();
    if matches.is_empty() {
        return EvalResult::Text("no matches".to_string());
    }

    let listed = matches[..matches.len().min(MAX_LISTED_MATCHES)].join(", ");
    let mut summary = format!("{} match(es): {listed}", matches.len());
    if matches.len() > MAX_LISTED_MATCHES {
        summary.push_str(&format!(" (+{} more)", matches.len() - MAX_LISTED_MATCHES));
    }
    EvalResult::Text(summary)
}
