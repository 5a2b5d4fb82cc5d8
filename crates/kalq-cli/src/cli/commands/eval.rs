//! One-shot expression evaluation.

use std::collections::HashMap;

use anyhow::Result;
use kalq_core::expr;

/// Evaluates a single expression and prints the rendered result.
///
/// Evaluation failures are in-band results, not process failures: the
/// error line goes to stdout and the exit code stays 0.
pub fn run(expression: &str) -> Result<()> {
    let result = expr::evaluate(expression, &HashMap::new());
    println!("{result}");
    Ok(())
}
