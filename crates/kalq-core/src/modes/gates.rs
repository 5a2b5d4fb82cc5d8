//! Logic-gate evaluation.
//!
//! Operands are the maximal digit runs in the expression, read as binary
//! literals. The gate is matched by keyword, most specific first, so that
//! `NAND`/`NOR` are never mistaken for the `AND`/`OR` embedded in them.

use crate::result::{EvalErrorKind, EvalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Not,
    Nand,
    Nor,
    Xor,
    And,
    Or,
}

impl Gate {
    // Match order matters: every keyword here contains or is contained in
    // another, so the most specific name is tried first.
    const MATCH_ORDER: [(Gate, &'static str); 6] = [
        (Gate::Not, "NOT"),
        (Gate::Nand, "NAND"),
        (Gate::Nor, "NOR"),
        (Gate::Xor, "XOR"),
        (Gate::And, "AND"),
        (Gate::Or, "OR"),
    ];

    fn arity(self) -> usize {
        match self {
            Gate::Not => 1,
            _ => 2,
        }
    }

    fn keyword(self) -> &'static str {
        Self::MATCH_ORDER
            .iter()
            .find(|(gate, _)| *gate == self)
            .map(|(_, kw)| *kw)
            .unwrap_or_default()
    }
}

/// Evaluates a logic-gate expression such as `AND 101 011`.
///
/// The result is the gate output rendered as an unpadded binary string.
pub fn evaluate(expr: &str) -> EvalResult {
    let Some(gate) = find_gate(expr) else {
        return EvalResult::error(
            EvalErrorKind::EvalError,
            "no logic gate found (AND, OR, NOT, XOR, NAND, NOR)",
        );
    };

    let operands = match parse_binary_operands(expr) {
        Ok(operands) => operands,
        Err(run) => {
            return EvalResult::error(
                EvalErrorKind::EvalError,
                format!("'{run}' is not a binary literal"),
            );
        }
    };

    if operands.len() < gate.arity() {
        return EvalResult::error(
            EvalErrorKind::InsufficientOperands,
            format!(
                "{} needs {} operand(s), got {}",
                gate.keyword(),
                gate.arity(),
                operands.len()
            ),
        );
    }

    let value = match gate {
        Gate::And => operands[0] & operands[1],
        Gate::Or => operands[0] | operands[1],
        Gate::Xor => operands[0] ^ operands[1],
        Gate::Nand => 1 - (operands[0] & operands[1]).min(1),
        Gate::Nor => 1 - (operands[0] | operands[1]).min(1),
        Gate::Not => {
            // The operand collapses to one bit before complementing.
            let bit = u64::from(operands[0] != 0);
            !bit & 1
        }
    };

    EvalResult::Text(format!("{value:b}"))
}

fn find_gate(expr: &str) -> Option<Gate> {
    Gate::MATCH_ORDER
        .iter()
        .find(|(_, keyword)| expr.contains(keyword))
        .map(|(gate, _)| *gate)
}

/// Collects every maximal ASCII-digit run, parsed base 2.
///
/// Returns the offending run when one is not a valid binary literal.
fn parse_binary_operands(expr: &str) -> Result<Vec<u64>, String> {
    let mut operands = Vec::new();
    let mut run = String::new();
    for c in expr.chars().chain(std::iter::once(' ')) {
        if c.is_ascii_digit() {
            run.push(c);
        } else if !run.is_empty() {
            let value =
                u64::from_str_radix(&run, 2).map_err(|_| std::mem::take(&mut run))?;
            operands.push(value);
            run.clear();
        }
    }
    Ok(operands)
}
