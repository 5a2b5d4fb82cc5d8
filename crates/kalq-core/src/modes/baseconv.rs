//! Base conversion between binary, octal, decimal, and hexadecimal.
//!
//! Input format is `<base>:<digits>` with base one of 2, 8, 10, 16.

use crate::result::{EvalErrorKind, EvalResult};

const SUPPORTED_BASES: [u32; 4] = [2, 8, 10, 16];

/// Converts `<base>:<digits>` into a listing of all four bases.
pub fn convert(expr: &str) -> EvalResult {
    let Some((base_str, digits)) = split(expr) else {
        return EvalResult::error(
            EvalErrorKind::BadFormat,
            "expected '<base>:<digits>' (base 2, 8, 10, or 16)",
        );
    };

    let base: u32 = match base_str.parse() {
        Ok(base) if SUPPORTED_BASES.contains(&base) => base,
        _ => {
            return EvalResult::error(
                EvalErrorKind::BadFormat,
                format!("unsupported base '{base_str}'"),
            );
        }
    };

    let value = match u64::from_str_radix(digits, base) {
        Ok(value) => value,
        Err(_) => {
            return EvalResult::error(
                EvalErrorKind::BadFormat,
                format!("'{digits}' is not a base-{base} number"),
            );
        }
    };

    EvalResult::Text(format!(
        "DEC: {value}, HEX: {value:X}, OCT: {value:o}, BIN: {value:b}"
    ))
}

/// Exchanges the two colon-delimited segments without reinterpreting them.
///
/// Returns `None` when there is no colon to swap around.
pub fn swap(expr: &str) -> Option<String> {
    let (left, right) = split(expr)?;
    Some(format!("{right}:{left}"))
}

fn split(expr: &str) -> Option<(&str, &str)> {
    let (left, right) = expr.trim().split_once(':')?;
    Some((left.trim(), right.trim()))
}
