//! Sandboxed expression evaluation.
//!
//! The pipeline is: lexical name check, tokenize, parse, tree-walk. The
//! name check runs over the whole input before anything is evaluated, so a
//! disallowed identifier anywhere rejects the expression without partial
//! effects. The namespace during the walk is exactly the static allow-list
//! plus the caller's bindings; there is nothing else to reach.

pub mod names;
pub mod parser;
pub mod token;

use std::collections::HashMap;

use names::NameDef;
use parser::{BinOp, Expr};

use crate::result::{EvalErrorKind, EvalResult};

/// Evaluates an expression against the allow-list and the given bindings.
///
/// Bindings are plain numeric constants (`ans`, the plot variable `x`);
/// they shadow nothing in the static table and cannot be functions.
pub fn evaluate(input: &str, bindings: &HashMap<String, f64>) -> EvalResult {
    if let Some(name) = first_disallowed_name(input, bindings) {
        return EvalResult::error(
            EvalErrorKind::NameNotAllowed,
            format!("name '{name}' is not allowed"),
        );
    }

    let tokens = match token::tokenize(input) {
        Ok(tokens) => tokens,
        Err(message) => return EvalResult::error(EvalErrorKind::EvalError, message),
    };
    let ast = match parser::parse(&tokens) {
        Ok(ast) => ast,
        Err(message) => return EvalResult::error(EvalErrorKind::EvalError, message),
    };

    match eval_expr(&ast, bindings) {
        Ok(value) => EvalResult::Number(value),
        Err(message) => EvalResult::error(EvalErrorKind::EvalError, message),
    }
}

/// Scans the raw input for identifier-shaped runs and returns the first
/// one that is neither allow-listed nor bound.
///
/// Working on the raw text (rather than the AST) means the check fires
/// even when the rest of the input would not tokenize.
fn first_disallowed_name(input: &str, bindings: &HashMap<String, f64>) -> Option<String> {
    let mut chars = input.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c == 'π' {
            chars.next();
            if !names::is_allowed("π") {
                return Some("π".to_string());
            }
        } else if c.is_alphabetic() || c == '_' {
            let mut name = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_alphanumeric() || d == '_' {
                    name.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            if !names::is_allowed(&name) && !bindings.contains_key(&name) {
                return Some(name);
            }
        } else {
            chars.next();
        }
    }
    None
}

fn eval_expr(expr: &Expr, bindings: &HashMap<String, f64>) -> Result<f64, String> {
    match expr {
        Expr::Num(v) => Ok(*v),
        Expr::Name(name) => {
            if let Some(&v) = bindings.get(name) {
                return Ok(v);
            }
            match names::lookup(name) {
                Some(NameDef::Const(v)) => Ok(v),
                Some(_) => Err(format!("'{name}' is a function, not a value")),
                // Unreachable in practice: the name check runs first.
                None => Err(format!("name '{name}' is not allowed")),
            }
        }
        Expr::Neg(inner) => Ok(-eval_expr(inner, bindings)?),
        Expr::Binary(op, lhs, rhs) => {
            let a = eval_expr(lhs, bindings)?;
            let b = eval_expr(rhs, bindings)?;
            Ok(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => a / b,
                BinOp::Rem => a % b,
                BinOp::Pow => a.powf(b),
            })
        }
        Expr::Call(name, args) => {
            if bindings.contains_key(name) {
                return Err(format!("'{name}' is not a function"));
            }
            match names::lookup(name) {
                Some(NameDef::Unary(f)) => {
                    let [arg] = args.as_slice() else {
                        return Err(format!("{name} expects 1 argument, got {}", args.len()));
                    };
                    Ok(f(eval_expr(arg, bindings)?))
                }
                Some(NameDef::Binary(f)) => {
                    let [a, b] = args.as_slice() else {
                        return Err(format!("{name} expects 2 arguments, got {}", args.len()));
                    };
                    Ok(f(eval_expr(a, bindings)?, eval_expr(b, bindings)?))
                }
                Some(NameDef::Const(_)) => Err(format!("'{name}' is not a function")),
                None => Err(format!("name '{name}' is not allowed")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::EvalErrorKind;

    fn eval(input: &str) -> EvalResult {
        evaluate(input, &HashMap::new())
    }

    fn number(input: &str) -> f64 {
        match eval(input) {
            EvalResult::Number(v) => v,
            other => panic!("expected number for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn arithmetic() {
        assert_eq!(number("2+2"), 4.0);
        assert_eq!(number("10 - 4 / 2"), 8.0);
        assert_eq!(number("(10 - 4) / 2"), 3.0);
        assert_eq!(number("17 % 5"), 2.0);
    }

    #[test]
    fn caret_is_power_and_right_associative() {
        assert_eq!(number("2^10"), 1024.0);
        assert_eq!(number("2^3^2"), 512.0);
        assert_eq!(number("-2^2"), -4.0);
    }

    #[test]
    fn functions_and_constants() {
        assert_eq!(number("sin(0)"), 0.0);
        assert_eq!(number("sqrt(16)"), 4.0);
        assert!((number("cos(pi)") + 1.0).abs() < 1e-12);
        assert!((number("cos(π)") + 1.0).abs() < 1e-12);
        assert!((number("log(1000)") - 3.0).abs() < 1e-12);
        assert!((number("ln(e)") - 1.0).abs() < 1e-12);
        assert!((number("ln(E)") - 1.0).abs() < 1e-12);
        assert_eq!(number("pow(2, 10)"), 1024.0);
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(number("  1 +   2 * 3 "), 7.0);
    }

    #[test]
    fn division_by_zero_is_native_float_semantics() {
        assert_eq!(number("1/0"), f64::INFINITY);
        assert!(number("0/0").is_nan());
    }

    #[test]
    fn disallowed_names_reject_before_evaluation() {
        for input in ["__import__('os')", "open('x')", "system(1)", "foo+1"] {
            match eval(input) {
                EvalResult::Error(e) => {
                    assert_eq!(e.kind, EvalErrorKind::NameNotAllowed, "for {input:?}");
                }
                other => panic!("expected rejection for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn bindings_extend_the_namespace() {
        let mut bindings = HashMap::new();
        bindings.insert("ans".to_string(), 41.0);
        assert_eq!(evaluate("ans + 1", &bindings), EvalResult::Number(42.0));
        // Without the binding the same name is rejected.
        match eval("ans + 1") {
            EvalResult::Error(e) => assert_eq!(e.kind, EvalErrorKind::NameNotAllowed),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn syntax_errors_are_eval_errors() {
        for input in ["2+", "(1+2", "1 2", "", "1..2"] {
            match eval(input) {
                EvalResult::Error(e) => assert_eq!(e.kind, EvalErrorKind::EvalError, "{input:?}"),
                other => panic!("expected error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn wrong_arity_is_an_eval_error() {
        match eval("sin(1, 2)") {
            EvalResult::Error(e) => assert_eq!(e.kind, EvalErrorKind::EvalError),
            other => panic!("expected arity error, got {other:?}"),
        }
        match eval("pow(2)") {
            EvalResult::Error(e) => assert_eq!(e.kind, EvalErrorKind::EvalError),
            other => panic!("expected arity error, got {other:?}"),
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let first = eval("sin(1) + 2^0.5");
        let second = eval("sin(1) + 2^0.5");
        assert_eq!(first, second);
    }
}
