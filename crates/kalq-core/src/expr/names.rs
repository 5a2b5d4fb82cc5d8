//! The allow-list of names visible to sandboxed evaluation.
//!
//! This is a statically declared table, not a reflective sweep over some
//! math namespace: a name evaluates only if it appears here or in the
//! per-call bindings.

use std::f64::consts;

/// What an allow-listed identifier resolves to.
#[derive(Clone, Copy)]
pub enum NameDef {
    Const(f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

/// Resolves an identifier against the static table.
pub fn lookup(name: &str) -> Option<NameDef> {
    Some(match name {
        "pi" | "π" => NameDef::Const(consts::PI),
        "e" | "E" => NameDef::Const(consts::E),

        "sin" => NameDef::Unary(f64::sin),
        "cos" => NameDef::Unary(f64::cos),
        "tan" => NameDef::Unary(f64::tan),
        "asin" => NameDef::Unary(f64::asin),
        "acos" => NameDef::Unary(f64::acos),
        "atan" => NameDef::Unary(f64::atan),
        "sinh" => NameDef::Unary(f64::sinh),
        "cosh" => NameDef::Unary(f64::cosh),
        "tanh" => NameDef::Unary(f64::tanh),
        "sqrt" => NameDef::Unary(f64::sqrt),
        // log is the base-10 logarithm; ln is the natural one.
        "log" => NameDef::Unary(f64::log10),
        "ln" => NameDef::Unary(f64::ln),
        "exp" => NameDef::Unary(f64::exp),
        "abs" => NameDef::Unary(f64::abs),
        "floor" => NameDef::Unary(f64::floor),
        "ceil" => NameDef::Unary(f64::ceil),
        "round" => NameDef::Unary(f64::round),

        "pow" => NameDef::Binary(f64::powf),
        "atan2" => NameDef::Binary(f64::atan2),
        "min" => NameDef::Binary(f64::min),
        "max" => NameDef::Binary(f64::max),

        _ => return None,
    })
}

/// Returns true if the identifier is in the static table.
pub fn is_allowed(name: &str) -> bool {
    lookup(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_resolve() {
        assert!(matches!(lookup("pi"), Some(NameDef::Const(v)) if v == std::f64::consts::PI));
        assert!(matches!(lookup("π"), Some(NameDef::Const(_))));
        assert!(matches!(lookup("E"), Some(NameDef::Const(v)) if v == std::f64::consts::E));
    }

    #[test]
    fn ambient_facilities_are_absent() {
        for name in ["__import__", "open", "eval", "exec", "os", "system"] {
            assert!(!is_allowed(name), "{name} must not be allow-listed");
        }
    }

    #[test]
    fn log_is_base_ten() {
        let Some(NameDef::Unary(log)) = lookup("log") else {
            panic!("log missing");
        };
        assert!((log(100.0) - 2.0).abs() < 1e-12);
    }
}
