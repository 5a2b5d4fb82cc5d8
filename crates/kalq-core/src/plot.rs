//! Function sampling for the ASCII plot overlay.
//!
//! The presentation layer decides the sample count and x-range from the
//! screen size; this module only evaluates `f(x)` at each point with `x`
//! bound in the sandbox. Points that fail to evaluate (or go non-finite)
//! sample as `None` and are simply not drawn.

use std::collections::HashMap;

use crate::expr;
use crate::result::EvalResult;

/// One sampled point of the plotted function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

/// Samples `expression` at `count` evenly spaced points over `[x_min, x_max]`.
pub fn sample(expression: &str, count: usize, x_min: f64, x_max: f64) -> Vec<Sample> {
    if count == 0 {
        return Vec::new();
    }

    let step = if count > 1 {
        (x_max - x_min) / (count - 1) as f64
    } else {
        0.0
    };

    (0..count)
        .map(|i| {
            let x = x_min + step * i as f64;
            let mut bindings = HashMap::new();
            bindings.insert("x".to_string(), x);
            let y = match expr::evaluate(expression, &bindings) {
                EvalResult::Number(v) if v.is_finite() => Some(v),
                _ => None,
            };
            Sample { x, y }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_samples_follow_x() {
        let samples = sample("x", 5, -2.0, 2.0);
        assert_eq!(samples.len(), 5);
        for s in &samples {
            assert_eq!(s.y, Some(s.x));
        }
        assert_eq!(samples[0].x, -2.0);
        assert_eq!(samples[4].x, 2.0);
    }

    #[test]
    fn failing_points_sample_as_none() {
        // sqrt of a negative is NaN, so the left half of the range is empty.
        let samples = sample("sqrt(x)", 3, -1.0, 1.0);
        assert_eq!(samples[0].y, None);
        assert_eq!(samples[2].y, Some(1.0));
    }

    #[test]
    fn disallowed_names_never_evaluate() {
        let samples = sample("open(x)", 3, 0.0, 1.0);
        assert!(samples.iter().all(|s| s.y.is_none()));
    }
}
