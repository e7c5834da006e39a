//! Domain-specific assertion macros for frax harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *what* query invariant was violated.

// ---------------------------------------------------------------------------
// Fraction result assertions
// ---------------------------------------------------------------------------

/// Assert that an `Option<Fraction>` is present with the expected numerator
/// and denominator.
///
/// ```rust
/// assert_fraction!(result, 5, 6);
/// ```
#[macro_export]
macro_rules! assert_fraction {
    ($result:expr, $numerator:expr, $denominator:expr) => {{
        let result: Option<frax_core::Fraction> = $result;
        match result {
            Some(actual) => {
                if actual.numerator != $numerator || actual.denominator != $denominator {
                    panic!(
                        "assert_fraction! failed:\n  expected: {}/{}\n  actual:   {}",
                        $numerator, $denominator, actual
                    );
                }
            }
            None => panic!(
                "assert_fraction! failed: expected {}/{}, got no value",
                $numerator, $denominator
            ),
        }
    }};
}

/// Assert that a query produced no value.
#[macro_export]
macro_rules! assert_no_value {
    ($result:expr) => {{
        let result: Option<frax_core::Fraction> = $result;
        if let Some(actual) = result {
            panic!("assert_no_value! failed: expected no value, got {}", actual);
        }
    }};
}

// ---------------------------------------------------------------------------
// Stream assertions
// ---------------------------------------------------------------------------

/// Assert that a string stream yields exactly the expected items, in order.
///
/// ```rust
/// assert_stream_eq!(searches.find_user_id_by_some_proper_fraction(), ["C", "E"]);
/// ```
#[macro_export]
macro_rules! assert_stream_eq {
    ($stream:expr, $expected:expr) => {{
        let actual: Vec<String> = $stream.collect();
        let expected: Vec<String> = $expected.iter().map(|s| s.to_string()).collect();
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

// ---------------------------------------------------------------------------
// Floating-point helpers
// ---------------------------------------------------------------------------

/// Assert two finite decimal values agree within floating-point tolerance.
pub fn assert_decimal_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "decimal mismatch: actual {actual}, expected {expected}"
    );
}
