//! Core types for frax-core.
//!
//! This module defines the two fundamental data structures shared across all
//! layers: the [`Fraction`] value and the [`User`] roster record.

use serde::{Deserialize, Serialize};

/// A rational value as a plain numerator/denominator pair.
///
/// Nothing is enforced at construction: zero denominators and negative
/// values in either slot are legal, and every operation accepts them.
/// Results are never reduced to lowest terms — `2/2 + 4/4` stays `16/8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Floating-point value of the fraction.
    ///
    /// Division follows IEEE-754 rather than failing: `3/0` is `+∞`,
    /// `-3/0` is `-∞`, and `0/0` is `NaN`.
    pub fn decimal(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// `true` iff the numerator's magnitude is strictly below the
    /// denominator's. Signs only matter through their magnitude.
    pub fn is_proper(self) -> bool {
        self.numerator.unsigned_abs() < self.denominator.unsigned_abs()
    }

    /// `true` iff the numerator's magnitude is at least the denominator's.
    ///
    /// Tested independently of [`is_proper`](Self::is_proper): equal
    /// magnitudes (`2/2`, `-4/-4`) classify as improper.
    pub fn is_improper(self) -> bool {
        self.numerator.unsigned_abs() >= self.denominator.unsigned_abs()
    }

    /// Cross-multiplication equivalence: `2/4` is equivalent to `1/2`.
    ///
    /// Zero and negative denominators go through the same integer
    /// arithmetic with no special-casing.
    pub fn is_equivalent(self, other: Fraction) -> bool {
        self.numerator * other.denominator == other.numerator * self.denominator
    }

    /// Sum over the common (multiplied) denominator, unreduced:
    /// `1/2 + 1/3` is `5/6`, `2/2 + 4/4` is `16/8`.
    pub fn add(self, other: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }

    /// Product of numerators over product of denominators, unreduced.
    pub fn multiply(self, other: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }

    /// Multiplication by the reciprocal. Dividing by a zero-numerator
    /// fraction yields a zero denominator; that value is still valid and
    /// its [`decimal`](Self::decimal) follows the IEEE-754 table.
    pub fn divide(self, other: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * other.denominator,
            self.denominator * other.numerator,
        )
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A roster record: identity fields plus an ordered list of fraction
/// entries, some of which may be absent.
///
/// `fractions` itself is always present; a `None` entry means "no value
/// recorded" and is skipped by every query fold. Entry order is the order
/// queries flatten in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier, compared with exact string equality.
    pub id: String,
    pub given_name: String,
    pub family_name: String,
    /// Ordered fraction entries; `None` marks an absent value.
    #[serde(default)]
    pub fractions: Vec<Option<Fraction>>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        fractions: Vec<Option<Fraction>>,
    ) -> Self {
        Self {
            id: id.into(),
            given_name: given_name.into(),
            family_name: family_name.into(),
            fractions,
        }
    }

    /// Append an entry — present or absent — after the existing ones.
    pub fn add_fraction(&mut self, fraction: Option<Fraction>) {
        self.fractions.push(fraction);
    }

    /// Given name and family name joined by a single space. No validation;
    /// empty fields stay empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// First character of the given name followed by a period.
    ///
    /// An empty given name yields the empty string.
    pub fn initials(&self) -> String {
        self.given_name
            .chars()
            .next()
            .map(|c| format!("{c}."))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} [fractions:", self.given_name, self.family_name)?;
        for (i, entry) in self.fractions.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            match entry {
                Some(fraction) => write!(f, "{sep}{fraction}")?,
                None => write!(f, "{sep}?")?,
            }
        }
        write!(f, "]")
    }
}
