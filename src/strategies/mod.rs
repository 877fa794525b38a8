//! The four LCS strategies and runtime selection between them.
//!
//! Each module implements [`LcsStrategy`](crate::traits::LcsStrategy) for a
//! unit struct:
//! - [`exhaustive`] : enumerate every subsequence of `a`, test each against `b`.
//! - [`naive`]      : trailing-character recursion without reuse.
//! - [`memoized`]   : the same recurrence with an `(i, j)` result cache.
//! - [`tabulation`] : bottom-up length table and backtracking.
//!
//! [`Strategy`] is the closed enum a harness uses to pick one by name.

pub mod exhaustive;
pub mod memoized;
pub mod naive;
pub mod tabulation;

use std::fmt;
use std::str::FromStr;

use crate::error::LcsError;
use crate::traits::LcsStrategy;

use self::exhaustive::Exhaustive;
use self::memoized::Memoized;
use self::naive::NaiveRecursive;
use self::tabulation::Tabulation;

/// Asymptotic family a strategy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityClass {
    Exponential,
    Polynomial,
}

impl ComplexityClass {
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityClass::Exponential => "exponential",
            ComplexityClass::Polynomial => "polynomial",
        }
    }
}

/// Runtime-selectable LCS strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Exhaustive,
    NaiveRecursive,
    Memoized,
    Tabulation,
}

impl Strategy {
    /// Every strategy, exponential ones first.
    pub const ALL: [Strategy; 4] = [
        Strategy::Exhaustive,
        Strategy::NaiveRecursive,
        Strategy::Memoized,
        Strategy::Tabulation,
    ];

    pub fn name(&self) -> &'static str {
        self.as_dyn().name()
    }

    pub fn complexity(&self) -> ComplexityClass {
        match self {
            Strategy::Exhaustive | Strategy::NaiveRecursive => ComplexityClass::Exponential,
            Strategy::Memoized | Strategy::Tabulation => ComplexityClass::Polynomial,
        }
    }

    /// Largest per-input length a caller should hand this strategy.
    ///
    /// Advisory only: the strategies never refuse input. `None` means no
    /// practical bound beyond memory for the (m+1)×(n+1) table.
    pub fn practical_limit(&self) -> Option<usize> {
        match self {
            Strategy::Exhaustive => Some(20),
            Strategy::NaiveRecursive => Some(12),
            Strategy::Memoized => Some(2_000),
            Strategy::Tabulation => None,
        }
    }

    /// Borrow the strategy as a trait object.
    pub fn as_dyn(&self) -> &'static dyn LcsStrategy {
        match self {
            Strategy::Exhaustive => &Exhaustive,
            Strategy::NaiveRecursive => &NaiveRecursive,
            Strategy::Memoized => &Memoized,
            Strategy::Tabulation => &Tabulation,
        }
    }

    pub fn solve(&self, a: &[char], b: &[char]) -> Vec<char> {
        self.as_dyn().solve(a, b)
    }

    pub fn solve_str(&self, a: &str, b: &str) -> String {
        self.as_dyn().solve_str(a, b)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = LcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "brute-force" => Ok(Strategy::Exhaustive),
            "naive" | "recursive" => Ok(Strategy::NaiveRecursive),
            "memoized" | "top-down" => Ok(Strategy::Memoized),
            "tabulation" | "bottom-up" => Ok(Strategy::Tabulation),
            _ => Err(LcsError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>().unwrap(), s);
            assert_eq!(s.to_string(), s.name());
        }
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert_eq!("Brute-Force".parse::<Strategy>().unwrap(), Strategy::Exhaustive);
        assert_eq!("recursive".parse::<Strategy>().unwrap(), Strategy::NaiveRecursive);
        assert_eq!(" TOP-DOWN ".parse::<Strategy>().unwrap(), Strategy::Memoized);
        assert_eq!("bottom-up".parse::<Strategy>().unwrap(), Strategy::Tabulation);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "greedy".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, LcsError::UnknownStrategy(ref n) if n == "greedy"));
    }

    #[test]
    fn complexity_split() {
        let exp: Vec<_> = Strategy::ALL
            .iter()
            .filter(|s| s.complexity() == ComplexityClass::Exponential)
            .collect();
        assert_eq!(exp, vec![&Strategy::Exhaustive, &Strategy::NaiveRecursive]);
    }

    #[test]
    fn complexity_labels() {
        assert_eq!(Strategy::Memoized.complexity().label(), "polynomial");
        assert_eq!(ComplexityClass::Exponential.label(), "exponential");
    }

    #[test]
    fn only_tabulation_is_unbounded() {
        for s in Strategy::ALL {
            assert_eq!(s.practical_limit().is_none(), s == Strategy::Tabulation);
        }
    }
}
