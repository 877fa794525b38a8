//! Error type for strategy selection and caller-side guards.
//!
//! The strategies themselves are total and never fail; errors only arise at the
//! edges: parsing a strategy name, enforcing a size envelope, or reading
//! command-line options in the probe binary.

use thiserror::Error;

use crate::strategies::Strategy;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcsError {
    /// The name does not match any strategy or alias.
    #[error("unknown strategy '{0}' (expected exhaustive, naive, memoized or tabulation)")]
    UnknownStrategy(String),

    /// An input is longer than the envelope configured for this engine.
    #[error("input of length {len} exceeds the {limit}-character envelope for {strategy}")]
    OutsideEnvelope {
        strategy: Strategy,
        len: usize,
        limit: usize,
    },

    /// Malformed command-line option.
    #[error("{0}")]
    InvalidOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = LcsError::OutsideEnvelope {
            strategy: Strategy::Exhaustive,
            len: 30,
            limit: 20,
        };
        assert_eq!(
            err.to_string(),
            "input of length 30 exceeds the 20-character envelope for exhaustive"
        );
        assert!(LcsError::UnknownStrategy("x".into())
            .to_string()
            .starts_with("unknown strategy 'x'"));
    }
}
