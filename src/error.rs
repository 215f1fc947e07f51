//! Error types.

/// Errors raised when building an [`AliasTable`](crate::AliasTable) or a
/// [`BiasedBitSource`](crate::BiasedBitSource).
///
/// All of them are raised synchronously at construction time. Sampling and
/// buffer filling never fail once a table or bit source exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The probability vector has no entries.
    #[error("probability vector is empty")]
    Empty,

    /// An entry is negative, NaN, or infinite.
    #[error("probability at index {index} must be finite and >= 0 (got {value})")]
    InvalidProbability {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The probabilities do not add up to 1 within [`SUM_TOLERANCE`](crate::SUM_TOLERANCE).
    #[error("probabilities do not add to 1 (residual {residual:e})")]
    InvalidDistribution {
        /// `1 - sum(p)`.
        residual: f64,
    },

    /// A bit-source bias outside `[0, 1]`.
    #[error("bias must be in [0, 1] (got {pr_one})")]
    InvalidBias {
        /// The rejected bias.
        pr_one: f64,
    },
}

impl Error {
    /// True for every variant describing a malformed probability vector.
    pub fn is_invalid_distribution(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::InvalidProbability { .. } | Self::InvalidDistribution { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_residual() {
        let err = Error::InvalidDistribution { residual: 0.1 };
        assert!(err.to_string().contains("1e-1"), "{err}");
        assert!(err.is_invalid_distribution());
        assert!(!Error::InvalidBias { pr_one: 2.0 }.is_invalid_distribution());
    }
}
