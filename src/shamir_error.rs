use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("Fraction has a zero denominator")]
    InvalidFraction,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Interpolation basis contains a repeated x coordinate")]
    DegenerateSubset,
    #[error("Invalid threshold")]
    InvalidThreshold,
    #[error("Too few shares")]
    TooFewShares,
    #[error("No consistent polynomial found")]
    ReconstructionFailed,
}

pub type Result<T> = std::result::Result<T, ShamirError>;

#[cfg(test)]
mod tests {
    use super::ShamirError;

    #[test]
    fn test_display() {
        assert_eq!(ShamirError::InvalidThreshold.to_string(), "Invalid threshold");
        assert_eq!(ShamirError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            ShamirError::ReconstructionFailed.to_string(),
            "No consistent polynomial found"
        );
    }
}
