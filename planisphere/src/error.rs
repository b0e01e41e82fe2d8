use thiserror::Error;

pub type ProjResult<T> = Result<T, ProjError>;

#[derive(Debug, Error)]
pub enum ProjError {
    #[error("Convergence failure: {message}")]
    ConvergenceFailure { message: String },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl ProjError {
    pub fn convergence_failure(message: impl Into<String>) -> Self {
        Self::ConvergenceFailure {
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convergence_failure() {
        let err = ProjError::convergence_failure("Mollweide forward: derivative too small");
        assert!(err.to_string().contains("Mollweide forward"));
        assert!(err.to_string().contains("Convergence failure"));
    }

    #[test]
    fn test_invalid_parameter() {
        let err = ProjError::invalid_parameter("table columns differ in length");
        assert!(err.to_string().contains("table columns"));
    }
}
