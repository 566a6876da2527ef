// src/error.rs
use std::fmt;
use std::io;

/// Failures that end a valuation run.
///
/// Persistence failures are not part of this type: the shell reports them and
/// carries on, see `handlers::valuation`.
#[derive(Debug)]
pub enum ValuationError {
    /// Text could not be converted to the field's type.
    InvalidInput { field: &'static str, input: String },
    /// Input ended before the field was answered.
    MissingInput { field: &'static str },
    /// A formula hit a zero divisor.
    DivisionByZero { step: &'static str },
    /// A projection too long to use as a discounting exponent.
    HorizonOutOfRange { periods: usize },
    Io(io::Error),
}

impl ValuationError {
    pub fn invalid_input(field: &'static str, input: impl Into<String>) -> Self {
        ValuationError::InvalidInput {
            field,
            input: input.into(),
        }
    }
}

impl fmt::Display for ValuationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValuationError::InvalidInput { field, input } => {
                write!(f, "could not convert {:?} to {}", input, field)
            }
            ValuationError::MissingInput { field } => {
                write!(f, "input ended before {} was entered", field)
            }
            ValuationError::DivisionByZero { step } => {
                write!(f, "division by zero while computing {}", step)
            }
            ValuationError::HorizonOutOfRange { periods } => {
                write!(f, "projection of {} periods is too long to discount", periods)
            }
            ValuationError::Io(e) => write!(f, "console I/O failed: {}", e),
        }
    }
}

impl std::error::Error for ValuationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValuationError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ValuationError {
    fn from(e: io::Error) -> Self {
        ValuationError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = ValuationError::invalid_input("growth rate", "five");
        assert_eq!(err.to_string(), "could not convert \"five\" to growth rate");
    }

    #[test]
    fn test_display_division_by_zero() {
        let err = ValuationError::DivisionByZero { step: "terminal value" };
        assert_eq!(err.to_string(), "division by zero while computing terminal value");
    }

    #[test]
    fn test_io_error_is_source() {
        use std::error::Error;
        let err = ValuationError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.source().is_some());
    }
}
