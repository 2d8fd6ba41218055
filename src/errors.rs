use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures which can occur while constructing an airfoil section. All of these
/// are detected before any geometric computation begins, so a failed construction never
/// yields a partial outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidAirfoil {
    /// The designation string was not made of exactly 4 or 5 decimal digits.
    InvalidDesignation(String),

    /// A well-formed 5-digit designation whose 3-digit prefix has no entry in the mean
    /// line constants table.
    UnsupportedDesignation(String),

    /// The requested number of chordwise stations was less than two.
    InvalidPointCount(usize),
}

impl Display for InvalidAirfoil {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidAirfoil::InvalidDesignation(code) => {
                write!(f, "Invalid designation '{}': expected 4 or 5 decimal digits", code)
            }
            InvalidAirfoil::UnsupportedDesignation(code) => {
                write!(
                    f,
                    "Unsupported designation '{}': no mean line constants for this prefix",
                    code
                )
            }
            InvalidAirfoil::InvalidPointCount(count) => {
                write!(f, "Invalid point count {}: at least two stations are required", count)
            }
        }
    }
}

impl Error for InvalidAirfoil {}
