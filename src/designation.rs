//! This module contains the parsing of NACA designation codes into the geometric parameters
//! which drive the camber and thickness calculations.

use crate::Result;
use crate::errors::InvalidAirfoil;
use serde::{Deserialize, Serialize};

/// The mean line constants associated with a 5-digit series camber line. Normal camber
/// lines carry the position constant `m` and the scale constant `k1`; reflex camber lines
/// additionally carry the ratio `k2/k1` which controls the upward curl of the aft portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanLineConstants {
    /// The chordwise position constant of the camber line, a fraction of the chord.
    pub m: f64,

    /// The scale constant of the camber line.
    pub k1: f64,

    /// The ratio k2/k1, present only for reflex camber lines.
    pub k2_over_k1: Option<f64>,
}

/// The fixed set of supported 5-digit mean lines, keyed by the first three digits of the
/// designation. Prefixes ending in 1 are the reflex variants.
const MEAN_LINE_TABLE: [(u32, MeanLineConstants); 9] = [
    (210, MeanLineConstants { m: 0.0580, k1: 361.400, k2_over_k1: None }),
    (220, MeanLineConstants { m: 0.1260, k1: 51.640, k2_over_k1: None }),
    (221, MeanLineConstants { m: 0.1300, k1: 51.990, k2_over_k1: Some(0.000764) }),
    (230, MeanLineConstants { m: 0.2025, k1: 15.957, k2_over_k1: None }),
    (231, MeanLineConstants { m: 0.2170, k1: 15.793, k2_over_k1: Some(0.00677) }),
    (240, MeanLineConstants { m: 0.2900, k1: 6.643, k2_over_k1: None }),
    (241, MeanLineConstants { m: 0.3180, k1: 6.520, k2_over_k1: Some(0.0303) }),
    (250, MeanLineConstants { m: 0.3910, k1: 3.230, k2_over_k1: None }),
    (251, MeanLineConstants { m: 0.4410, k1: 3.191, k2_over_k1: Some(0.1355) }),
];

/// Look up the mean line constants for a 5-digit designation prefix. Will return `None` if
/// the prefix is not one of the supported mean lines.
///
/// # Arguments
///
/// * `prefix`: the first three digits of a 5-digit designation, as an integer
///
/// returns: Option<MeanLineConstants>
pub fn mean_line_constants(prefix: u32) -> Option<MeanLineConstants> {
    MEAN_LINE_TABLE
        .iter()
        .find(|(key, _)| *key == prefix)
        .map(|(_, constants)| *constants)
}

/// A designation is the decoded, immutable form of a NACA code string. It holds the
/// geometric parameters named by the digits of the code, with all fractions normalized to
/// the unit chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Designation {
    /// A 4-digit series section, such as "2412" or "0015".
    FourDigit {
        /// The maximum camber as a fraction of the chord (first digit / 100).
        max_camber: f64,

        /// The chordwise location of the maximum camber (second digit / 10).
        camber_position: f64,

        /// The maximum thickness as a fraction of the chord (last two digits / 100).
        thickness: f64,
    },

    /// A 5-digit series section, such as "23012" or "23112".
    FiveDigit {
        /// The design lift coefficient (first digit * 3/20).
        design_cl: f64,

        /// The mean line constants resolved from the 3-digit prefix. A reflex camber line
        /// is indicated by the presence of the `k2_over_k1` ratio.
        constants: MeanLineConstants,

        /// The maximum thickness as a fraction of the chord (last two digits / 100).
        thickness: f64,
    },
}

impl Designation {
    /// Decode a NACA designation string into its geometric parameters. The family is
    /// detected from the string length: four digits decode to the 4-digit series, five
    /// digits to the 5-digit series.
    ///
    /// A string which is not made of exactly 4 or 5 decimal digits fails with
    /// `InvalidDesignation`. A 5-digit string whose 3-digit prefix has no entry in the mean
    /// line constants table fails with `UnsupportedDesignation`.
    ///
    /// # Arguments
    ///
    /// * `code`: the designation string, such as "2412" or "23012"
    ///
    /// returns: Result<Designation, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::Designation;
    /// let designation = Designation::parse("2412").unwrap();
    /// assert_eq!(designation.thickness(), 0.12);
    /// ```
    pub fn parse(code: &str) -> Result<Designation> {
        if (code.len() != 4 && code.len() != 5) || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidAirfoil::InvalidDesignation(code.to_string()).into());
        }

        let digits: Vec<u32> = code.bytes().map(|b| u32::from(b - b'0')).collect();

        if digits.len() == 4 {
            Ok(Designation::FourDigit {
                max_camber: f64::from(digits[0]) / 100.0,
                camber_position: f64::from(digits[1]) / 10.0,
                thickness: f64::from(digits[2] * 10 + digits[3]) / 100.0,
            })
        } else {
            let prefix = digits[0] * 100 + digits[1] * 10 + digits[2];
            let constants = mean_line_constants(prefix)
                .ok_or_else(|| InvalidAirfoil::UnsupportedDesignation(code.to_string()))?;

            Ok(Designation::FiveDigit {
                design_cl: f64::from(digits[0]) * 3.0 / 20.0,
                constants,
                thickness: f64::from(digits[3] * 10 + digits[4]) / 100.0,
            })
        }
    }

    /// The maximum thickness of the section as a fraction of the chord.
    pub fn thickness(&self) -> f64 {
        match self {
            Designation::FourDigit { thickness, .. } | Designation::FiveDigit { thickness, .. } => {
                *thickness
            }
        }
    }
}
