//! This module contains the mean camber line models for the 4-digit and 5-digit series.
//! Each model is a pure function from a chordwise position to the height of the camber
//! line above the chord and its local slope.

use crate::designation::Designation;
use serde::{Deserialize, Serialize};

/// A sample of the mean camber line at a single chordwise station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CamberPoint {
    /// The height of the camber line above the chord line.
    pub y: f64,

    /// The slope of the camber line with respect to the chordwise position.
    pub slope: f64,
}

/// The mean camber line of an airfoil section, dispatched once at construction into one of
/// the closed set of analytic models. Every variant implements the same station to
/// (height, slope) contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeanLine {
    /// The 4-digit series camber line, two quadratic arcs meeting at the position of
    /// maximum camber. A camber position of zero denotes a symmetric section.
    FourDigit { m: f64, p: f64 },

    /// The 5-digit series camber line, a cubic forward of the position constant and a
    /// straight line aft of it.
    FiveDigit { m: f64, k1: f64 },

    /// The reflex variant of the 5-digit camber line, where the aft portion curls upward.
    FiveDigitReflex { m: f64, k1: f64, k2_over_k1: f64 },
}

impl MeanLine {
    /// Build the mean camber line model named by a decoded designation. For the 5-digit
    /// series the reflex variant is selected when the resolved mean line constants carry a
    /// k2/k1 ratio.
    ///
    /// # Arguments
    ///
    /// * `designation`: the decoded designation to build the model from
    ///
    /// returns: MeanLine
    pub fn from_designation(designation: &Designation) -> MeanLine {
        match designation {
            Designation::FourDigit { max_camber, camber_position, .. } => MeanLine::FourDigit {
                m: *max_camber,
                p: *camber_position,
            },
            Designation::FiveDigit { constants, .. } => match constants.k2_over_k1 {
                Some(ratio) => MeanLine::FiveDigitReflex {
                    m: constants.m,
                    k1: constants.k1,
                    k2_over_k1: ratio,
                },
                None => MeanLine::FiveDigit {
                    m: constants.m,
                    k1: constants.k1,
                },
            },
        }
    }

    /// Evaluate the camber line height and slope at a single chordwise position.
    ///
    /// # Arguments
    ///
    /// * `x`: the chordwise position as a fraction of the chord, from 0.0 to 1.0
    ///
    /// returns: CamberPoint
    pub fn point(&self, x: f64) -> CamberPoint {
        match *self {
            MeanLine::FourDigit { m, p } => four_digit_point(x, m, p),
            MeanLine::FiveDigit { m, k1 } => five_digit_point(x, m, k1),
            MeanLine::FiveDigitReflex { m, k1, k2_over_k1 } => {
                reflex_point(x, m, k1, k2_over_k1)
            }
        }
    }

    /// Evaluate the camber line at every station in a chordwise station sequence.
    ///
    /// # Arguments
    ///
    /// * `stations`: the ordered chordwise stations to sample at
    ///
    /// returns: Vec<CamberPoint, Global>
    pub fn sample(&self, stations: &[f64]) -> Vec<CamberPoint> {
        stations.iter().map(|&x| self.point(x)).collect()
    }
}

fn four_digit_point(x: f64, m: f64, p: f64) -> CamberPoint {
    // A camber position of zero is a symmetric section, where the camber line is the
    // chord line itself.
    if p == 0.0 {
        return CamberPoint { y: 0.0, slope: 0.0 };
    }

    if x < p {
        CamberPoint {
            y: (m / (p * p)) * (2.0 * p * x - x * x),
            slope: (2.0 * m / (p * p)) * (p - x),
        }
    } else {
        let aft = 1.0 - p;
        CamberPoint {
            y: (m / (aft * aft)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x),
            slope: (2.0 * m / (aft * aft)) * (p - x),
        }
    }
}

fn five_digit_point(x: f64, m: f64, k1: f64) -> CamberPoint {
    if x < m {
        CamberPoint {
            y: (k1 / 6.0) * (x.powi(3) - 3.0 * m * x * x + m * m * (3.0 - m) * x),
            slope: (k1 / 6.0) * (3.0 * x * x - 6.0 * m * x + m * m * (3.0 - m)),
        }
    } else {
        // Aft of the position constant the camber line is a straight taper to zero at the
        // trailing edge.
        CamberPoint {
            y: (k1 * m.powi(3) / 6.0) * (1.0 - x),
            slope: -(k1 * m.powi(3)) / 6.0,
        }
    }
}

fn reflex_point(x: f64, m: f64, k1: f64, r: f64) -> CamberPoint {
    let aft_cubed = (1.0 - m).powi(3);
    let m_cubed = m.powi(3);

    if x < m {
        CamberPoint {
            y: (k1 / 6.0) * ((x - m).powi(3) - r * aft_cubed * x - m_cubed * x + m_cubed),
            slope: (k1 / 6.0) * (3.0 * (x - m) * (x - m) - r * aft_cubed - m_cubed),
        }
    } else {
        CamberPoint {
            y: (k1 / 6.0) * (r * (x - m).powi(3) - r * aft_cubed * x - m_cubed * x + m_cubed),
            slope: (k1 / 6.0) * (3.0 * r * (x - m) * (x - m) - r * aft_cubed - m_cubed),
        }
    }
}
