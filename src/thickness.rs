//! This module contains the symmetric thickness envelope shared by the 4-digit and 5-digit
//! series, the half-width added perpendicular to the camber line to form the two surfaces.

use serde::{Deserialize, Serialize};

/// The x^4 coefficient of the thickness polynomial for the historical open trailing edge.
const OPEN_QUARTIC: f64 = -0.1015;

/// The x^4 coefficient variant which closes the trailing edge to exactly zero thickness.
const CLOSED_QUARTIC: f64 = -0.1036;

/// Enumerates the two trailing edge conventions of the thickness polynomial. The open form
/// is the historical standard and leaves a small finite thickness at the trailing edge; the
/// closed form substitutes the quartic coefficient so the thickness tapers to exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailingEdge {
    Open,
    Closed,
}

impl Default for TrailingEdge {
    fn default() -> Self {
        TrailingEdge::Open
    }
}

/// The symmetric thickness distribution of a section, evaluated as a half-width
/// perpendicular to the camber line at each chordwise station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessDistribution {
    t: f64,
    quartic: f64,
}

impl ThicknessDistribution {
    /// Create a thickness distribution with the historical open trailing edge.
    ///
    /// # Arguments
    ///
    /// * `thickness`: the maximum thickness of the section as a fraction of the chord
    ///
    /// returns: ThicknessDistribution
    pub fn new(thickness: f64) -> Self {
        Self::with_trailing_edge(thickness, TrailingEdge::Open)
    }

    /// Create a thickness distribution with an explicit trailing edge convention.
    ///
    /// # Arguments
    ///
    /// * `thickness`: the maximum thickness of the section as a fraction of the chord
    /// * `trailing_edge`: the trailing edge convention to use
    ///
    /// returns: ThicknessDistribution
    pub fn with_trailing_edge(thickness: f64, trailing_edge: TrailingEdge) -> Self {
        let quartic = match trailing_edge {
            TrailingEdge::Open => OPEN_QUARTIC,
            TrailingEdge::Closed => CLOSED_QUARTIC,
        };
        Self { t: thickness, quartic }
    }

    /// Evaluate the half-width of the section at a single chordwise position. The value is
    /// zero at the leading edge, and at the trailing edge it is a small finite value for
    /// the open convention or exactly zero for the closed convention.
    ///
    /// # Arguments
    ///
    /// * `x`: the chordwise position as a fraction of the chord, from 0.0 to 1.0
    ///
    /// returns: f64
    pub fn half_width(&self, x: f64) -> f64 {
        5.0 * self.t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x.powi(3)
                + self.quartic * x.powi(4))
    }

    /// Evaluate the half-width at every station in a chordwise station sequence.
    ///
    /// # Arguments
    ///
    /// * `stations`: the ordered chordwise stations to sample at
    ///
    /// returns: Vec<f64, Global>
    pub fn sample(&self, stations: &[f64]) -> Vec<f64> {
        stations.iter().map(|&x| self.half_width(x)).collect()
    }
}
