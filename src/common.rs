//! This module contains common numerical constructs for generating the chordwise station
//! sequences over which an airfoil section is sampled.

use crate::Result;
use crate::errors::InvalidAirfoil;
use std::f64::consts::PI;

/// Enumerates the two chordwise spacing distributions available when sampling an airfoil
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Stations are evenly spaced along the chord.
    Linear,

    /// Stations follow a half-cosine distribution, packing more points toward the leading
    /// edge (x=0) where the surface curvature is highest.
    HalfCosine,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::HalfCosine
    }
}

/// Generate a vec of domain values which are linearly spaced between `start` and `end` and
/// which have a count of `count`. The first value will be `start` and the last value will be
/// `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `count`: the total number of discrete, evenly spaced values in the domain
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use nacafoil::common::linear_space;
/// let domain = linear_space(0.0, 1.0, 3);
/// assert_eq!(domain, vec![0.0, 0.5, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(count);
    let span = end - start;
    // Each value is computed as a fraction of the span so that the last value lands
    // exactly on `end`.
    for i in 0..count {
        result.push(start + span * (i as f64 / (count - 1) as f64));
    }
    result
}

/// Generate a vec of domain values between `start` and `end` which follow a half-cosine
/// distribution, with a count of `count`. The values are the images of an evenly spaced
/// sweep of [0, pi] under `(1 - cos)/2`, so they cluster toward the ends of the domain.
/// The first value will be exactly `start` and the last exactly `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `count`: the total number of discrete values in the domain
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use nacafoil::common::cosine_space;
/// let domain = cosine_space(0.0, 1.0, 5);
/// assert_eq!(domain[0], 0.0);
/// assert_eq!(domain[4], 1.0);
/// ```
pub fn cosine_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(count);
    let span = end - start;
    for i in 0..count {
        let beta = i as f64 * PI / (count - 1) as f64;
        result.push(start + span * 0.5 * (1.0 - beta.cos()));
    }
    result
}

/// Generate the ordered sequence of normalized chordwise stations used to sample an airfoil
/// section. The sequence is strictly increasing, starts at exactly 0.0 and ends at exactly
/// 1.0, and has a total length of `count`.
///
/// # Arguments
///
/// * `count`: the total number of stations, which must be at least 2
/// * `spacing`: the spacing distribution to use
///
/// returns: Result<Vec<f64, Global>, Box<dyn Error, Global>>
///
/// # Examples
///
/// ```
/// use nacafoil::common::chord_stations;
/// use nacafoil::Spacing;
/// let stations = chord_stations(5, Spacing::Linear).unwrap();
/// assert_eq!(stations, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn chord_stations(count: usize, spacing: Spacing) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(InvalidAirfoil::InvalidPointCount(count).into());
    }

    let stations = match spacing {
        Spacing::Linear => linear_space(0.0, 1.0, count),
        Spacing::HalfCosine => cosine_space(0.0, 1.0, count),
    };

    Ok(stations)
}
