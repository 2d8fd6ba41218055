//! This module contains the assembly of camber and thickness samples into the upper and
//! lower surfaces of an airfoil section, and the `Airfoil` value which owns the finished
//! outline.

use crate::camber::{CamberPoint, MeanLine};
use crate::common::{Spacing, chord_stations};
use crate::designation::Designation;
use crate::thickness::{ThicknessDistribution, TrailingEdge};
use crate::{Aabb2, Point2, Result};
use itertools::izip;
use serde::{Deserialize, Serialize};

/// This structure contains the parameters used when generating an airfoil section. The
/// defaults match the common plotting configuration: 200 stations per surface with
/// half-cosine spacing and the historical open trailing edge.
#[derive(Debug, Clone, Copy)]
pub struct GenParams {
    /// The number of chordwise stations sampled on each surface, at least 2.
    pub num_points: usize,

    /// The chordwise spacing distribution of the stations.
    pub spacing: Spacing,

    /// The trailing edge convention of the thickness envelope.
    pub trailing_edge: TrailingEdge,
}

impl Default for GenParams {
    fn default() -> Self {
        GenParams {
            num_points: 200,
            spacing: Spacing::HalfCosine,
            trailing_edge: TrailingEdge::Open,
        }
    }
}

/// A generated airfoil section. The outline is one continuous path which runs from the
/// trailing edge along the upper surface to the leading edge, then back along the lower
/// surface to the trailing edge. Once constructed the value is immutable, so it is safe to
/// share between threads for concurrent reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airfoil {
    designation: String,
    stations: Vec<f64>,
    points: Vec<Point2>,
}

impl Airfoil {
    /// Generate an airfoil section from a designation string using the default generation
    /// parameters (200 stations, half-cosine spacing, open trailing edge).
    ///
    /// # Arguments
    ///
    /// * `code`: the NACA designation string, such as "2412" or "23012"
    ///
    /// returns: Result<Airfoil, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::Airfoil;
    /// let foil = Airfoil::new("2412").unwrap();
    /// assert_eq!(foil.points().len(), 399);
    /// ```
    pub fn new(code: &str) -> Result<Airfoil> {
        Self::with_params(code, &GenParams::default())
    }

    /// Generate an airfoil section from a designation string with explicit generation
    /// parameters. All input validation happens before any geometry is computed, so a
    /// failure never yields a partial outline.
    ///
    /// # Arguments
    ///
    /// * `code`: the NACA designation string, such as "2412" or "23012"
    /// * `params`: the generation parameters
    ///
    /// returns: Result<Airfoil, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::{Airfoil, GenParams, Spacing};
    /// let params = GenParams { num_points: 5, spacing: Spacing::Linear, ..GenParams::default() };
    /// let foil = Airfoil::with_params("0012", &params).unwrap();
    /// assert_eq!(foil.points().len(), 9);
    /// ```
    pub fn with_params(code: &str, params: &GenParams) -> Result<Airfoil> {
        let designation = Designation::parse(code)?;
        let stations = chord_stations(params.num_points, params.spacing)?;

        let mean_line = MeanLine::from_designation(&designation);
        let thickness =
            ThicknessDistribution::with_trailing_edge(designation.thickness(), params.trailing_edge);

        let camber = mean_line.sample(&stations);
        let half_widths = thickness.sample(&stations);
        let points = assemble_outline(&stations, &camber, &half_widths);

        Ok(Airfoil {
            designation: code.to_string(),
            stations,
            points,
        })
    }

    /// The designation string this section was generated from.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// The chordwise stations used to sample the mean line and thickness, in increasing
    /// order from 0.0 to 1.0.
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    /// The ordered outline of the section, running from the trailing edge of the upper
    /// surface to the leading edge and back to the trailing edge of the lower surface. The
    /// leading edge point appears exactly once.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The x coordinates of the outline, in path order.
    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The y coordinates of the outline, in path order.
    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// The axis aligned bounding box of the outline.
    pub fn bounds(&self) -> Aabb2 {
        let mut mins = self.points[0];
        let mut maxs = self.points[0];
        for p in &self.points {
            mins = Point2::new(mins.x.min(p.x), mins.y.min(p.y));
            maxs = Point2::new(maxs.x.max(p.x), maxs.y.max(p.y));
        }
        Aabb2::new(mins, maxs)
    }
}

/// Combine the chordwise stations, camber samples, and thickness half-widths into the
/// section outline. The half-width is applied perpendicular to the camber line, so each
/// surface point is offset from the station along the local camber normal.
///
/// # Arguments
///
/// * `stations`: the ordered chordwise stations
/// * `camber`: the camber line samples, one per station
/// * `half_widths`: the thickness half-widths, one per station
///
/// returns: Vec<OPoint<f64, Const<2>>, Global>
fn assemble_outline(stations: &[f64], camber: &[CamberPoint], half_widths: &[f64]) -> Vec<Point2> {
    let mut upper = Vec::with_capacity(stations.len());
    let mut lower = Vec::with_capacity(stations.len());

    for (&x, c, &yt) in izip!(stations, camber, half_widths) {
        let theta = c.slope.atan();
        upper.push(Point2::new(x - yt * theta.sin(), c.y + yt * theta.cos()));
        lower.push(Point2::new(x + yt * theta.sin(), c.y - yt * theta.cos()));
    }

    // The path runs down the upper surface from the trailing edge, through the leading
    // edge, and back along the lower surface. The leading edge point is shared by both
    // surfaces, so the lower pass starts at the second station.
    upper.iter().rev().chain(lower.iter().skip(1)).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidAirfoil;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    fn params(num_points: usize, spacing: Spacing) -> GenParams {
        GenParams { num_points, spacing, ..GenParams::default() }
    }

    #[test]
    fn outline_has_expected_length() {
        let foil = Airfoil::new("2412").unwrap();
        assert_eq!(foil.points().len(), 399);
        assert_eq!(foil.stations().len(), 200);
        assert_eq!(foil.x_coords().len(), foil.y_coords().len());
    }

    #[test]
    fn outline_starts_and_ends_at_the_trailing_edge() {
        let foil = Airfoil::new("2412").unwrap();
        let first = foil.points().first().unwrap();
        let last = foil.points().last().unwrap();
        assert_relative_eq!(first.x, 1.0, epsilon = 1e-3);
        assert_relative_eq!(last.x, 1.0, epsilon = 1e-3);
        assert!(first.y > last.y);
    }

    #[test]
    fn leading_edge_appears_exactly_once() {
        let foil = Airfoil::new("2412").unwrap();
        let count = foil.points().iter().filter(|p| p.x == 0.0 && p.y == 0.0).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn symmetric_outline_mirrors_about_the_chord() {
        let foil = Airfoil::with_params("0012", &params(5, Spacing::Linear)).unwrap();
        let points = foil.points();
        assert_eq!(points.len(), 9);
        for (a, b) in points.iter().zip(points.iter().rev()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, -b.y, epsilon = 1e-12);
        }
    }

    #[test_case(0.25, 0.0594124)]
    #[test_case(0.50, 0.0529403)]
    #[test_case(0.75, 0.0316031)]
    fn symmetric_surface_height_matches_the_envelope(x: f64, expected: f64) {
        let foil = Airfoil::with_params("0012", &params(5, Spacing::Linear)).unwrap();
        let point = foil
            .points()
            .iter()
            .find(|p| (p.x - x).abs() < 1e-12 && p.y > 0.0)
            .unwrap();
        assert_relative_eq!(point.y, expected, epsilon = 1e-6);
    }

    #[test]
    fn camber_peak_lands_nearest_the_design_position() {
        let foil = Airfoil::new("2412").unwrap();
        let mean_line = MeanLine::from_designation(&Designation::parse("2412").unwrap());

        let mut peak_index = 0;
        let mut peak_value = f64::MIN;
        let mut nearest_index = 0;
        let mut nearest_distance = f64::MAX;
        for (i, &x) in foil.stations().iter().enumerate() {
            let y = mean_line.point(x).y;
            if y > peak_value {
                peak_value = y;
                peak_index = i;
            }
            if (x - 0.4).abs() < nearest_distance {
                nearest_distance = (x - 0.4).abs();
                nearest_index = i;
            }
        }

        assert_eq!(peak_index, nearest_index);
    }

    #[test]
    fn five_digit_sections_generate() {
        for code in ["23012", "23112", "21012", "25112"] {
            let foil = Airfoil::new(code).unwrap();
            assert_eq!(foil.points().len(), 399);
            assert_eq!(foil.designation(), code);
        }
    }

    #[test]
    fn open_trailing_edge_leaves_a_gap() {
        let foil = Airfoil::with_params("0012", &params(50, Spacing::Linear)).unwrap();
        let first = foil.points().first().unwrap();
        let last = foil.points().last().unwrap();
        assert!(first.y > 0.0);
        assert!(last.y < 0.0);
    }

    #[test]
    fn closed_trailing_edge_meets_itself() {
        let p = GenParams { trailing_edge: TrailingEdge::Closed, ..GenParams::default() };
        let foil = Airfoil::with_params("2412", &p).unwrap();
        let first = foil.points().first().unwrap();
        let last = foil.points().last().unwrap();
        assert_relative_eq!(first.x, last.x, epsilon = 1e-12);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-12);
    }

    #[test]
    fn bounds_cover_the_chord() {
        let foil = Airfoil::new("0012").unwrap();
        let bounds = foil.bounds();
        assert_relative_eq!(bounds.mins.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.maxs.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.maxs.y, -bounds.mins.y, epsilon = 1e-12);
    }

    #[test_case("12")]
    #[test_case("2412a")]
    fn malformed_designations_are_rejected(code: &str) {
        let error = Airfoil::new(code).unwrap_err();
        let kind = error.downcast_ref::<InvalidAirfoil>().unwrap();
        assert!(matches!(kind, InvalidAirfoil::InvalidDesignation(_)));
    }

    #[test]
    fn unsupported_designations_are_rejected() {
        let error = Airfoil::new("99999").unwrap_err();
        let kind = error.downcast_ref::<InvalidAirfoil>().unwrap();
        assert!(matches!(kind, InvalidAirfoil::UnsupportedDesignation(_)));
    }

    #[test_case(0)]
    #[test_case(1)]
    fn invalid_point_counts_are_rejected(num_points: usize) {
        let p = GenParams { num_points, ..GenParams::default() };
        let error = Airfoil::with_params("0012", &p).unwrap_err();
        let kind = error.downcast_ref::<InvalidAirfoil>().unwrap();
        assert!(matches!(kind, InvalidAirfoil::InvalidPointCount(_)));
    }

    #[test]
    fn outline_round_trips_through_json() {
        let foil = Airfoil::new("23112").unwrap();
        let text = serde_json::to_string(&foil).unwrap();
        let back: Airfoil = serde_json::from_str(&text).unwrap();
        assert_eq!(back.designation(), foil.designation());
        assert_eq!(back.points(), foil.points());
        assert_eq!(back.stations(), foil.stations());
    }

    #[test]
    fn random_four_digit_outlines_are_well_formed() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let code = format!(
                "{}{}{:02}",
                rng.random_range(0..10),
                rng.random_range(0..10),
                rng.random_range(1..31)
            );
            let spacing = if rng.random_bool(0.5) {
                Spacing::HalfCosine
            } else {
                Spacing::Linear
            };
            let num_points = rng.random_range(2..300);

            let foil = Airfoil::with_params(&code, &params(num_points, spacing)).unwrap();
            assert_eq!(foil.points().len(), 2 * num_points - 1);
            assert_eq!(foil.stations().len(), num_points);

            let le_count = foil.points().iter().filter(|p| p.x == 0.0).count();
            assert_eq!(le_count, 1);
        }
    }
}
