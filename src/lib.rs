//! This crate generates the section geometry of NACA 4-digit and 5-digit series airfoils.
//! A numeric designation code (such as "2412" or "23012") is decoded into geometric
//! parameters, and from those the mean camber line, the symmetric thickness envelope, and
//! finally the upper and lower surfaces are computed and assembled into a single ordered
//! outline normalized to a unit chord.
//!
//! The outline produced here is the raw input for downstream consumers such as plotting,
//! CFD meshing, or CAD export; none of those concerns live in this crate.

pub mod common;
pub mod errors;

mod airfoil;
mod camber;
mod designation;
mod thickness;

use std::error::Error;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;
pub type Aabb2 = parry2d_f64::bounding_volume::Aabb;

pub use airfoil::{Airfoil, GenParams};
pub use camber::{CamberPoint, MeanLine};
pub use common::Spacing;
pub use designation::{Designation, MeanLineConstants, mean_line_constants};
pub use thickness::{ThicknessDistribution, TrailingEdge};
