//! Tools for turning the mesh edges observed by a simulated 2D sensor into world-frame
//! measurements, with bounding box and plotting helpers.

use std::error::Error;

pub mod common;
pub mod errors;
pub mod geom2;
pub mod io;
pub mod plot;
pub mod sensors;

pub use parry2d_f64::na;

pub use crate::errors::InvalidGeometry;
pub use crate::geom2::{Aabb2, Edge2, EdgeMesh2, EdgeSource, Iso2, Matrix3, Point2, Vector2};
pub use crate::plot::{PlotRecorder, PlotStyle, PlotSurface};
pub use crate::sensors::{
    Camera2, CameraParams2, DegeneratePolicy, ExtractOptions, Measurement2, NanCheck,
    PosedSensor2, measurements_from_mesh, measurements_from_mesh_with,
    par_measurements_from_mesh_with,
};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn min_max(f0: f64, f1: f64) -> (f64, f64) {
    if f0 < f1 { (f0, f1) } else { (f1, f0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_orders_values() {
        assert_eq!(min_max(2.0, -1.0), (-1.0, 2.0));
        assert_eq!(min_max(-1.0, 2.0), (-1.0, 2.0));
        assert_eq!(min_max(3.0, 3.0), (3.0, 3.0));
    }
}
