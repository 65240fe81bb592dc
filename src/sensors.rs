//! This module contains the simulated 2D camera and the tools for converting the mesh edges it
//! observes into world-frame measurements.

mod camera2;
mod extraction;
mod measurement;

use crate::{Matrix3, Point2};

pub use camera2::{Camera2, CameraParams2};
pub use extraction::{
    DegeneratePolicy, ExtractOptions, NanCheck, measurements_from_mesh,
    measurements_from_mesh_with, par_measurements_from_mesh_with, transform_edge,
};
pub use measurement::{MEASUREMENT_NEAR, Measurement2};

/// A 2D sensor with a pose in the world and a homogeneous transformation from its local frame
/// into the world frame.
pub trait PosedSensor2 {
    fn position(&self) -> Point2;
    fn orientation(&self) -> f64;
    fn transform_to_world(&self) -> Matrix3;
}
