//! A minimal posed 2D camera, described by a field of view, a focal distance and a near limit.

use crate::sensors::PosedSensor2;
use crate::{Iso2, Matrix3, Point2};
use serde::{Deserialize, Serialize};

/// The parameters which describe the viewing geometry of a 2D camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParams2 {
    /// The full opening angle of the camera, in radians
    pub fov: f64,

    /// The focal distance of the camera
    pub focal_distance: f64,

    /// The near limit of the camera
    pub near: f64,
}

impl CameraParams2 {
    pub fn new(fov: f64, focal_distance: f64, near: f64) -> Self {
        Self {
            fov,
            focal_distance,
            near,
        }
    }
}

/// A 2D camera with a pose in the world. The pose is a position and an orientation angle, and
/// the transformation to the world frame is the rigid transformation they describe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera2 {
    params: CameraParams2,
    position: Point2,
    orientation: f64,
}

impl Camera2 {
    /// Create a new camera at the world origin with an orientation of zero
    pub fn new(fov: f64, focal_distance: f64, near: f64) -> Self {
        Self::from_params(CameraParams2::new(fov, focal_distance, near))
    }

    pub fn from_params(params: CameraParams2) -> Self {
        Self {
            params,
            position: Point2::origin(),
            orientation: 0.0,
        }
    }

    /// Replace the pose of the camera
    ///
    /// # Arguments
    ///
    /// * `position`: the position of the camera in the world frame
    /// * `orientation`: the rotation of the camera's local frame relative to the world frame,
    ///   in radians
    ///
    /// returns: ()
    pub fn set_pose(&mut self, position: Point2, orientation: f64) {
        self.position = position;
        self.orientation = orientation;
    }

    pub fn with_pose(mut self, position: Point2, orientation: f64) -> Self {
        self.set_pose(position, orientation);
        self
    }

    pub fn params(&self) -> &CameraParams2 {
        &self.params
    }

    /// Returns the rigid transformation from the camera's local frame to the world frame
    pub fn pose(&self) -> Iso2 {
        Iso2::new(self.position.coords, self.orientation)
    }
}

impl PosedSensor2 for Camera2 {
    fn position(&self) -> Point2 {
        self.position
    }

    fn orientation(&self) -> f64 {
        self.orientation
    }

    fn transform_to_world(&self) -> Matrix3 {
        self.pose().to_homogeneous()
    }
}
