//! This module contains the measurement value produced for each observed mesh edge. A
//! measurement pairs the two world-frame endpoints of the edge with a set of camera parameters
//! derived from them, as though a camera at the world origin were sized to just see the edge.

use crate::common::{length2, unsigned_angle};
use crate::errors::InvalidGeometry;
use crate::plot::{PlotStyle, PlotSurface};
use crate::sensors::CameraParams2;
use crate::{Aabb2, Point2, min_max};
use serde::{Deserialize, Serialize};

/// The near limit assigned to the camera parameters of every measurement
pub const MEASUREMENT_NEAR: f64 = 0.4;

/// A measurement of a single edge. By convention callers supply the endpoints counter-clockwise
/// as seen from the world origin, but the order is neither checked nor changed here.
///
/// Deserializing a measurement reads only the endpoints and the pose, and rebuilds the camera
/// parameters through `Measurement2::try_new`, so a serialized record can never produce a
/// measurement that `try_new` would reject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeasurementRecord")]
pub struct Measurement2 {
    m1: Point2,
    m2: Point2,
    params: CameraParams2,
    position: Point2,
    orientation: f64,
}

impl Measurement2 {
    /// Create a new measurement from the sensor pose and the two world-frame endpoints of an
    /// edge. The field of view is the angle subtended at the world origin by the two endpoints,
    /// and the focal distance is the cosine of half that angle times the larger of the two
    /// endpoint distances from the origin.
    ///
    /// The `orientation` is stored exactly as given. Callers pass the sensor's orientation, which
    /// does not describe the direction the measurement's derived camera would face.
    ///
    /// # Arguments
    ///
    /// * `position`: the sensor position
    /// * `orientation`: the sensor orientation, in radians
    /// * `m1`: the first endpoint, in the world frame
    /// * `m2`: the second endpoint, in the world frame
    ///
    /// returns: Result<Measurement2, InvalidGeometry>
    ///
    /// # Examples
    ///
    /// ```
    /// use edge_measure::{Measurement2, Point2};
    /// use std::f64::consts::PI;
    /// use approx::assert_relative_eq;
    /// let m = Measurement2::try_new(Point2::origin(), 0.0, Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)).unwrap();
    /// assert_relative_eq!(m.fov(), PI / 2.0, epsilon = 1.0e-12);
    /// assert_relative_eq!(m.focal_distance(), 2.0_f64.sqrt() / 2.0, epsilon = 1.0e-12);
    /// ```
    pub fn try_new(
        position: Point2,
        orientation: f64,
        m1: Point2,
        m2: Point2,
    ) -> Result<Self, InvalidGeometry> {
        let fov =
            unsigned_angle(&m1.coords, &m2.coords).ok_or(InvalidGeometry::DegenerateMeasurement)?;
        let f = (0.5 * fov).cos() * length2(&m1.coords).max(length2(&m2.coords));
        if !f.is_finite() {
            return Err(InvalidGeometry::DegenerateMeasurement);
        }

        Ok(Self {
            m1,
            m2,
            params: CameraParams2::new(fov, f, MEASUREMENT_NEAR),
            position,
            orientation,
        })
    }

    pub fn m1(&self) -> Point2 {
        self.m1
    }

    pub fn m2(&self) -> Point2 {
        self.m2
    }

    pub fn params(&self) -> &CameraParams2 {
        &self.params
    }

    pub fn fov(&self) -> f64 {
        self.params.fov
    }

    pub fn focal_distance(&self) -> f64 {
        self.params.focal_distance
    }

    pub fn near(&self) -> f64 {
        self.params.near
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    /// Returns the distance between the two endpoints
    pub fn length(&self) -> f64 {
        length2(&(self.m2 - self.m1))
    }

    /// Returns the axis-aligned bounding box of the two endpoints as `[x_min, x_max, y_min,
    /// y_max]`, grown on each side by the padding for that axis.
    ///
    /// # Arguments
    ///
    /// * `padding`: the space to leave between the endpoints and the box, as `[x, y]`
    ///
    /// returns: [f64; 4]
    ///
    /// # Examples
    ///
    /// ```
    /// use edge_measure::{Measurement2, Point2};
    /// let m = Measurement2::try_new(Point2::origin(), 0.0, Point2::new(3.0, 1.0), Point2::new(1.0, 2.0)).unwrap();
    /// assert_eq!(m.bounding_box([0.5, 1.0]), [0.5, 3.5, 0.0, 3.0]);
    /// ```
    pub fn bounding_box(&self, padding: [f64; 2]) -> [f64; 4] {
        let (x_min, x_max) = min_max(self.m1.x, self.m2.x);
        let (y_min, y_max) = min_max(self.m1.y, self.m2.y);
        [
            x_min - padding[0],
            x_max + padding[0],
            y_min - padding[1],
            y_max + padding[1],
        ]
    }

    pub fn bounding_box_unpadded(&self) -> [f64; 4] {
        self.bounding_box([0.0, 0.0])
    }

    /// Returns the same box as `bounding_box` as an axis-aligned bounding box
    pub fn aabb(&self, padding: [f64; 2]) -> Aabb2 {
        let [x0, x1, y0, y1] = self.bounding_box(padding);
        Aabb2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Draw the measured segment from `m1` to `m2` onto a plot surface
    pub fn draw(&self, surface: &mut impl PlotSurface) {
        surface.plot(&[self.m1, self.m2], &PlotStyle::MEASUREMENT);
    }

    /// Draw the outline of the padded bounding box onto a plot surface as a closed polyline,
    /// starting and ending at the minimum corner.
    pub fn draw_bounding_box(&self, surface: &mut impl PlotSurface, padding: [f64; 2]) {
        let [x0, x1, y0, y1] = self.bounding_box(padding);
        let outline = [
            Point2::new(x0, y0),
            Point2::new(x0, y1),
            Point2::new(x1, y1),
            Point2::new(x1, y0),
            Point2::new(x0, y0),
        ];
        surface.plot(&outline, &PlotStyle::BOUNDING_BOX);
    }
}

/// The fields of a serialized measurement which are needed to rebuild it
#[derive(Deserialize)]
struct MeasurementRecord {
    m1: Point2,
    m2: Point2,
    position: Point2,
    orientation: f64,
}

impl TryFrom<MeasurementRecord> for Measurement2 {
    type Error = InvalidGeometry;

    fn try_from(r: MeasurementRecord) -> Result<Self, Self::Error> {
        Measurement2::try_new(r.position, r.orientation, r.m1, r.m2)
    }
}
