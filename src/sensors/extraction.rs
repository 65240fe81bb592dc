//! This module converts the edges of a mesh observed by a posed 2D sensor into world-frame
//! measurements.

use crate::errors::InvalidGeometry;
use crate::geom2::transform_homogeneous;
use crate::sensors::{Measurement2, PosedSensor2};
use crate::{Edge2, EdgeSource, Matrix3, Point2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Selects which coordinates are checked for NaN when deciding whether an edge was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NanCheck {
    /// Skip the edge if the `x` coordinate of either endpoint is NaN. An edge with a NaN only in
    /// a `y` coordinate is kept.
    #[default]
    XOnly,

    /// Skip the edge if any coordinate of either endpoint is NaN
    AnyCoord,
}

impl NanCheck {
    fn rejects(self, edge: &Edge2) -> bool {
        match self {
            NanCheck::XOnly => edge.has_nan_x(),
            NanCheck::AnyCoord => edge.has_nan(),
        }
    }
}

/// Selects what happens when an observed edge cannot produce a measurement because one of its
/// world-frame endpoints sits on the origin or the angle between them is undefined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Stop at the first degenerate edge and return its error, producing no measurements
    #[default]
    Abort,

    /// Leave degenerate edges out of the result
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub nan_check: NanCheck,
    pub on_degenerate: DegeneratePolicy,
}

impl ExtractOptions {
    pub fn new(nan_check: NanCheck, on_degenerate: DegeneratePolicy) -> Self {
        Self {
            nan_check,
            on_degenerate,
        }
    }
}

/// Transforms both endpoints of an edge by a 3x3 homogeneous matrix, returning the first two
/// components of each result. No perspective division is applied.
///
/// # Arguments
///
/// * `edge`: the edge in the sensor's local frame
/// * `tf`: the transformation from the sensor's local frame to the world frame
///
/// returns: (OPoint<f64, Const<2>>, OPoint<f64, Const<2>>)
pub fn transform_edge(edge: &Edge2, tf: &Matrix3) -> (Point2, Point2) {
    (
        transform_homogeneous(tf, &edge.v1),
        transform_homogeneous(tf, &edge.v2),
    )
}

/// Converts every observed edge of a mesh into a measurement, in the mesh's edge order. Edges
/// with a NaN `x` coordinate on either endpoint are silently skipped. If any remaining edge is
/// degenerate the whole extraction fails with `InvalidGeometry::DegenerateMeasurement`.
///
/// This is the same as `measurements_from_mesh_with` using the default `ExtractOptions`.
///
/// # Arguments
///
/// * `mesh`: the edges observed by the sensor, in the sensor's local frame
/// * `sensor`: the sensor which supplies the pose and the transformation to the world frame
///
/// returns: Result<Vec<Measurement2, Global>, InvalidGeometry>
///
/// # Examples
///
/// ```
/// use edge_measure::{measurements_from_mesh, Camera2, Edge2, EdgeMesh2, Point2};
/// let camera = Camera2::new(1.0, 1.0, 0.4).with_pose(Point2::new(1.0, 0.0), 0.0);
/// let mesh = EdgeMesh2::new(vec![
///     Edge2::new(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)),
///     Edge2::new(Point2::new(f64::NAN, f64::NAN), Point2::new(1.0, 1.0)),
/// ]);
/// let measurements = measurements_from_mesh(&mesh, &camera).unwrap();
/// assert_eq!(measurements.len(), 1);
/// assert_eq!(measurements[0].m1(), Point2::new(2.0, 0.0));
/// ```
pub fn measurements_from_mesh<M, S>(
    mesh: &M,
    sensor: &S,
) -> Result<Vec<Measurement2>, InvalidGeometry>
where
    M: EdgeSource + ?Sized,
    S: PosedSensor2 + ?Sized,
{
    measurements_from_mesh_with(mesh, sensor, &ExtractOptions::default())
}

/// Converts the observed edges of a mesh into measurements, in the mesh's edge order, with the
/// NaN filtering and the handling of degenerate edges chosen by `options`.
///
/// # Arguments
///
/// * `mesh`: the edges observed by the sensor, in the sensor's local frame
/// * `sensor`: the sensor which supplies the pose and the transformation to the world frame
/// * `options`: the filtering options
///
/// returns: Result<Vec<Measurement2, Global>, InvalidGeometry>
pub fn measurements_from_mesh_with<M, S>(
    mesh: &M,
    sensor: &S,
    options: &ExtractOptions,
) -> Result<Vec<Measurement2>, InvalidGeometry>
where
    M: EdgeSource + ?Sized,
    S: PosedSensor2 + ?Sized,
{
    let extractor = EdgeExtractor::new(sensor, *options);
    mesh.edges()
        .iter()
        .filter_map(|e| extractor.measure(e))
        .collect()
}

/// The parallel counterpart of `measurements_from_mesh_with`. Edges are measured concurrently,
/// but the result keeps the mesh's edge order and is identical to the sequential version.
///
/// # Arguments
///
/// * `mesh`: the edges observed by the sensor, in the sensor's local frame
/// * `sensor`: the sensor which supplies the pose and the transformation to the world frame
/// * `options`: the filtering options
///
/// returns: Result<Vec<Measurement2, Global>, InvalidGeometry>
pub fn par_measurements_from_mesh_with<M, S>(
    mesh: &M,
    sensor: &S,
    options: &ExtractOptions,
) -> Result<Vec<Measurement2>, InvalidGeometry>
where
    M: EdgeSource + ?Sized,
    S: PosedSensor2 + ?Sized,
{
    let extractor = EdgeExtractor::new(sensor, *options);
    mesh.edges()
        .par_iter()
        .filter_map(|e| extractor.measure(e))
        .collect()
}

/// The sensor state captured once per extraction
struct EdgeExtractor {
    tf: Matrix3,
    position: Point2,
    orientation: f64,
    options: ExtractOptions,
}

impl EdgeExtractor {
    fn new<S: PosedSensor2 + ?Sized>(sensor: &S, options: ExtractOptions) -> Self {
        Self {
            tf: sensor.transform_to_world(),
            position: sensor.position(),
            orientation: sensor.orientation(),
            options,
        }
    }

    /// Returns `None` for an edge which should be left out of the result
    fn measure(&self, edge: &Edge2) -> Option<Result<Measurement2, InvalidGeometry>> {
        if self.options.nan_check.rejects(edge) {
            return None;
        }

        let (m1, m2) = transform_edge(edge, &self.tf);
        match Measurement2::try_new(self.position, self.orientation, m1, m2) {
            Ok(m) => Some(Ok(m)),
            Err(e) => match self.options.on_degenerate {
                DegeneratePolicy::Abort => Some(Err(e)),
                DegeneratePolicy::Skip => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera2, EdgeMesh2};
    use approx::assert_relative_eq;
    use rand::Rng;
    use std::f64::consts::PI;
    use test_case::test_case;

    const NAN: f64 = f64::NAN;

    fn edge(v1: (f64, f64), v2: (f64, f64)) -> Edge2 {
        Edge2::new(Point2::new(v1.0, v1.1), Point2::new(v2.0, v2.1))
    }

    fn posed_camera() -> Camera2 {
        Camera2::new(PI / 2.0, 1.0, 0.4).with_pose(Point2::new(2.0, -1.0), PI / 6.0)
    }

    /// A sensor with an arbitrary, non-rigid transformation
    struct MatrixSensor {
        tf: Matrix3,
    }

    impl PosedSensor2 for MatrixSensor {
        fn position(&self) -> Point2 {
            Point2::new(-7.0, 3.0)
        }

        fn orientation(&self) -> f64 {
            1.5
        }

        fn transform_to_world(&self) -> Matrix3 {
            self.tf
        }
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = EdgeMesh2::default();
        let result = measurements_from_mesh(&mesh, &posed_camera()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_nan_edge_skipped_and_order_kept() {
        let mesh = EdgeMesh2::new(vec![
            edge((1.0, 0.0), (1.0, 1.0)),
            edge((NAN, NAN), (2.0, 2.0)),
            edge((3.0, 1.0), (2.0, 4.0)),
        ]);
        let camera = Camera2::new(1.0, 1.0, 0.4);
        let result = measurements_from_mesh(&mesh, &camera).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].m1(), Point2::new(1.0, 0.0));
        assert_eq!(result[0].m2(), Point2::new(1.0, 1.0));
        assert_eq!(result[1].m1(), Point2::new(3.0, 1.0));
        assert_eq!(result[1].m2(), Point2::new(2.0, 4.0));
    }

    #[test_case(edge((NAN, 0.0), (1.0, 1.0)), 0)]
    #[test_case(edge((1.0, 1.0), (NAN, 0.0)), 0)]
    #[test_case(edge((NAN, NAN), (NAN, NAN)), 0)]
    #[test_case(edge((1.0, 1.0), (2.0, 1.0)), 1)]
    fn test_nan_x_filtering(e: Edge2, expected: usize) {
        let result = measurements_from_mesh(&[e][..], &posed_camera()).unwrap();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn test_nan_y_only_is_degenerate_by_default() {
        // The default check ignores y, so the NaN reaches the measurement and fails there
        let mesh = [edge((1.0, NAN), (1.0, 1.0))];
        let result = measurements_from_mesh(&mesh[..], &posed_camera());
        assert_eq!(result, Err(InvalidGeometry::DegenerateMeasurement));
    }

    #[test]
    fn test_nan_y_any_coord_skips() {
        let mesh = [edge((1.0, NAN), (1.0, 1.0)), edge((1.0, 0.0), (1.0, 1.0))];
        let options = ExtractOptions::new(NanCheck::AnyCoord, DegeneratePolicy::Abort);
        let result = measurements_from_mesh_with(&mesh[..], &posed_camera(), &options).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_transform_applied() {
        let camera = posed_camera();
        let tf = camera.pose();
        let mesh = [edge((1.0, 0.0), (0.5, 2.0)), edge((-3.0, 1.0), (4.0, 4.0))];
        let result = measurements_from_mesh(&mesh[..], &camera).unwrap();

        assert_eq!(result.len(), 2);
        for (m, e) in result.iter().zip(mesh.iter()) {
            assert_relative_eq!(m.m1(), tf * e.v1, epsilon = 1.0e-12);
            assert_relative_eq!(m.m2(), tf * e.v2, epsilon = 1.0e-12);
            assert_eq!(m.position(), Point2::new(2.0, -1.0));
            assert_eq!(m.orientation(), PI / 6.0);
        }
    }

    #[test]
    fn test_arbitrary_matrix_transform() {
        let tf = Matrix3::new(2.0, 0.5, 1.0, -1.0, 3.0, 2.0, 0.0, 0.0, 1.0);
        let sensor = MatrixSensor { tf };
        let mesh = [edge((1.0, 2.0), (-1.0, 0.0))];
        let result = measurements_from_mesh(&mesh[..], &sensor).unwrap();

        assert_eq!(result[0].m1(), Point2::new(4.0, 7.0));
        assert_eq!(result[0].m2(), Point2::new(-1.0, 3.0));
        assert_eq!(result[0].position(), Point2::new(-7.0, 3.0));
        assert_eq!(result[0].orientation(), 1.5);
    }

    #[test]
    fn test_degenerate_aborts() {
        // The camera origin coincides with the world origin, so a local (0, 0) is degenerate
        let mesh = [edge((1.0, 0.0), (1.0, 1.0)), edge((0.0, 0.0), (1.0, 1.0))];
        let camera = Camera2::new(1.0, 1.0, 0.4);
        let result = measurements_from_mesh(&mesh[..], &camera);
        assert_eq!(result, Err(InvalidGeometry::DegenerateMeasurement));
    }

    #[test]
    fn test_degenerate_after_transform() {
        // A local point which lands on the world origin after the transformation
        let camera = Camera2::new(1.0, 1.0, 0.4).with_pose(Point2::new(1.0, 0.0), 0.0);
        let mesh = [edge((-1.0, 0.0), (1.0, 1.0))];
        let result = measurements_from_mesh(&mesh[..], &camera);
        assert_eq!(result, Err(InvalidGeometry::DegenerateMeasurement));
    }

    #[test]
    fn test_degenerate_skip() {
        let mesh = [
            edge((1.0, 0.0), (1.0, 1.0)),
            edge((0.0, 0.0), (1.0, 1.0)),
            edge((NAN, 0.0), (1.0, 1.0)),
            edge((2.0, 0.0), (2.0, 2.0)),
        ];
        let camera = Camera2::new(1.0, 1.0, 0.4);
        let options = ExtractOptions::new(NanCheck::XOnly, DegeneratePolicy::Skip);
        let result = measurements_from_mesh_with(&mesh[..], &camera, &options).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].m1(), Point2::new(1.0, 0.0));
        assert_eq!(result[1].m1(), Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rnd = rand::rng();
        let mesh = (0..2000)
            .map(|i| {
                if i % 7 == 0 {
                    edge((NAN, NAN), (1.0, 1.0))
                } else {
                    edge(
                        (rnd.random_range(-5.0..5.0), rnd.random_range(-5.0..5.0)),
                        (rnd.random_range(-5.0..5.0), rnd.random_range(-5.0..5.0)),
                    )
                }
            })
            .collect::<EdgeMesh2>();

        let camera = posed_camera();
        let options = ExtractOptions::default();
        let seq = measurements_from_mesh_with(&mesh, &camera, &options).unwrap();
        let par = par_measurements_from_mesh_with(&mesh, &camera, &options).unwrap();

        assert_eq!(seq.len(), mesh.len() - mesh.len().div_ceil(7));
        assert_eq!(seq, par);
    }

    #[test]
    fn test_parallel_degenerate_aborts() {
        let mut mesh = [edge((1.0, 0.0), (1.0, 1.0)); 100];
        mesh[50] = edge((0.0, 0.0), (1.0, 1.0));
        let camera = Camera2::new(1.0, 1.0, 0.4);
        let result = par_measurements_from_mesh_with(&mesh[..], &camera, &ExtractOptions::default());
        assert_eq!(result, Err(InvalidGeometry::DegenerateMeasurement));
    }

    #[test]
    fn test_options_from_json() {
        let options: ExtractOptions =
            serde_json::from_str(r#"{"nan_check": "AnyCoord", "on_degenerate": "Skip"}"#)
                .unwrap();
        assert_eq!(
            options,
            ExtractOptions::new(NanCheck::AnyCoord, DegeneratePolicy::Skip)
        );
    }
}
