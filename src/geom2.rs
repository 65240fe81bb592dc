mod edge_mesh;

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;
pub type Vector3 = parry2d_f64::na::Vector3<f64>;
pub type Matrix3 = parry2d_f64::na::Matrix3<f64>;
pub type Iso2 = parry2d_f64::na::Isometry2<f64>;
pub type Aabb2 = parry2d_f64::bounding_volume::Aabb;

pub use self::edge_mesh::{Edge2, EdgeMesh2, EdgeSource};

/// Lifts a 2D point to homogeneous coordinates `(x, y, 1)`, multiplies it by a 3x3 matrix, and
/// returns the first two components of the result. The third component is discarded without a
/// perspective division, so only the affine part of the matrix has an effect on the output.
///
/// # Arguments
///
/// * `tf`: the 3x3 homogeneous transformation matrix
/// * `p`: the point to transform
///
/// returns: OPoint<f64, Const<2>>
///
/// # Examples
///
/// ```
/// use edge_measure::geom2::transform_homogeneous;
/// use edge_measure::{Iso2, Point2, Vector2};
/// let iso = Iso2::new(Vector2::new(1.0, 2.0), 0.0);
/// let p = transform_homogeneous(&iso.to_homogeneous(), &Point2::new(3.0, 4.0));
/// assert_eq!(p, Point2::new(4.0, 6.0));
/// ```
pub fn transform_homogeneous(tf: &Matrix3, p: &Point2) -> Point2 {
    let h = tf * Vector3::new(p.x, p.y, 1.0);
    Point2::new(h.x, h.y)
}
