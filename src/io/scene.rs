//! Scenes are read from JSON: a camera and a list of edges in the camera's local frame. An
//! unobserved edge endpoint is given with `null` coordinates, which are read as NaN.
//!
//! ```json
//! {
//!   "camera": {"fov": 1.57, "focal_distance": 1.0, "near": 0.4, "position": [0.0, 0.0], "orientation": 0.0},
//!   "edges": [[[1.0, 0.0], [1.0, 1.0]], [[null, null], [2.0, 2.0]]]
//! }
//! ```

use crate::sensors::{Camera2, ExtractOptions, Measurement2, measurements_from_mesh_with};
use crate::{Edge2, EdgeMesh2, Point2, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

type PointRecord = [Option<f64>; 2];

#[derive(Deserialize)]
struct CameraRecord {
    fov: f64,
    focal_distance: f64,
    near: f64,
    position: [f64; 2],
    orientation: f64,
}

#[derive(Deserialize)]
struct SceneRecord {
    camera: CameraRecord,
    edges: Vec<[PointRecord; 2]>,
}

fn point_from_record(r: &PointRecord) -> Point2 {
    Point2::new(r[0].unwrap_or(f64::NAN), r[1].unwrap_or(f64::NAN))
}

/// A camera together with the edges it observed, in its local frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera2,
    pub mesh: EdgeMesh2,
}

impl Scene {
    pub fn new(camera: Camera2, mesh: EdgeMesh2) -> Self {
        Self { camera, mesh }
    }

    /// Convert the observed edges of the scene into world-frame measurements
    pub fn measurements(&self, options: &ExtractOptions) -> Result<Vec<Measurement2>> {
        Ok(measurements_from_mesh_with(
            &self.mesh,
            &self.camera,
            options,
        )?)
    }

    fn from_record(record: SceneRecord) -> Self {
        let c = record.camera;
        let camera = Camera2::new(c.fov, c.focal_distance, c.near).with_pose(
            Point2::new(c.position[0], c.position[1]),
            c.orientation,
        );
        let mesh = record
            .edges
            .iter()
            .map(|[v1, v2]| Edge2::new(point_from_record(v1), point_from_record(v2)))
            .collect();

        Self { camera, mesh }
    }
}

/// Parse a scene from a JSON string
pub fn scene_from_str(s: &str) -> Result<Scene> {
    let record: SceneRecord = serde_json::from_str(s)?;
    Ok(Scene::from_record(record))
}

pub fn load_scene(path: &Path) -> Result<Scene> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let record: SceneRecord = serde_json::from_reader(reader)?;
    Ok(Scene::from_record(record))
}
