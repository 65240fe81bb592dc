//! This module has I/O functionality for reading scenes

mod scene;

pub use scene::{Scene, load_scene, scene_from_str};
