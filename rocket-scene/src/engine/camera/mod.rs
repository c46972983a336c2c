/// Perspective camera spawning and resize handling.
pub mod scene_camera;
