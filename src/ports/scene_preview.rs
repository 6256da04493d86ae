//! 3D preview boundary.

use crate::domain::ShotDescriptor;

/// Port for the camera-simulation preview.
///
/// The session calls this synchronously whenever a simulation parameter
/// changes; the returned descriptor feeds the composition clause. Rendering,
/// mounting, and resizing are the implementation's own business.
pub trait ScenePreview {
    /// Move the simulated camera and classify the resulting shot.
    fn update_camera_position(
        &mut self,
        distance: f64,
        height: f64,
        orbit: f64,
    ) -> ShotDescriptor;
}
