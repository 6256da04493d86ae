//! Headless implementation of the scene preview.
//!
//! No rendering happens here; the camera placement is tracked so the CLI can
//! describe the virtual viewpoint, and classification is delegated to the
//! domain mapper.

use crate::domain::{CameraPosition, ShotDescriptor};
use crate::ports::ScenePreview;

#[derive(Debug, Clone)]
pub struct HeadlessScenePreview {
    position: CameraPosition,
}

impl HeadlessScenePreview {
    pub fn new() -> Self {
        Self { position: CameraPosition::from_orbit(5.0, 0.5, 0.0) }
    }

    /// Last computed camera placement.
    pub fn position(&self) -> CameraPosition {
        self.position
    }
}

impl Default for HeadlessScenePreview {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenePreview for HeadlessScenePreview {
    fn update_camera_position(
        &mut self,
        distance: f64,
        height: f64,
        orbit: f64,
    ) -> ShotDescriptor {
        self.position = CameraPosition::from_orbit(distance, height, orbit);
        ShotDescriptor::classify(distance, height, orbit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CameraAngle, ShotDistance};

    #[test]
    fn updates_track_position_and_classify() {
        let mut preview = HeadlessScenePreview::new();
        let descriptor = preview.update_camera_position(1.5, 4.0, 0.0);
        assert_eq!(descriptor.distance, ShotDistance::ExtremeCloseUp);
        assert_eq!(descriptor.angle, CameraAngle::OverheadView);
        assert_eq!(preview.position().y, 5.2);
    }
}
