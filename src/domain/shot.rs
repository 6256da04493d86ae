//! Shot descriptor mapping for the camera simulation.
//!
//! Maps the three simulation parameters (distance, height, orbit angle in
//! radians) onto categorical shot labels. Classification ladders are ordered;
//! the first matching band wins.

/// Shot distance class derived from camera distance.
///
/// Variant order follows increasing distance, so the derived ordering matches
/// the band ordering on the real line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShotDistance {
    ExtremeCloseUp,
    CloseUp,
    MediumShot,
    WideShot,
    ExtremeWideShot,
}

impl ShotDistance {
    pub fn classify(distance: f64) -> Self {
        if distance < 2.0 {
            ShotDistance::ExtremeCloseUp
        } else if distance < 3.5 {
            ShotDistance::CloseUp
        } else if distance < 6.0 {
            ShotDistance::MediumShot
        } else if distance < 9.0 {
            ShotDistance::WideShot
        } else {
            ShotDistance::ExtremeWideShot
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotDistance::ExtremeCloseUp => "Extreme Close-Up",
            ShotDistance::CloseUp => "Close-Up",
            ShotDistance::MediumShot => "Medium Shot",
            ShotDistance::WideShot => "Wide Shot",
            ShotDistance::ExtremeWideShot => "Extreme Wide Shot",
        }
    }
}

/// Vertical angle class derived from camera height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAngle {
    OverheadView,
    HighAngle,
    EyeLevel,
    LowAngle,
    WormsEyeView,
}

impl CameraAngle {
    /// The ladder leaves heights in (-0.5, 1.2] on the Eye Level default.
    /// Band order and boundaries are load-bearing; do not reorder.
    pub fn classify(height: f64) -> Self {
        if height > 3.0 {
            CameraAngle::OverheadView
        } else if height > 1.2 {
            CameraAngle::HighAngle
        } else if height < -0.5 && height > -2.0 {
            CameraAngle::LowAngle
        } else if height <= -2.0 {
            CameraAngle::WormsEyeView
        } else {
            CameraAngle::EyeLevel
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraAngle::OverheadView => "Overhead View",
            CameraAngle::HighAngle => "High Angle",
            CameraAngle::EyeLevel => "Eye Level",
            CameraAngle::LowAngle => "Low Angle",
            CameraAngle::WormsEyeView => "Worm's Eye View",
        }
    }
}

/// Horizontal view class derived from the absolute orbit angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraView {
    FrontView,
    SideProfile,
    RearThreeQuarterView,
    BackView,
}

impl CameraView {
    pub fn classify(orbit: f64) -> Self {
        let orbit_abs = orbit.abs();
        if orbit_abs < 0.5 {
            CameraView::FrontView
        } else if orbit_abs < 2.0 {
            CameraView::SideProfile
        } else if orbit_abs < 2.8 {
            CameraView::RearThreeQuarterView
        } else {
            CameraView::BackView
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraView::FrontView => "Front View",
            CameraView::SideProfile => "Side Profile",
            CameraView::RearThreeQuarterView => "Rear 3/4 View",
            CameraView::BackView => "Back View",
        }
    }
}

/// The three classifications for the current camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotDescriptor {
    pub distance: ShotDistance,
    pub angle: CameraAngle,
    pub view: CameraView,
}

impl ShotDescriptor {
    pub fn classify(distance: f64, height: f64, orbit: f64) -> Self {
        Self {
            distance: ShotDistance::classify(distance),
            angle: CameraAngle::classify(height),
            view: CameraView::classify(orbit),
        }
    }
}

impl Default for ShotDescriptor {
    /// Descriptor for the simulation defaults (distance 5, height 0.5, orbit 0).
    fn default() -> Self {
        Self {
            distance: ShotDistance::MediumShot,
            angle: CameraAngle::EyeLevel,
            view: CameraView::FrontView,
        }
    }
}

/// Camera position on the orbit around the mannequin.
///
/// The subject's head sits at y = 1.2; the camera always looks there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Height of the look-at target.
pub const LOOK_AT_HEIGHT: f64 = 1.2;

impl CameraPosition {
    pub fn from_orbit(distance: f64, height: f64, orbit: f64) -> Self {
        Self { x: orbit.sin() * distance, y: LOOK_AT_HEIGHT + height, z: orbit.cos() * distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_boundaries_belong_to_the_wider_band() {
        assert_eq!(ShotDistance::classify(1.999), ShotDistance::ExtremeCloseUp);
        assert_eq!(ShotDistance::classify(2.0), ShotDistance::CloseUp);
        assert_eq!(ShotDistance::classify(3.5), ShotDistance::MediumShot);
        assert_eq!(ShotDistance::classify(6.0), ShotDistance::WideShot);
        assert_eq!(ShotDistance::classify(9.0), ShotDistance::ExtremeWideShot);
        assert_eq!(ShotDistance::classify(100.0), ShotDistance::ExtremeWideShot);
    }

    #[test]
    fn height_ladder_first_match_wins() {
        assert_eq!(CameraAngle::classify(3.1), CameraAngle::OverheadView);
        assert_eq!(CameraAngle::classify(3.0), CameraAngle::HighAngle);
        assert_eq!(CameraAngle::classify(1.3), CameraAngle::HighAngle);
        assert_eq!(CameraAngle::classify(1.2), CameraAngle::EyeLevel);
        assert_eq!(CameraAngle::classify(0.5), CameraAngle::EyeLevel);
        assert_eq!(CameraAngle::classify(-0.6), CameraAngle::LowAngle);
        assert_eq!(CameraAngle::classify(-2.0), CameraAngle::WormsEyeView);
        assert_eq!(CameraAngle::classify(-5.0), CameraAngle::WormsEyeView);
    }

    #[test]
    fn height_gap_falls_through_to_eye_level() {
        // -0.5 itself fails the strict < -0.5 test, so it stays Eye Level.
        assert_eq!(CameraAngle::classify(-0.5), CameraAngle::EyeLevel);
        assert_eq!(CameraAngle::classify(-0.3), CameraAngle::EyeLevel);
    }

    #[test]
    fn orbit_classifies_by_absolute_angle() {
        assert_eq!(CameraView::classify(0.0), CameraView::FrontView);
        assert_eq!(CameraView::classify(-0.49), CameraView::FrontView);
        assert_eq!(CameraView::classify(0.5), CameraView::SideProfile);
        assert_eq!(CameraView::classify(-1.9), CameraView::SideProfile);
        assert_eq!(CameraView::classify(2.0), CameraView::RearThreeQuarterView);
        assert_eq!(CameraView::classify(-2.8), CameraView::BackView);
        assert_eq!(CameraView::classify(3.14), CameraView::BackView);
    }

    #[test]
    fn default_descriptor_matches_simulation_defaults() {
        assert_eq!(ShotDescriptor::classify(5.0, 0.5, 0.0), ShotDescriptor::default());
    }

    #[test]
    fn camera_position_orbits_the_look_at_target() {
        let pos = CameraPosition::from_orbit(5.0, 0.5, 0.0);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 1.7);
        assert_eq!(pos.z, 5.0);

        let side = CameraPosition::from_orbit(2.0, 0.0, std::f64::consts::FRAC_PI_2);
        assert!((side.x - 2.0).abs() < 1e-9);
        assert!(side.z.abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn distance_bands_are_monotone(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ShotDistance::classify(near) <= ShotDistance::classify(far));
        }

        #[test]
        fn classification_is_deterministic(
            distance in -100.0f64..100.0,
            height in -100.0f64..100.0,
            orbit in -10.0f64..10.0,
        ) {
            let first = ShotDescriptor::classify(distance, height, orbit);
            let second = ShotDescriptor::classify(distance, height, orbit);
            prop_assert_eq!(first, second);
        }
    }
}
