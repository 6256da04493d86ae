//! Named snapshots of the creation form.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::camera;
use crate::domain::form::{FormState, OutputMode};

/// The persisted subset of the form: creation fields, simulation parameters,
/// and output settings. Editing-tab fields are deliberately not captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetState {
    pub subject: String,
    pub mood: String,
    pub styles: Vec<String>,
    pub camera_category: String,
    pub camera_model: String,
    pub camera_lens: String,
    pub lighting: String,
    pub textures: Vec<String>,
    pub artist: String,
    pub negative: String,
    pub sim_distance: f64,
    pub sim_height: f64,
    pub sim_orbit: f64,
    pub output_mode: OutputMode,
    pub aspect_ratio: String,
    pub stylize: u32,
    pub chaos: u32,
    pub niji: bool,
}

impl Default for PresetState {
    fn default() -> Self {
        Self::capture(&FormState::default())
    }
}

impl PresetState {
    /// Snapshot the preset-relevant subset of the form.
    pub fn capture(form: &FormState) -> Self {
        Self {
            subject: form.subject.clone(),
            mood: form.mood.clone(),
            styles: form.styles.clone(),
            camera_category: form.camera_category.clone(),
            camera_model: form.camera_model.clone(),
            camera_lens: form.camera_lens.clone(),
            lighting: form.lighting.clone(),
            textures: form.textures.clone(),
            artist: form.artist.clone(),
            negative: form.negative.clone(),
            sim_distance: form.sim_distance,
            sim_height: form.sim_height,
            sim_orbit: form.sim_orbit,
            output_mode: form.output_mode,
            aspect_ratio: form.aspect_ratio.clone(),
            stylize: form.stylize,
            chaos: form.chaos,
            niji: form.niji,
        }
    }

    /// Write the snapshot back into the form.
    ///
    /// The camera category settles first; the stored model and lens are only
    /// kept when the settled category still offers them.
    pub fn apply_to(&self, form: &mut FormState) {
        form.subject = self.subject.clone();
        form.mood = self.mood.clone();
        form.styles = self.styles.clone();

        form.camera_category = self.camera_category.clone();
        form.camera_model = if camera::models_for(&self.camera_category)
            .contains(&self.camera_model.as_str())
        {
            self.camera_model.clone()
        } else {
            String::new()
        };
        form.camera_lens = if camera::lenses_for(&self.camera_category)
            .contains(&self.camera_lens.as_str())
        {
            self.camera_lens.clone()
        } else {
            String::new()
        };

        form.lighting = self.lighting.clone();
        form.textures = self.textures.clone();
        form.artist = self.artist.clone();
        form.negative = self.negative.clone();
        form.sim_distance = self.sim_distance;
        form.sim_height = self.sim_height;
        form.sim_orbit = self.sim_orbit;
        form.output_mode = self.output_mode;
        form.aspect_ratio = self.aspect_ratio.clone();
        form.stylize = self.stylize;
        form.chaos = self.chaos;
        form.niji = self.niji;
    }
}

/// A named, persisted preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub state: PresetState,
}

impl Preset {
    /// Create a preset with a time-derived id.
    pub fn new(name: String, state: PresetState) -> Self {
        Self { id: Utc::now().timestamp_millis().to_string(), name, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{DEFAULT_STYLIZE, FieldUpdate};

    #[test]
    fn capture_excludes_editing_fields_and_round_trips() {
        let mut form = FormState::default();
        form.apply(FieldUpdate::Subject("castle ruins".into()));
        form.apply(FieldUpdate::CameraCategory("Photography".into()));
        form.apply(FieldUpdate::CameraModel("Leica M6".into()));
        form.apply(FieldUpdate::Stylize(900));
        form.apply(FieldUpdate::EditSubject("not captured".into()));

        let state = PresetState::capture(&form);
        let mut restored = FormState::default();
        state.apply_to(&mut restored);

        assert_eq!(restored.subject, "castle ruins");
        assert_eq!(restored.camera_model, "Leica M6");
        assert_eq!(restored.stylize, 900);
        assert!(restored.edit_subject.is_empty());
    }

    #[test]
    fn apply_drops_gear_foreign_to_the_category() {
        let state = PresetState {
            camera_category: "Photography".into(),
            camera_model: "Sony A7S III".into(),
            camera_lens: "Leica Summilux-M 35mm".into(),
            ..PresetState::default()
        };

        let mut form = FormState::default();
        state.apply_to(&mut form);

        // The Sony body belongs to Mirrorless, so it cannot survive the
        // settled Photography category; the Leica lens can.
        assert_eq!(form.camera_category, "Photography");
        assert!(form.camera_model.is_empty());
        assert_eq!(form.camera_lens, "Leica Summilux-M 35mm");
    }

    #[test]
    fn default_state_matches_a_fresh_form() {
        let state = PresetState::default();
        assert!(state.subject.is_empty());
        assert_eq!(state.sim_distance, 5.0);
        assert_eq!(state.stylize, DEFAULT_STYLIZE);
        assert_eq!(state.output_mode, OutputMode::General);
    }
}
