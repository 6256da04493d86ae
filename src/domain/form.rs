//! User-editable form state and the update vocabulary applied to it.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Active form tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Creation,
    Editing,
    History,
}

impl ActiveTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Creation => "creation",
            ActiveTab::Editing => "editing",
            ActiveTab::History => "history",
        }
    }
}

/// Output format for the composed prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    General,
    Midjourney,
    Json,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::General => "general",
            OutputMode::Midjourney => "midjourney",
            OutputMode::Json => "json",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "general" => Ok(OutputMode::General),
            "midjourney" => Ok(OutputMode::Midjourney),
            "json" => Ok(OutputMode::Json),
            other => Err(AppError::InvalidOutputMode(other.to_string())),
        }
    }
}

/// Which polished variant the display layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewLanguage {
    #[default]
    Primary,
    Secondary,
}

/// Default Midjourney stylize weight; the flag is omitted at this value.
pub const DEFAULT_STYLIZE: u32 = 250;

/// Default negative text for the editing form.
pub const DEFAULT_EDIT_NEGATIVE: &str = "seams, glitch, bad blend, floating objects";

/// Flat record of every user-editable field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    // Creation form
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

    // Editing form
    pub edit_task: String,
    pub edit_subject: String,
    pub edit_seamless: bool,
    pub edit_match_lighting: bool,
    pub edit_high_detail: bool,
    pub edit_negative: String,

    // Camera simulation
    pub sim_distance: f64,
    pub sim_height: f64,
    pub sim_orbit: f64,

    // Output settings
    pub output_mode: OutputMode,
    pub aspect_ratio: String,
    pub stylize: u32,
    pub chaos: u32,
    pub niji: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            subject: String::new(),
            mood: String::new(),
            styles: Vec::new(),
            camera_category: String::new(),
            camera_model: String::new(),
            camera_lens: String::new(),
            lighting: String::new(),
            textures: Vec::new(),
            artist: String::new(),
            negative: String::new(),
            edit_task: "change".to_string(),
            edit_subject: String::new(),
            edit_seamless: true,
            edit_match_lighting: true,
            edit_high_detail: false,
            edit_negative: DEFAULT_EDIT_NEGATIVE.to_string(),
            sim_distance: 5.0,
            sim_height: 0.5,
            sim_orbit: 0.0,
            output_mode: OutputMode::General,
            aspect_ratio: String::new(),
            stylize: DEFAULT_STYLIZE,
            chaos: 0,
            niji: false,
        }
    }
}

/// A single mutation of the form state.
///
/// All state changes flow through [`crate::app::Session::apply`], which uses
/// [`FieldUpdate::clears_polish_cache`] to decide whether a previously polished
/// prompt is stale.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Subject(String),
    Mood(String),
    AddStyle(String),
    RemoveStyle(String),
    CameraCategory(String),
    CameraModel(String),
    CameraLens(String),
    Lighting(String),
    AddTexture(String),
    RemoveTexture(String),
    Artist(String),
    Negative(String),
    EditTask(String),
    EditSubject(String),
    EditSeamless(bool),
    EditMatchLighting(bool),
    EditHighDetail(bool),
    EditNegative(String),
    SimDistance(f64),
    SimHeight(f64),
    SimOrbit(f64),
    OutputMode(OutputMode),
    AspectRatio(String),
    Stylize(u32),
    Chaos(u32),
    Niji(bool),
}

impl FieldUpdate {
    /// Whether applying this update invalidates a polished prompt.
    ///
    /// Creation fields, editing fields, and the output settings all feed the
    /// polished text. The simulation sliders are not part of the tracked set;
    /// a polished prompt survives camera nudges.
    pub fn clears_polish_cache(&self) -> bool {
        !matches!(
            self,
            FieldUpdate::SimDistance(_) | FieldUpdate::SimHeight(_) | FieldUpdate::SimOrbit(_)
        )
    }

    /// Whether this update moves the simulated camera.
    pub fn moves_camera(&self) -> bool {
        matches!(
            self,
            FieldUpdate::SimDistance(_) | FieldUpdate::SimHeight(_) | FieldUpdate::SimOrbit(_)
        )
    }
}

impl FormState {
    /// Apply a field update. Selecting a camera category resets the dependent
    /// model and lens fields.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Subject(v) => self.subject = v,
            FieldUpdate::Mood(v) => self.mood = v,
            FieldUpdate::AddStyle(v) => self.styles.push(v),
            FieldUpdate::RemoveStyle(v) => self.styles.retain(|s| s != &v),
            FieldUpdate::CameraCategory(v) => {
                self.camera_category = v;
                self.camera_model.clear();
                self.camera_lens.clear();
            }
            FieldUpdate::CameraModel(v) => self.camera_model = v,
            FieldUpdate::CameraLens(v) => self.camera_lens = v,
            FieldUpdate::Lighting(v) => self.lighting = v,
            FieldUpdate::AddTexture(v) => self.textures.push(v),
            FieldUpdate::RemoveTexture(v) => self.textures.retain(|t| t != &v),
            FieldUpdate::Artist(v) => self.artist = v,
            FieldUpdate::Negative(v) => self.negative = v,
            FieldUpdate::EditTask(v) => self.edit_task = v,
            FieldUpdate::EditSubject(v) => self.edit_subject = v,
            FieldUpdate::EditSeamless(v) => self.edit_seamless = v,
            FieldUpdate::EditMatchLighting(v) => self.edit_match_lighting = v,
            FieldUpdate::EditHighDetail(v) => self.edit_high_detail = v,
            FieldUpdate::EditNegative(v) => self.edit_negative = v,
            FieldUpdate::SimDistance(v) => self.sim_distance = v,
            FieldUpdate::SimHeight(v) => self.sim_height = v,
            FieldUpdate::SimOrbit(v) => self.sim_orbit = v,
            FieldUpdate::OutputMode(v) => self.output_mode = v,
            FieldUpdate::AspectRatio(v) => self.aspect_ratio = v,
            FieldUpdate::Stylize(v) => self.stylize = v,
            FieldUpdate::Chaos(v) => self.chaos = v,
            FieldUpdate::Niji(v) => self.niji = v,
        }
    }
}
