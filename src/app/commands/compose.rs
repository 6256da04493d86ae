//! One-shot composition from command-line flags.

use crate::app::Session;
use crate::domain::{ActiveTab, AppError, FieldUpdate, OutputMode};
use crate::services::HeadlessScenePreview;

/// Flag-driven form input shared by `compose`, `polish`, and `preset save`.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Compose the editing form instead of the creation form.
    pub editing: bool,
    pub subject: Option<String>,
    pub mood: Option<String>,
    pub styles: Vec<String>,
    pub camera_category: Option<String>,
    pub camera_model: Option<String>,
    pub camera_lens: Option<String>,
    pub lighting: Option<String>,
    pub textures: Vec<String>,
    pub artist: Option<String>,
    pub negative: Option<String>,
    pub edit_task: Option<String>,
    pub edit_subject: Option<String>,
    pub no_seamless: bool,
    pub no_match_lighting: bool,
    pub high_detail: bool,
    pub edit_negative: Option<String>,
    pub distance: Option<f64>,
    pub height: Option<f64>,
    pub orbit: Option<f64>,
    pub mode: Option<String>,
    pub aspect_ratio: Option<String>,
    pub stylize: Option<u32>,
    pub chaos: Option<u32>,
    pub niji: bool,
}

impl ComposeOptions {
    fn tab(&self) -> ActiveTab {
        if self.editing { ActiveTab::Editing } else { ActiveTab::Creation }
    }
}

/// Build a session reflecting the given flags. Every flag flows through the
/// same update path interactive edits use.
pub(crate) fn build_session(options: &ComposeOptions) -> Result<Session, AppError> {
    let mut session = Session::new(Box::new(HeadlessScenePreview::new()));
    session.set_tab(options.tab());

    let mut updates: Vec<FieldUpdate> = Vec::new();

    if let Some(value) = &options.subject {
        updates.push(FieldUpdate::Subject(value.clone()));
    }
    if let Some(value) = &options.mood {
        updates.push(FieldUpdate::Mood(value.clone()));
    }
    for style in &options.styles {
        updates.push(FieldUpdate::AddStyle(style.clone()));
    }
    if let Some(value) = &options.camera_category {
        updates.push(FieldUpdate::CameraCategory(value.clone()));
    }
    if let Some(value) = &options.camera_model {
        updates.push(FieldUpdate::CameraModel(value.clone()));
    }
    if let Some(value) = &options.camera_lens {
        updates.push(FieldUpdate::CameraLens(value.clone()));
    }
    if let Some(value) = &options.lighting {
        updates.push(FieldUpdate::Lighting(value.clone()));
    }
    for texture in &options.textures {
        updates.push(FieldUpdate::AddTexture(texture.clone()));
    }
    if let Some(value) = &options.artist {
        updates.push(FieldUpdate::Artist(value.clone()));
    }
    if let Some(value) = &options.negative {
        updates.push(FieldUpdate::Negative(value.clone()));
    }
    if let Some(value) = &options.edit_task {
        updates.push(FieldUpdate::EditTask(value.clone()));
    }
    if let Some(value) = &options.edit_subject {
        updates.push(FieldUpdate::EditSubject(value.clone()));
    }
    if options.no_seamless {
        updates.push(FieldUpdate::EditSeamless(false));
    }
    if options.no_match_lighting {
        updates.push(FieldUpdate::EditMatchLighting(false));
    }
    if options.high_detail {
        updates.push(FieldUpdate::EditHighDetail(true));
    }
    if let Some(value) = &options.edit_negative {
        updates.push(FieldUpdate::EditNegative(value.clone()));
    }
    if let Some(value) = options.distance {
        updates.push(FieldUpdate::SimDistance(value));
    }
    if let Some(value) = options.height {
        updates.push(FieldUpdate::SimHeight(value));
    }
    if let Some(value) = options.orbit {
        updates.push(FieldUpdate::SimOrbit(value));
    }
    if let Some(value) = &options.mode {
        updates.push(FieldUpdate::OutputMode(OutputMode::parse(value)?));
    }
    if let Some(value) = &options.aspect_ratio {
        updates.push(FieldUpdate::AspectRatio(value.clone()));
    }
    if let Some(value) = options.stylize {
        updates.push(FieldUpdate::Stylize(value));
    }
    if let Some(value) = options.chaos {
        updates.push(FieldUpdate::Chaos(value));
    }
    if options.niji {
        updates.push(FieldUpdate::Niji(true));
    }

    for update in updates {
        session.apply(update);
    }
    Ok(session)
}

/// Compose the final prompt text for the given flags.
pub fn execute(options: &ComposeOptions) -> Result<String, AppError> {
    let session = build_session(options)?;
    let composition = session.composition();
    match composition.as_prompt() {
        Some(prompt) => Ok(prompt.render()),
        None => Err(AppError::EmptySubject(session.tab().as_str().to_string())),
    }
}
