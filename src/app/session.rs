//! The session controller: owns all user-editable state, wires the composer,
//! the preview, and the enhancement cache together, and dispatches actions.
//!
//! Every field mutation goes through [`Session::apply`], which is the single
//! place deciding whether the polished cache is stale. Reading the composed
//! prompt never mutates anything.

use chrono::Local;

use crate::domain::{
    ActiveTab, AppError, ComposedPrompt, Composition, FieldUpdate, FormState, HistoryLog,
    OutputMode, Preset, PresetState, ShotDescriptor, ViewLanguage, compose,
};
use crate::ports::{ClipboardWriter, PolishedPrompt, ScenePreview};

const HISTORY_TIME_FORMAT: &str = "%d/%m/%y %H:%M";

/// Display-ready polished variants, cached until a composition input changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolishedCache {
    pub primary: String,
    pub secondary: String,
}

impl PolishedCache {
    fn for_language(&self, language: ViewLanguage) -> &str {
        match language {
            ViewLanguage::Primary => &self.primary,
            ViewLanguage::Secondary => &self.secondary,
        }
    }
}

/// Captured inputs for a pending polish call.
///
/// The composed prompt is frozen at begin time, so the remote rewrite can
/// never alter the directive pieces; completion re-attaches them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PolishRequest {
    prompt: ComposedPrompt,
}

impl PolishRequest {
    /// The prompt body to send for rewriting.
    pub fn body(&self) -> &str {
        self.prompt.body()
    }
}

pub struct Session {
    form: FormState,
    tab: ActiveTab,
    view_language: ViewLanguage,
    descriptor: ShotDescriptor,
    preview: Box<dyn ScenePreview>,
    polished: Option<PolishedCache>,
    enrich_pending: bool,
    polish_pending: bool,
    history: HistoryLog,
    presets: Vec<Preset>,
    selected_preset: Option<String>,
}

impl Session {
    pub fn new(mut preview: Box<dyn ScenePreview>) -> Self {
        let form = FormState::default();
        let descriptor =
            preview.update_camera_position(form.sim_distance, form.sim_height, form.sim_orbit);
        Self {
            form,
            tab: ActiveTab::Creation,
            view_language: ViewLanguage::Primary,
            descriptor,
            preview,
            polished: None,
            enrich_pending: false,
            polish_pending: false,
            history: HistoryLog::default(),
            presets: Vec::new(),
            selected_preset: None,
        }
    }

    /// Seed persisted collections loaded at startup.
    pub fn restore(&mut self, history: HistoryLog, presets: Vec<Preset>) {
        self.history = history;
        self.presets = presets;
    }

    // ------------------------------------------------------------------
    // State access
    // ------------------------------------------------------------------

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn tab(&self) -> ActiveTab {
        self.tab
    }

    pub fn view_language(&self) -> ViewLanguage {
        self.view_language
    }

    pub fn descriptor(&self) -> &ShotDescriptor {
        &self.descriptor
    }

    pub fn polished(&self) -> Option<&PolishedCache> {
        self.polished.as_ref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Apply a field update. Composition-feeding updates drop the polished
    /// cache; camera updates recompute the shot descriptor synchronously.
    pub fn apply(&mut self, update: FieldUpdate) {
        let clears_cache = update.clears_polish_cache();
        let moves_camera = update.moves_camera();

        self.form.apply(update);

        if moves_camera {
            self.descriptor = self.preview.update_camera_position(
                self.form.sim_distance,
                self.form.sim_height,
                self.form.sim_orbit,
            );
        }
        if clears_cache {
            self.polished = None;
        }
    }

    /// Switch tabs. Deliberately leaves the polished cache alone.
    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.tab = tab;
    }

    /// Choose which polished variant the display shows. Never clears the cache.
    pub fn set_view_language(&mut self, language: ViewLanguage) {
        self.view_language = language;
    }

    /// Reset every field to its default and drop any selection.
    pub fn reset(&mut self) {
        self.form = FormState::default();
        self.descriptor = self.preview.update_camera_position(
            self.form.sim_distance,
            self.form.sim_height,
            self.form.sim_orbit,
        );
        self.polished = None;
        self.selected_preset = None;
    }

    // ------------------------------------------------------------------
    // Composition and display
    // ------------------------------------------------------------------

    /// Compose the current state. Pure; repeated calls are byte-identical.
    pub fn composition(&self) -> Composition {
        compose(&self.form, self.tab, &self.descriptor)
    }

    /// Text the display layer shows: the polished variant for the selected
    /// language when cached, otherwise the fresh composition.
    pub fn displayed_prompt(&self) -> String {
        if let Some(cache) = &self.polished {
            return cache.for_language(self.view_language).to_string();
        }
        self.composition().display()
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Copy the displayed prompt: record it in history and hand it to the
    /// clipboard. Refuses placeholders. Returns the copied text.
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardWriter) -> Option<String> {
        let text = match &self.polished {
            Some(cache) => cache.for_language(self.view_language).to_string(),
            None => {
                let composition = self.composition();
                if !composition.is_actionable() {
                    return None;
                }
                composition.display()
            }
        };

        let time = Local::now().format(HISTORY_TIME_FORMAT).to_string();
        self.history.push(&text, time);

        // Clipboard trouble must not lose the copy action itself.
        if let Err(err) = clipboard.write_text(&text) {
            eprintln!("{err}");
        }

        Some(text)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Start an enrich call: returns the idea to send, or `None` when one is
    /// already pending or the subject is empty.
    pub fn begin_enrich(&mut self) -> Option<String> {
        if self.enrich_pending || self.form.subject.trim().is_empty() {
            return None;
        }
        self.enrich_pending = true;
        Some(self.form.subject.clone())
    }

    /// Finish an enrich call. Success replaces the subject (which invalidates
    /// any polished cache); failure leaves the form untouched.
    pub fn complete_enrich(&mut self, result: Result<String, AppError>) -> Result<(), AppError> {
        self.enrich_pending = false;
        let enriched = result?;
        self.apply(FieldUpdate::Subject(enriched));
        Ok(())
    }

    /// Start a polish call: returns the body to send with its frozen
    /// directive pieces. `Ok(None)` when a polish is already pending.
    pub fn begin_polish(&mut self) -> Result<Option<PolishRequest>, AppError> {
        if self.polish_pending {
            return Ok(None);
        }
        if self.form.output_mode == OutputMode::Json {
            return Err(AppError::PolishUnsupportedMode);
        }
        let composition = self.composition();
        let Some(prompt) = composition.as_prompt() else {
            return Err(AppError::EmptySubject(self.tab.as_str().to_string()));
        };

        self.polish_pending = true;
        Ok(Some(PolishRequest { prompt: prompt.clone() }))
    }

    /// Finish a polish call. The result lands in whatever the current cache
    /// slot is (last writer wins); the next composition edit clears it.
    pub fn complete_polish(
        &mut self,
        request: PolishRequest,
        result: Result<PolishedPrompt, AppError>,
    ) -> Result<(), AppError> {
        self.polish_pending = false;
        let polished = result?;
        self.polished = Some(PolishedCache {
            primary: request.prompt.with_body(&polished.primary),
            secondary: request.prompt.with_body(&polished.secondary),
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Presets
    // ------------------------------------------------------------------

    /// Snapshot the current form under a new named preset and select it.
    pub fn save_preset(&mut self, name: String) -> Preset {
        let preset = Preset::new(name, PresetState::capture(&self.form));
        self.selected_preset = Some(preset.id.clone());
        self.presets.push(preset.clone());
        preset
    }

    /// Apply a stored preset to the form.
    pub fn load_preset(&mut self, id: &str) -> Result<(), AppError> {
        let preset = self
            .presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::PresetNotFound(id.to_string()))?;

        preset.state.clone().apply_to(&mut self.form);
        self.descriptor = self.preview.update_camera_position(
            self.form.sim_distance,
            self.form.sim_height,
            self.form.sim_orbit,
        );
        self.polished = None;
        self.selected_preset = Some(id.to_string());
        Ok(())
    }

    pub fn delete_preset(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        if self.presets.len() == before {
            return Err(AppError::PresetNotFound(id.to_string()));
        }
        if self.selected_preset.as_deref() == Some(id) {
            self.selected_preset = None;
        }
        Ok(())
    }
}
