//! Prompt composition.
//!
//! Pure derivation of the final prompt text from the form state, the active
//! tab, and the current shot descriptor. Composing never touches I/O and never
//! mutates anything; the session layer decides when to recompute.

use serde::Serialize;

use crate::domain::camera::{ANALOG_FILM, ANALOG_FILM_AESTHETIC};
use crate::domain::form::{ActiveTab, DEFAULT_STYLIZE, FormState, OutputMode};
use crate::domain::shot::{CameraAngle, CameraView, ShotDescriptor};

/// Placeholder shown while the creation subject is empty.
pub const CREATION_PLACEHOLDER: &str = "Enter a subject in the creation form...";

/// Placeholder shown while the editing target is empty.
pub const EDITING_PLACEHOLDER: &str = "Enter an edit target in the editing form...";

/// Midjourney invocation marker.
pub const MIDJOURNEY_PREFIX: &str = "/imagine prompt: ";

/// Result of composing the form state.
#[derive(Debug, Clone, PartialEq)]
pub enum Composition {
    /// Nothing to compose on this tab (history).
    Empty,
    /// The required subject field for the tab is empty.
    MissingSubject(ActiveTab),
    /// A composable prompt.
    Prompt(ComposedPrompt),
}

/// A composed prompt, kept structural: the body and the directive suffix stay
/// separate so polish can rewrite the body without touching the directives.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    body: String,
    negative: String,
    mode: OutputMode,
    aspect_ratio: String,
    stylize: u32,
    chaos: u32,
    niji: bool,
}

#[derive(Serialize)]
struct JsonPrompt<'a> {
    prompt: &'a str,
    negative_prompt: &'a str,
    aspect_ratio: &'a str,
}

impl ComposedPrompt {
    /// The raw prompt body, before any directive flags.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Invocation marker for the current mode.
    pub fn prefix(&self) -> &'static str {
        match self.mode {
            OutputMode::Midjourney => MIDJOURNEY_PREFIX,
            _ => "",
        }
    }

    /// Directive flag suffix, with its leading space. Empty when no directive
    /// applies. Not meaningful in json mode.
    pub fn suffix(&self) -> String {
        let mut suffix = String::new();
        if !self.aspect_ratio.is_empty() {
            suffix.push_str(&format!(" --ar {}", self.aspect_ratio));
        }
        if self.mode == OutputMode::Midjourney {
            if self.stylize != DEFAULT_STYLIZE {
                suffix.push_str(&format!(" --s {}", self.stylize));
            }
            if self.chaos != 0 {
                suffix.push_str(&format!(" --c {}", self.chaos));
            }
            suffix.push_str(if self.niji { " --niji 6" } else { " --v 6.0" });
        }
        if !self.negative.is_empty() {
            suffix.push_str(&format!(" --no {}", self.negative));
        }
        suffix
    }

    /// Render the final output text for the current mode.
    pub fn render(&self) -> String {
        if self.mode == OutputMode::Json {
            let aspect_ratio =
                if self.aspect_ratio.is_empty() { "1:1" } else { self.aspect_ratio.as_str() };
            let payload = JsonPrompt {
                prompt: &self.body,
                negative_prompt: &self.negative,
                aspect_ratio,
            };
            return serde_json::to_string_pretty(&payload).unwrap_or_default();
        }

        format!("{}{}{}", self.prefix(), self.body, self.suffix())
    }

    /// Rebuild a display-ready string around a rewritten body, reusing the
    /// original prefix and directive suffix verbatim.
    pub fn with_body(&self, body: &str) -> String {
        format!("{}{}{}", self.prefix(), body, self.suffix())
    }
}

impl Composition {
    /// Whether downstream actions (copy, polish) may use this composition.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Composition::Prompt(_))
    }

    pub fn as_prompt(&self) -> Option<&ComposedPrompt> {
        match self {
            Composition::Prompt(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// Text for the display layer. Placeholders are display-only; they are
    /// never copied, polished, or persisted.
    pub fn display(&self) -> String {
        match self {
            Composition::Empty => String::new(),
            Composition::MissingSubject(ActiveTab::Editing) => EDITING_PLACEHOLDER.to_string(),
            Composition::MissingSubject(_) => CREATION_PLACEHOLDER.to_string(),
            Composition::Prompt(prompt) => prompt.render(),
        }
    }
}

/// Compose the form state into a prompt for the active tab.
pub fn compose(form: &FormState, tab: ActiveTab, descriptor: &ShotDescriptor) -> Composition {
    let mut parts: Vec<String> = Vec::new();
    let negative;

    match tab {
        ActiveTab::Creation => {
            let subject = form.subject.trim();
            if subject.is_empty() {
                return Composition::MissingSubject(tab);
            }
            parts.push(subject.to_string());

            if !form.mood.is_empty() {
                parts.push(format!("{} mood", form.mood));
            }
            if !form.styles.is_empty() {
                parts.push(format!("Style: {}", form.styles.join(", ")));
            }

            let camera = if !form.camera_model.is_empty() {
                format!("shot on {}", form.camera_model)
            } else if form.camera_category == ANALOG_FILM {
                ANALOG_FILM_AESTHETIC.to_string()
            } else {
                String::new()
            };
            let lens = if form.camera_lens.is_empty() {
                String::new()
            } else {
                format!("with {}", form.camera_lens)
            };
            let cam_parts: Vec<String> = [camera, lens, form.lighting.clone()]
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect();
            if !cam_parts.is_empty() {
                parts.push(cam_parts.join(", "));
            }

            push_composition_clause(&mut parts, descriptor);

            if !form.textures.is_empty() {
                parts.push(form.textures.join(", "));
            }
            if !form.artist.is_empty() {
                parts.push(format!("art by {}", form.artist));
            }

            negative = form.negative.trim().to_string();
        }
        ActiveTab::Editing => {
            let subject = form.edit_subject.trim();
            if subject.is_empty() {
                return Composition::MissingSubject(tab);
            }
            parts.push(subject.to_string());

            let mods: Vec<&str> = [
                form.edit_seamless.then_some("seamless blend"),
                form.edit_match_lighting.then_some("matching lighting"),
                form.edit_high_detail.then_some("highly detailed"),
            ]
            .into_iter()
            .flatten()
            .collect();
            if !mods.is_empty() {
                parts.push(mods.join(", "));
            }

            push_composition_clause(&mut parts, descriptor);

            negative = form.edit_negative.trim().to_string();
        }
        ActiveTab::History => return Composition::Empty,
    }

    let body =
        parts.into_iter().filter(|p| !p.trim().is_empty()).collect::<Vec<_>>().join(", ");

    Composition::Prompt(ComposedPrompt {
        body,
        negative,
        mode: form.output_mode,
        aspect_ratio: form.aspect_ratio.clone(),
        stylize: form.stylize,
        chaos: form.chaos,
        niji: form.niji,
    })
}

/// Shot clause from the descriptor. The neutral defaults (Eye Level, Front
/// View) are not worth stating and stay out of the text.
fn push_composition_clause(parts: &mut Vec<String>, descriptor: &ShotDescriptor) {
    let mut clause: Vec<&str> = vec![descriptor.distance.label()];
    if descriptor.angle != CameraAngle::EyeLevel {
        clause.push(descriptor.angle.label());
    }
    if descriptor.view != CameraView::FrontView {
        clause.push(descriptor.view.label());
    }
    parts.push(clause.join(", "));
}
