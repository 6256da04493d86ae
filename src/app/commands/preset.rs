//! Preset subcommands over the storage gateway.

use crate::app::commands::compose::{ComposeOptions, build_session};
use crate::domain::{AppError, Preset, PresetState};
use crate::ports::KeyValueStore;
use crate::services::ProfileStore;

pub fn list<S: KeyValueStore>(profile: &ProfileStore<S>) -> Vec<Preset> {
    profile.load_presets()
}

/// Capture the form described by the flags under a new named preset.
pub fn save<S: KeyValueStore>(
    profile: &ProfileStore<S>,
    name: &str,
    options: &ComposeOptions,
) -> Result<Preset, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Preset name must not be empty".to_string()));
    }

    let session = build_session(options)?;
    let preset = Preset::new(name.to_string(), PresetState::capture(session.form()));

    let mut presets = profile.load_presets();
    presets.push(preset.clone());
    profile.save_presets(&presets);
    Ok(preset)
}

pub fn delete<S: KeyValueStore>(profile: &ProfileStore<S>, id: &str) -> Result<(), AppError> {
    let mut presets = profile.load_presets();
    let before = presets.len();
    presets.retain(|p| p.id != id);
    if presets.len() == before {
        return Err(AppError::PresetNotFound(id.to_string()));
    }
    profile.save_presets(&presets);
    Ok(())
}

pub fn show<S: KeyValueStore>(profile: &ProfileStore<S>, id: &str) -> Result<Preset, AppError> {
    profile
        .load_presets()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::PresetNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStore;

    fn profile() -> ProfileStore<MemoryStore> {
        ProfileStore::new(MemoryStore::new())
    }

    #[test]
    fn save_show_delete_round_trip() {
        let profile = profile();
        let options = ComposeOptions {
            subject: Some("castle ruins".into()),
            camera_category: Some("Photography".into()),
            ..ComposeOptions::default()
        };

        let saved = save(&profile, "ruins", &options).unwrap();
        assert_eq!(list(&profile).len(), 1);

        let shown = show(&profile, &saved.id).unwrap();
        assert_eq!(shown.name, "ruins");
        assert_eq!(shown.state.subject, "castle ruins");
        assert_eq!(shown.state.camera_category, "Photography");

        delete(&profile, &saved.id).unwrap();
        assert!(list(&profile).is_empty());
        assert!(matches!(show(&profile, &saved.id), Err(AppError::PresetNotFound(_))));
    }

    #[test]
    fn blank_names_are_rejected() {
        let profile = profile();
        assert!(save(&profile, "  ", &ComposeOptions::default()).is_err());
    }

    #[test]
    fn deleting_an_unknown_id_fails() {
        let profile = profile();
        assert!(matches!(delete(&profile, "nope"), Err(AppError::PresetNotFound(_))));
    }
}
