//! Interactive studio loop: a form-driven session in the terminal.
//!
//! Each pass shows the composed (or polished) prompt, then dispatches one
//! menu action. Remote failures print a notice and drop back to the menu;
//! only I/O errors on the terminal itself abort the loop.

use crate::app::cli;
use crate::app::context::AppContext;
use crate::app::session::Session;
use crate::domain::{
    ActiveTab, AppError, CameraPosition, FieldUpdate, HistoryLog, OutputMode, ViewLanguage, camera,
};
use crate::ports::{ClipboardWriter, KeyValueStore, TextEnhancer};
use crate::services::HeadlessScenePreview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EditSubject,
    Enrich,
    EditMood,
    AddStyle,
    RemoveStyle,
    CameraGear,
    EditLighting,
    AddTexture,
    RemoveTexture,
    EditArtist,
    EditNegative,
    EditTask,
    EditTarget,
    ToggleSeamless,
    ToggleMatchLighting,
    ToggleHighDetail,
    EditEditNegative,
    Simulation,
    Output,
    Polish,
    ToggleLanguage,
    Copy,
    SavePreset,
    LoadPreset,
    DeletePreset,
    ClearHistory,
    SwitchTab,
    Reset,
    Quit,
}

pub fn execute<E: TextEnhancer, S: KeyValueStore, C: ClipboardWriter>(
    ctx: &mut AppContext<E, S, C>,
) -> Result<(), AppError> {
    let mut session = Session::new(Box::new(HeadlessScenePreview::new()));
    session.restore(
        HistoryLog::from_entries(ctx.profile().load_history()),
        ctx.profile().load_presets(),
    );

    loop {
        print_status(&session);

        let actions = menu_for(&session);
        let labels: Vec<String> = actions.iter().map(|(label, _)| label.to_string()).collect();
        let Some(index) = cli::select("Action", &labels)? else {
            break;
        };

        match actions[index].1 {
            Action::Quit => break,
            action => dispatch(action, &mut session, ctx)?,
        }
    }

    Ok(())
}

fn print_status(session: &Session) {
    let descriptor = session.descriptor();
    println!();
    println!(
        "[{}] shot: {}, {}, {}",
        session.tab().as_str(),
        descriptor.distance.label(),
        descriptor.angle.label(),
        descriptor.view.label()
    );
    if session.tab() == ActiveTab::History {
        if session.history().is_empty() {
            println!("History is empty.");
        } else {
            for (i, entry) in session.history().entries().iter().enumerate() {
                println!("{:2}. [{}] {}", i + 1, entry.time, entry.text);
            }
        }
        return;
    }

    let language = match session.view_language() {
        ViewLanguage::Primary => "primary",
        ViewLanguage::Secondary => "secondary",
    };
    let polished = if session.polished().is_some() { " (polished)" } else { "" };
    println!("Prompt [{language}{polished}]:");
    println!("  {}", session.displayed_prompt());
}

fn menu_for(session: &Session) -> Vec<(&'static str, Action)> {
    let mut actions: Vec<(&'static str, Action)> = Vec::new();
    match session.tab() {
        ActiveTab::Creation => {
            actions.extend([
                ("Edit subject", Action::EditSubject),
                ("Enrich subject via Gemini", Action::Enrich),
                ("Edit mood", Action::EditMood),
                ("Add style tag", Action::AddStyle),
                ("Remove style tag", Action::RemoveStyle),
                ("Camera gear", Action::CameraGear),
                ("Edit lighting", Action::EditLighting),
                ("Add texture tag", Action::AddTexture),
                ("Remove texture tag", Action::RemoveTexture),
                ("Edit artist reference", Action::EditArtist),
                ("Edit negative prompt", Action::EditNegative),
            ]);
        }
        ActiveTab::Editing => {
            actions.extend([
                ("Edit task type", Action::EditTask),
                ("Edit target", Action::EditTarget),
                ("Toggle seamless blend", Action::ToggleSeamless),
                ("Toggle matching lighting", Action::ToggleMatchLighting),
                ("Toggle high detail", Action::ToggleHighDetail),
                ("Edit negative prompt", Action::EditEditNegative),
            ]);
        }
        ActiveTab::History => {
            actions.push(("Clear history", Action::ClearHistory));
        }
    }

    if session.tab() != ActiveTab::History {
        actions.extend([
            ("Camera simulation", Action::Simulation),
            ("Output settings", Action::Output),
            ("Polish prompt via Gemini", Action::Polish),
            ("Toggle display language", Action::ToggleLanguage),
            ("Copy prompt", Action::Copy),
            ("Save preset", Action::SavePreset),
            ("Load preset", Action::LoadPreset),
            ("Delete preset", Action::DeletePreset),
            ("Reset form", Action::Reset),
        ]);
    }
    actions.push(("Switch tab", Action::SwitchTab));
    actions.push(("Quit", Action::Quit));
    actions
}

fn dispatch<E: TextEnhancer, S: KeyValueStore, C: ClipboardWriter>(
    action: Action,
    session: &mut Session,
    ctx: &mut AppContext<E, S, C>,
) -> Result<(), AppError> {
    match action {
        Action::EditSubject => {
            edit_text(session, "Subject", |form| form.subject.clone(), FieldUpdate::Subject)?;
        }
        Action::Enrich => enrich(session, ctx)?,
        Action::EditMood => {
            edit_text(session, "Mood", |form| form.mood.clone(), FieldUpdate::Mood)?;
        }
        Action::AddStyle => add_tag(session, "Style tag", FieldUpdate::AddStyle)?,
        Action::RemoveStyle => {
            let styles = session.form().styles.clone();
            remove_tag(session, &styles, FieldUpdate::RemoveStyle)?;
        }
        Action::CameraGear => camera_gear(session)?,
        Action::EditLighting => {
            edit_text(session, "Lighting", |form| form.lighting.clone(), FieldUpdate::Lighting)?;
        }
        Action::AddTexture => add_tag(session, "Texture tag", FieldUpdate::AddTexture)?,
        Action::RemoveTexture => {
            let textures = session.form().textures.clone();
            remove_tag(session, &textures, FieldUpdate::RemoveTexture)?;
        }
        Action::EditArtist => {
            edit_text(session, "Artist reference", |form| form.artist.clone(), FieldUpdate::Artist)?;
        }
        Action::EditNegative => {
            edit_text(session, "Negative prompt", |form| form.negative.clone(), FieldUpdate::Negative)?;
        }
        Action::EditTask => {
            let tasks = ["change", "add", "remove"];
            let labels: Vec<String> = tasks.iter().map(|t| t.to_string()).collect();
            if let Some(index) = cli::select("Task type", &labels)? {
                session.apply(FieldUpdate::EditTask(tasks[index].to_string()));
            }
        }
        Action::EditTarget => {
            edit_text(session, "Edit target", |form| form.edit_subject.clone(), FieldUpdate::EditSubject)?;
        }
        Action::ToggleSeamless => {
            let value = !session.form().edit_seamless;
            session.apply(FieldUpdate::EditSeamless(value));
        }
        Action::ToggleMatchLighting => {
            let value = !session.form().edit_match_lighting;
            session.apply(FieldUpdate::EditMatchLighting(value));
        }
        Action::ToggleHighDetail => {
            let value = !session.form().edit_high_detail;
            session.apply(FieldUpdate::EditHighDetail(value));
        }
        Action::EditEditNegative => {
            edit_text(
                session,
                "Negative prompt",
                |form| form.edit_negative.clone(),
                FieldUpdate::EditNegative,
            )?;
        }
        Action::Simulation => simulation(session)?,
        Action::Output => output_settings(session)?,
        Action::Polish => polish(session, ctx)?,
        Action::ToggleLanguage => {
            let next = match session.view_language() {
                ViewLanguage::Primary => ViewLanguage::Secondary,
                ViewLanguage::Secondary => ViewLanguage::Primary,
            };
            session.set_view_language(next);
        }
        Action::Copy => {
            match session.copy(ctx.clipboard_mut()) {
                Some(_) => {
                    ctx.profile().save_history(session.history().entries());
                    println!("✅ Prompt copied");
                }
                None => println!("Set a subject before copying."),
            }
        }
        Action::SavePreset => {
            if let Some(name) = cli::prompt_text("Preset name", "")? {
                if name.is_empty() {
                    println!("Preset name must not be empty.");
                } else {
                    let preset = session.save_preset(name);
                    ctx.profile().save_presets(session.presets());
                    println!("✅ Preset \"{}\" saved", preset.name);
                }
            }
        }
        Action::LoadPreset => {
            if let Some(id) = pick_preset(session, "Load preset")? {
                session.load_preset(&id)?;
                println!("✅ Preset loaded");
            }
        }
        Action::DeletePreset => {
            if let Some(id) = pick_preset(session, "Delete preset")? {
                if cli::confirm("Delete this preset?")? {
                    session.delete_preset(&id)?;
                    ctx.profile().save_presets(session.presets());
                    println!("✅ Preset deleted");
                }
            }
        }
        Action::ClearHistory => {
            if cli::confirm("Clear all history?")? {
                session.clear_history();
                ctx.profile().clear_history();
                println!("✅ History cleared");
            }
        }
        Action::SwitchTab => {
            let tabs = ["creation", "editing", "history"];
            let labels: Vec<String> = tabs.iter().map(|t| t.to_string()).collect();
            if let Some(index) = cli::select("Tab", &labels)? {
                session.set_tab(match index {
                    0 => ActiveTab::Creation,
                    1 => ActiveTab::Editing,
                    _ => ActiveTab::History,
                });
            }
        }
        Action::Reset => {
            if cli::confirm("Reset every field?")? {
                session.reset();
                println!("✅ Form reset");
            }
        }
        Action::Quit => {}
    }
    Ok(())
}

fn edit_text(
    session: &mut Session,
    label: &str,
    current: impl Fn(&crate::domain::FormState) -> String,
    update: impl Fn(String) -> FieldUpdate,
) -> Result<(), AppError> {
    let initial = current(session.form());
    if let Some(value) = cli::prompt_text(label, &initial)? {
        session.apply(update(value));
    }
    Ok(())
}

fn add_tag(
    session: &mut Session,
    label: &str,
    update: impl Fn(String) -> FieldUpdate,
) -> Result<(), AppError> {
    if let Some(tag) = cli::prompt_text(label, "")? {
        if !tag.is_empty() {
            session.apply(update(tag));
        }
    }
    Ok(())
}

fn remove_tag(
    session: &mut Session,
    tags: &[String],
    update: impl Fn(String) -> FieldUpdate,
) -> Result<(), AppError> {
    if tags.is_empty() {
        println!("No tags to remove.");
        return Ok(());
    }
    if let Some(index) = cli::select("Remove", tags)? {
        session.apply(update(tags[index].clone()));
    }
    Ok(())
}

fn pick_preset(session: &Session, label: &str) -> Result<Option<String>, AppError> {
    let presets = session.presets();
    if presets.is_empty() {
        println!("No presets saved.");
        return Ok(None);
    }
    let labels: Vec<String> = presets.iter().map(|p| p.name.clone()).collect();
    if let Some(index) = cli::select(label, &labels)? {
        Ok(Some(presets[index].id.clone()))
    } else {
        Ok(None)
    }
}

fn camera_gear(session: &mut Session) -> Result<(), AppError> {
    let mut categories: Vec<String> = vec!["(none)".to_string()];
    categories.extend(camera::category_names().iter().map(|n| n.to_string()));
    let Some(index) = cli::select("Camera category", &categories)? else {
        return Ok(());
    };

    if index == 0 {
        session.apply(FieldUpdate::CameraCategory(String::new()));
        return Ok(());
    }
    let category = categories[index].clone();
    session.apply(FieldUpdate::CameraCategory(category.clone()));

    let mut models: Vec<String> = vec!["(none)".to_string()];
    models.extend(camera::models_for(&category).iter().map(|m| m.to_string()));
    if let Some(index) = cli::select("Camera model", &models)?
        && index > 0
    {
        session.apply(FieldUpdate::CameraModel(models[index].clone()));
    }

    let mut lenses: Vec<String> = vec!["(none)".to_string()];
    lenses.extend(camera::lenses_for(&category).iter().map(|l| l.to_string()));
    if let Some(index) = cli::select("Lens", &lenses)?
        && index > 0
    {
        session.apply(FieldUpdate::CameraLens(lenses[index].clone()));
    }

    Ok(())
}

fn simulation(session: &mut Session) -> Result<(), AppError> {
    let form = session.form();
    let (distance, height, orbit) = (form.sim_distance, form.sim_height, form.sim_orbit);

    if let Some(value) = cli::prompt_number("Camera distance", distance)? {
        session.apply(FieldUpdate::SimDistance(value));
    }
    if let Some(value) = cli::prompt_number("Camera height", height)? {
        session.apply(FieldUpdate::SimHeight(value));
    }
    if let Some(value) = cli::prompt_number("Orbit angle (radians)", orbit)? {
        session.apply(FieldUpdate::SimOrbit(value));
    }

    let form = session.form();
    let position = CameraPosition::from_orbit(form.sim_distance, form.sim_height, form.sim_orbit);
    let descriptor = session.descriptor();
    println!(
        "Camera at ({:.1}, {:.1}, {:.1}): {}, {}, {}",
        position.x,
        position.y,
        position.z,
        descriptor.distance.label(),
        descriptor.angle.label(),
        descriptor.view.label()
    );
    Ok(())
}

fn output_settings(session: &mut Session) -> Result<(), AppError> {
    let modes = [OutputMode::General, OutputMode::Midjourney, OutputMode::Json];
    let labels: Vec<String> = modes.iter().map(|m| m.as_str().to_string()).collect();
    if let Some(index) = cli::select("Output mode", &labels)? {
        session.apply(FieldUpdate::OutputMode(modes[index]));
    }

    let aspect = session.form().aspect_ratio.clone();
    if let Some(value) = cli::prompt_text("Aspect ratio (empty for none)", &aspect)? {
        session.apply(FieldUpdate::AspectRatio(value));
    }

    if session.form().output_mode == OutputMode::Midjourney {
        let (stylize, chaos) = (session.form().stylize, session.form().chaos);
        if let Some(value) = cli::prompt_number("Stylize weight", stylize)? {
            session.apply(FieldUpdate::Stylize(value));
        }
        if let Some(value) = cli::prompt_number("Chaos weight", chaos)? {
            session.apply(FieldUpdate::Chaos(value));
        }
        let niji = cli::confirm("Use niji model?")?;
        session.apply(FieldUpdate::Niji(niji));
    }
    Ok(())
}

fn enrich<E: TextEnhancer, S: KeyValueStore, C: ClipboardWriter>(
    session: &mut Session,
    ctx: &AppContext<E, S, C>,
) -> Result<(), AppError> {
    let Some(idea) = session.begin_enrich() else {
        println!("Set a subject first (no enrich while one is running).");
        return Ok(());
    };
    println!("Enriching subject...");
    let result = ctx.enhancer().enrich(&idea);
    match session.complete_enrich(result) {
        Ok(()) => println!("✅ Idea enriched"),
        Err(err) => println!("Failed to enrich idea: {err}"),
    }
    Ok(())
}

fn polish<E: TextEnhancer, S: KeyValueStore, C: ClipboardWriter>(
    session: &mut Session,
    ctx: &AppContext<E, S, C>,
) -> Result<(), AppError> {
    let request = match session.begin_polish() {
        Ok(Some(request)) => request,
        Ok(None) => {
            println!("A polish request is already running.");
            return Ok(());
        }
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    println!("Polishing prompt...");
    let result = ctx.enhancer().polish(request.body());
    match session.complete_polish(request, result) {
        Ok(()) => println!("✅ Bilingual prompt ready"),
        Err(err) => println!("Failed to polish prompt: {err}"),
    }
    Ok(())
}
