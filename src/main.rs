use clap::{Args, Parser, Subcommand};
use framecraft::{AppError, ComposeOptions};

#[derive(Parser)]
#[command(name = "framecraft")]
#[command(version)]
#[command(
    about = "Compose text-to-image prompts from structured fields",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt studio
    #[clap(visible_alias = "s")]
    Studio,
    /// Compose a prompt from flags and print it
    #[clap(visible_alias = "c")]
    Compose(ComposeArgs),
    /// Expand a short idea into a richer visual description
    #[clap(visible_alias = "e")]
    Enrich {
        /// The idea to expand
        idea: String,
    },
    /// Compose from flags, then rewrite the body into both languages
    #[clap(visible_alias = "p")]
    Polish(ComposeArgs),
    /// Copied-prompt history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Named form presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Show the history, newest first
    List,
    /// Delete all history entries
    Clear,
}

#[derive(Subcommand)]
enum PresetAction {
    /// Show all stored presets
    List,
    /// Save the form described by the flags under a name
    Save {
        /// Name for the new preset
        name: String,
        #[command(flatten)]
        form: ComposeArgs,
    },
    /// Delete a preset by id
    Delete {
        /// Preset id (see `preset list`)
        id: String,
    },
    /// Show one preset in full
    Show {
        /// Preset id (see `preset list`)
        id: String,
    },
}

#[derive(Args)]
struct ComposeArgs {
    /// Compose the editing form instead of the creation form
    #[arg(long)]
    editing: bool,
    /// Primary subject of the image
    #[arg(long)]
    subject: Option<String>,
    /// Dominant mood
    #[arg(long)]
    mood: Option<String>,
    /// Style tag (repeatable)
    #[arg(long = "style")]
    styles: Vec<String>,
    /// Camera category (see the built-in gear catalog)
    #[arg(long)]
    camera_category: Option<String>,
    /// Camera model
    #[arg(long)]
    camera_model: Option<String>,
    /// Lens
    #[arg(long)]
    lens: Option<String>,
    /// Lighting description
    #[arg(long)]
    lighting: Option<String>,
    /// Detail/texture tag (repeatable)
    #[arg(long = "texture")]
    textures: Vec<String>,
    /// Artist reference
    #[arg(long)]
    artist: Option<String>,
    /// Negative prompt (creation form)
    #[arg(long)]
    negative: Option<String>,
    /// Editing task type (change, add, remove)
    #[arg(long)]
    edit_task: Option<String>,
    /// Edit target (editing form)
    #[arg(long)]
    edit_subject: Option<String>,
    /// Drop the seamless-blend modifier
    #[arg(long)]
    no_seamless: bool,
    /// Drop the matching-lighting modifier
    #[arg(long)]
    no_match_lighting: bool,
    /// Add the highly-detailed modifier
    #[arg(long)]
    high_detail: bool,
    /// Negative prompt (editing form)
    #[arg(long)]
    edit_negative: Option<String>,
    /// Simulated camera distance
    #[arg(long)]
    distance: Option<f64>,
    /// Simulated camera height
    #[arg(long)]
    height: Option<f64>,
    /// Simulated orbit angle in radians
    #[arg(long)]
    orbit: Option<f64>,
    /// Output mode: general, midjourney, or json
    #[arg(long)]
    mode: Option<String>,
    /// Aspect ratio, e.g. 16:9
    #[arg(long)]
    ar: Option<String>,
    /// Midjourney stylize weight
    #[arg(long)]
    stylize: Option<u32>,
    /// Midjourney chaos weight
    #[arg(long)]
    chaos: Option<u32>,
    /// Target the niji model instead of the default version
    #[arg(long)]
    niji: bool,
}

impl From<ComposeArgs> for ComposeOptions {
    fn from(args: ComposeArgs) -> Self {
        ComposeOptions {
            editing: args.editing,
            subject: args.subject,
            mood: args.mood,
            styles: args.styles,
            camera_category: args.camera_category,
            camera_model: args.camera_model,
            camera_lens: args.lens,
            lighting: args.lighting,
            textures: args.textures,
            artist: args.artist,
            negative: args.negative,
            edit_task: args.edit_task,
            edit_subject: args.edit_subject,
            no_seamless: args.no_seamless,
            no_match_lighting: args.no_match_lighting,
            high_detail: args.high_detail,
            edit_negative: args.edit_negative,
            distance: args.distance,
            height: args.height,
            orbit: args.orbit,
            mode: args.mode,
            aspect_ratio: args.ar,
            stylize: args.stylize,
            chaos: args.chaos,
            niji: args.niji,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Studio => framecraft::studio(),
        Commands::Compose(args) => framecraft::compose(&args.into()).map(|text| {
            println!("{text}");
        }),
        Commands::Enrich { idea } => framecraft::enrich(&idea).map(|text| {
            println!("{text}");
        }),
        Commands::Polish(args) => framecraft::polish(&args.into()).map(|outcome| {
            println!("primary:   {}", outcome.primary);
            println!("secondary: {}", outcome.secondary);
        }),
        Commands::History { action } => match action {
            HistoryAction::List => framecraft::history_list().map(print_history),
            HistoryAction::Clear => framecraft::history_clear().map(|()| {
                println!("✅ History cleared");
            }),
        },
        Commands::Preset { action } => match action {
            PresetAction::List => framecraft::preset_list().map(print_presets),
            PresetAction::Save { name, form } => {
                framecraft::preset_save(&name, &form.into()).map(|preset| {
                    println!("✅ Preset \"{}\" saved ({})", preset.name, preset.id);
                })
            }
            PresetAction::Delete { id } => framecraft::preset_delete(&id).map(|()| {
                println!("✅ Preset deleted");
            }),
            PresetAction::Show { id } => framecraft::preset_show(&id).map(print_preset),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_history(entries: Vec<framecraft::HistoryEntry>) {
    if entries.is_empty() {
        println!("No history yet.");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{:2}. [{}] {}", i + 1, entry.time, entry.text);
    }
}

fn print_presets(presets: Vec<framecraft::Preset>) {
    if presets.is_empty() {
        println!("No presets saved.");
        return;
    }
    for preset in presets {
        println!("{}  {}", preset.id, preset.name);
    }
}

fn print_preset(preset: framecraft::Preset) {
    println!("{}  {}", preset.id, preset.name);
    match serde_json::to_string_pretty(&preset.state) {
        Ok(state) => println!("{state}"),
        Err(err) => eprintln!("Failed to render preset state: {err}"),
    }
}
