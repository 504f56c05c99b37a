use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recolor::models::{AppConfig, MapSettings, SettingsOverrides};
use recolor::services::{RecolorRequest, RecolorService};

#[derive(Parser)]
#[command(name = "recolor")]
#[command(about = "Recolor images by snapping pixels to a palette")]
#[command(version)]
struct Cli {
    /// YAML file with presets (falls back to RECOLOR_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a PNG image onto a palette
    Map {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file (default: <input stem>_recolored.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Palette as comma-separated hex colors (e.g. "#FFE5EC,#FFC2D1,#FB6F92")
        #[arg(short, long)]
        palette: Option<String>,

        /// Preset from the config file
        #[arg(long)]
        preset: Option<String>,

        #[command(flatten)]
        params: ParamArgs,
    },
    /// List configured presets
    Presets,
}

#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Blend weight, 0 keeps the original, 1 replaces with the palette color
    #[arg(short, long)]
    weight: Option<f64>,

    /// Contrast before matching (recommended 0.5 to 4)
    #[arg(long)]
    enhance: Option<f64>,

    /// Contrast is divided by this after matching (recommended 0.5 to 2)
    #[arg(long)]
    back_enhance: Option<f64>,

    /// Saturation before matching (recommended 0.1 to 4)
    #[arg(long)]
    saturation: Option<f64>,

    /// Saturation after matching (recommended 0.2 to 2)
    #[arg(long)]
    back_saturation: Option<f64>,

    /// Gamma exponent before matching (recommended 0.7 to 1.3)
    #[arg(long)]
    gamma: Option<f64>,

    /// Inverse gamma exponent after matching (recommended 0.7 to 1.3)
    #[arg(long)]
    back_gamma: Option<f64>,
}

impl From<ParamArgs> for SettingsOverrides {
    fn from(args: ParamArgs) -> Self {
        SettingsOverrides {
            weight: args.weight,
            enhance: args.enhance,
            back_enhance: args.back_enhance,
            saturation: args.saturation,
            back_saturation: args.back_saturation,
            gamma: args.gamma,
            back_gamma: args.back_gamma,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recolor=info,palette_map=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Map {
            input,
            output,
            palette,
            preset,
            params,
        } => run_map_command(
            config,
            RecolorRequest {
                input,
                output,
                palette,
                preset,
                overrides: params.into(),
            },
        ),
        Commands::Presets => {
            run_presets_command(&config);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> AppConfig {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("RECOLOR_CONFIG").ok().map(PathBuf::from));

    match path {
        Some(path) => AppConfig::load(&path),
        None => AppConfig::default(),
    }
}

fn run_map_command(config: AppConfig, request: RecolorRequest) -> anyhow::Result<()> {
    let service = RecolorService::new(config);
    let outcome = service.recolor_file(&request)?;

    println!(
        "Wrote {} ({}x{}, {} palette colors) in {:.2?}",
        outcome.output.display(),
        outcome.width,
        outcome.height,
        outcome.palette_size,
        outcome.elapsed
    );
    Ok(())
}

fn run_presets_command(config: &AppConfig) {
    let names = config.preset_names();
    if names.is_empty() {
        println!("No presets configured.");
        return;
    }

    let default = config.default_preset.as_deref();
    for name in names {
        let Some(preset) = config.presets.get(name) else {
            continue;
        };
        let marker = if Some(name) == default { " (default)" } else { "" };
        let settings = MapSettings::default().apply(&preset.overrides());
        println!("{name}{marker}");
        println!(
            "  palette: {}",
            preset.palette.as_deref().unwrap_or("(none)")
        );
        println!(
            "  weight {}  enhance {}/{}  saturation {}/{}  gamma {}/{}",
            settings.weight,
            settings.tone.contrast,
            settings.back_tone.contrast,
            settings.tone.saturation,
            settings.back_tone.saturation,
            settings.tone.gamma,
            settings.back_tone.gamma,
        );
    }
}
