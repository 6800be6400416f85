use anyhow::Context;
use clap::{ArgAction, Parser};
use inkmask::Config;
use inkmask::InputState;
use inkmask::config::ColorSpec;
use inkmask::export::{ExportOptions, export_to_path};
use inkmask::replay::ReplayScript;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKMASK_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "inkmask")]
#[command(version = VERSION, about = "Freehand drawing surface with temporal erase masking")]
struct Cli {
    /// Replay a TOML script of pointer steps against a fresh surface
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Render the result to a .png or .svg file
    #[arg(long, short = 'o', value_name = "FILE", requires = "replay")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config)
    #[arg(long, value_name = "PIXELS", requires = "replay")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config)
    #[arg(long, value_name = "PIXELS", requires = "replay")]
    height: Option<u32>,

    /// Print the composed render plan, one stroke per line
    #[arg(long, action = ArgAction::SetTrue, requires = "replay")]
    print_plan: bool,

    /// Load configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "replay")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.replay.as_deref() else {
        // No flags: show usage
        println!("inkmask: Freehand drawing surface with temporal erase masking");
        println!();
        println!("Usage:");
        println!("  inkmask --replay <SCRIPT> [--output FILE] [--print-plan]");
        println!("  inkmask --init-config    Write ~/.config/inkmask/config.toml");
        println!("  inkmask --help           Show help");
        println!();
        println!("Script steps:");
        println!("  [[step]] action = \"down\" | \"move\" | \"up\" | \"leave\" | \"cancel\"");
        println!("           action = \"tool\" | \"style\" | \"clear\"");
        return Ok(());
    };

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }

    let script = ReplayScript::load(script_path)?;
    let mut state = InputState::from_config(&config);
    let summary = script.apply(&mut state);
    log::info!(
        "Replayed {} step(s): {} consumed, {} passed through, {} stroke(s) stored",
        summary.steps,
        summary.consumed,
        summary.passthrough,
        state.strokes().len()
    );

    if cli.print_plan {
        for entry in &state.render_plan() {
            println!("{entry}");
        }
    }

    if let Some(output) = cli.output.as_deref() {
        let options = ExportOptions {
            width: config.canvas.width,
            height: config.canvas.height,
            background: config.canvas.background.as_ref().map(ColorSpec::to_color),
        };
        let written = export_to_path(&state, output, &options)
            .with_context(|| format!("Failed to export to {}", output.display()))?;
        println!("Wrote {}", written.display());
    }

    Ok(())
}
