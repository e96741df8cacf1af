mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use render::{ColorMode, RenderOptions, Renderer};
use reportdir_core::{Config, DEFAULT_SKILL_NAME, create_report_structure};
use std::process::ExitCode;

/// reportdir: dated report directory scaffolding
///
/// Creates `<root>/Claude/<SKILL_NAME>/<YYYYMMDD>/` with `data/` and `assets/` inside.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Name of the skill or project the reports belong to (e.g. `reportdir Analysis`)
    #[arg(default_value = DEFAULT_SKILL_NAME, allow_hyphen_values = true)]
    skill_name: String,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    let renderer = Renderer::new(RenderOptions {
        use_color: cli.color.use_color(),
    });

    match run(&cli, &renderer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            renderer.print_error(&format!("Error creating directory structure: {e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, renderer: &Renderer) -> Result<()> {
    let config = Config::load();
    tracing::debug!(root = %config.root.display(), skill = %cli.skill_name, "creating report structure");
    let paths = create_report_structure(&cli.skill_name, &config.root)?;
    renderer.print_report(&paths);
    Ok(())
}
