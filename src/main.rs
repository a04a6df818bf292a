use std::path::PathBuf;

use clap::{ArgAction, Parser};
use modelpeek::error::AppError;
use modelpeek::package::ModelPackage;
use modelpeek::registry;
use modelpeek::report::{self, ReportOptions};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let home = registry::model_home(cli.models_dir.as_deref())?;

    if cli.list {
        let models = registry::list_models(&home, cli.verbose);
        report::print_model_list(&home, &models);
        return Ok(());
    }

    let path = registry::resolve(&home, &cli.model)?;
    let package = ModelPackage::load(&path)?;
    report::print_report(&package, &ReportOptions { verbose: cli.verbose });

    Ok(())
}

#[derive(Parser)]
#[command(name = "modelpeek", version, about = "Inspect installed NLP pipeline packages from the terminal.")]
struct Cli {
    /// Name of the installed model to inspect.
    #[arg(value_name = "MODEL", default_value = "en_core_web_sm")]
    model: String,

    /// List installed models instead of inspecting one.
    #[arg(short = 'l', long = "list", action = ArgAction::SetTrue)]
    list: bool,

    /// Also report the package file tree, file samples, and storage footprint.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Directory holding installed models (defaults to the platform data dir).
    #[arg(long = "models-dir", value_name = "PATH")]
    models_dir: Option<PathBuf>,
}
