mod cli;
mod config;

use cli::Args;
use component_tree::adapters::outbound::filesystem::JsonReportReader;
use component_tree::adapters::outbound::identity::RandomUuidSupplier;
use component_tree::application::dto::BuildTreeRequest;
use component_tree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use component_tree::application::read_models::ComponentTreeViewBuilder;
use component_tree::application::use_cases::BuildComponentTreeUseCase;
use component_tree::shared::error::ExitCode;
use component_tree::shared::Result;
use component_tree::tree::services::TreeIndex;
use config::ConfigFile;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_logging(&args.log_level);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?.unwrap_or_default();

    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    let depth_limit = args.max_depth.or_else(|| config.depth_limit());
    let generate_missing_uuids =
        !args.require_uuids && config.generate_missing_uuids.unwrap_or(true);

    // Create use case with injected dependencies
    let use_case = BuildComponentTreeUseCase::new(JsonReportReader::new(), RandomUuidSupplier::new());
    let response = use_case.execute(BuildTreeRequest::new(
        args.report.clone(),
        generate_missing_uuids,
    ))?;

    let index = TreeIndex::new(&response.root)?;
    tracing::info!(components = index.len(), "component tree is well formed");

    let view = ComponentTreeViewBuilder::build(&response.root, depth_limit);
    let content = FormatterFactory::create(format).format(&view)?;

    PresenterFactory::create(PresenterType::from(args.output)).present(&content)?;
    Ok(())
}

/// Explicit `--config` wins; otherwise look next to the report.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path).map(Some);
    }

    match args.report.parent() {
        Some(dir) if dir != Path::new("") => config::discover_config(dir),
        _ => config::discover_config(Path::new(".")),
    }
}
