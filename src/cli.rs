use clap::Parser;
use component_tree::application::dto::OutputFormat;
use component_tree::tree::domain::ComponentType;
use std::path::PathBuf;

/// Build the component tree of a scanner report and print it
#[derive(Parser, Debug)]
#[command(name = "component-tree")]
#[command(version)]
#[command(about = "Build, validate and print the component tree of a scanner report", long_about = None)]
pub struct Args {
    /// Path to the JSON scanner report
    #[arg(short, long, value_name = "FILE")]
    pub report: PathBuf,

    /// Output format: text or json (overrides the config file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to component-tree.config.yml next to the report)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Deepest component type to print, e.g. DIRECTORY
    #[arg(long, value_name = "TYPE")]
    pub max_depth: Option<ComponentType>,

    /// Fail on components without a uuid instead of generating one
    #[arg(long)]
    pub require_uuids: bool,

    /// Log level filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
