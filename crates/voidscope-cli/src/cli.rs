use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use voidscope::core::models::lattice::{LatticeType, VoidType};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "VoidScope Developers",
    version,
    about = "VoidScope CLI - Explore the tetrahedral and octahedral voids of FCC and BCC crystal lattices.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Options that feed the configuration builder.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of decimal places used to merge coincident atoms.
    #[arg(long, global = true, value_name = "INT")]
    pub precision: Option<u32>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S explain.timeout-secs=10
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the atoms of the displayed unit cell.
    Structure(StructureArgs),
    /// Print every void of the unit cell together with its forming atoms.
    Voids(VoidsArgs),
    /// Select one void and print what a viewer would highlight for it.
    Inspect(InspectArgs),
    /// Explain a void type in a lattice using a remote language model.
    Explain(ExplainArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The (lattice, void type) pair shared by most subcommands.
#[derive(Args, Debug, Clone, Copy)]
pub struct SelectionArgs {
    /// Crystal lattice: 'fcc' or 'bcc'.
    #[arg(short, long, default_value = "fcc", value_name = "LATTICE")]
    pub lattice: LatticeType,

    /// Void category: 'tetrahedral' ('tet') or 'octahedral' ('oct').
    #[arg(short = 't', long, default_value = "tetrahedral", value_name = "TYPE")]
    pub void_type: VoidType,
}

/// Arguments for the `structure` subcommand.
#[derive(Args, Debug)]
pub struct StructureArgs {
    /// Crystal lattice: 'fcc' or 'bcc'.
    #[arg(short, long, default_value = "fcc", value_name = "LATTICE")]
    pub lattice: LatticeType,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `voids` subcommand.
#[derive(Args, Debug)]
pub struct VoidsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Identifier of the void to select (see `voidscope voids`).
    #[arg(long = "void", required = true, value_name = "ID")]
    pub void_id: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `explain` subcommand.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Do not contact the remote model; print the built-in summary instead.
    #[arg(long)]
    pub offline: bool,

    /// Override the language model used for the explanation.
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,
}
