//! The command line interface for seaborne.
use crate::dataset::{Dataset, DatasetParameters, load_builtin_dataset};
use crate::log;
use crate::output::metadata::write_metadata;
use crate::output::{create_output_directory, get_output_dir, write_report};
use crate::settings::Settings;
use ::log::{info, warn};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod dataset;
pub mod settings;
pub mod show;
use dataset::DatasetSubcommands;
use settings::SettingsSubcommands;
use show::{ShowOpts, Table};

/// Shipping-industry reference data: validate it, list it and write reports from it.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the report command
#[derive(Args)]
pub struct ReportOpts {
    /// Directory for report files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Load and validate a dataset.
    Validate {
        /// Path to the dataset directory (the embedded dataset if omitted).
        dataset_dir: Option<PathBuf>,
    },
    /// Print one of the dataset's tables.
    Show {
        /// The table to show.
        table: Table,
        /// Filters and other options
        #[command(flatten)]
        opts: ShowOpts,
    },
    /// Write the derived tables to CSV files.
    Report {
        /// Path to the dataset directory (the embedded dataset if omitted).
        dataset_dir: Option<PathBuf>,
        /// Other report options
        #[command(flatten)]
        opts: ReportOpts,
    },
    /// Manage the datasets embedded in the program.
    Dataset {
        /// The available subcommands for managing datasets.
        #[command(subcommand)]
        subcommand: DatasetSubcommands,
    },
    /// Manage the program settings file.
    Settings {
        /// The available subcommands for managing settings.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Validate { dataset_dir } => handle_validate_command(dataset_dir.as_deref(), None),
            Self::Show { table, opts } => show::handle_show_command(table, &opts, None),
            Self::Report { dataset_dir, opts } => {
                handle_report_command(dataset_dir.as_deref(), &opts, None)
            }
            Self::Dataset { subcommand } => subcommand.execute(),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and run the requested command
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ seaborne --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Use the given settings, or load them from the settings file
fn settings_or_load(settings: Option<Settings>) -> Result<Settings> {
    match settings {
        Some(settings) => Ok(settings),
        None => Settings::load().context("Failed to load settings."),
    }
}

/// Load a dataset from a directory, or the embedded dataset named in the settings
pub fn load_dataset(dataset_dir: Option<&Path>, settings: &Settings) -> Result<Dataset> {
    match dataset_dir {
        Some(dataset_dir) => Dataset::from_path(dataset_dir),
        None => load_builtin_dataset(&settings.dataset),
    }
}

/// The name of a dataset, as given in its `dataset.toml`
fn dataset_name(dataset_dir: Option<&Path>, settings: &Settings) -> Result<String> {
    match dataset_dir {
        Some(dataset_dir) => Ok(DatasetParameters::from_path(dataset_dir)?.name),
        None => Ok(settings.dataset.clone()),
    }
}

/// Handle the `validate` command.
pub fn handle_validate_command(
    dataset_dir: Option<&Path>,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = settings_or_load(settings)?;

    // No log files are written when validating
    log::init(Some(settings.log_level.as_str()), None)
        .context("Failed to initialise logging.")?;

    load_dataset(dataset_dir, &settings).context("Failed to validate dataset.")?;
    info!("Dataset validation successful!");

    Ok(())
}

/// Handle the `report` command.
pub fn handle_report_command(
    dataset_dir: Option<&Path>,
    opts: &ReportOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = settings_or_load(settings)?;
    let output_dir = match &opts.output_dir {
        Some(output_dir) => output_dir.clone(),
        None => get_output_dir(&dataset_name(dataset_dir, &settings)?),
    };

    let overwrite = create_output_directory(&output_dir, opts.overwrite || settings.overwrite)
        .with_context(|| {
            format!(
                "Failed to create output directory: {}",
                output_dir.display()
            )
        })?;

    log::init(Some(settings.log_level.as_str()), Some(output_dir.as_path()))
        .context("Failed to initialise logging.")?;

    let dataset = load_dataset(dataset_dir, &settings).context("Failed to load dataset.")?;
    info!("Output folder: {}", output_dir.display());

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrite {
        warn!("Output folder was overwritten");
    }

    write_metadata(&output_dir, dataset_dir, &dataset.parameters)
        .context("Failed to save metadata.")?;
    write_report(&dataset, &output_dir)?;
    info!("Report complete!");

    Ok(())
}
