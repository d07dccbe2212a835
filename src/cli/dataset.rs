//! CLI commands for the datasets embedded in the program.
use crate::dataset::{builtin_dataset_names, builtin_dataset_readme, extract_builtin_dataset};
use anyhow::Result;
use clap::Subcommand;
use std::path::{Path, PathBuf};

/// The available subcommands for managing embedded datasets.
#[derive(Subcommand)]
pub enum DatasetSubcommands {
    /// List the embedded datasets.
    List,
    /// Describe the specified dataset.
    Info {
        /// The name of the dataset.
        name: String,
    },
    /// Extract a dataset to a new directory, e.g. to edit it.
    Extract {
        /// The name of the dataset to extract.
        name: String,
        /// The destination folder for the dataset.
        new_path: Option<PathBuf>,
    },
}

impl DatasetSubcommands {
    /// Execute the supplied dataset subcommand
    pub fn execute(self) -> Result<()> {
        match self {
            Self::List => handle_dataset_list_command(),
            Self::Info { name } => handle_dataset_info_command(&name)?,
            Self::Extract { name, new_path } => {
                handle_dataset_extract_command(&name, new_path.as_deref())?;
            }
        }

        Ok(())
    }
}

fn handle_dataset_list_command() {
    for name in builtin_dataset_names() {
        println!("{name}");
    }
}

fn handle_dataset_info_command(name: &str) -> Result<()> {
    println!("{}", builtin_dataset_readme(name)?);

    Ok(())
}

/// Handle the `dataset extract` command.
///
/// The dataset is written to a folder named after it if no destination is given.
pub fn handle_dataset_extract_command(name: &str, dest: Option<&Path>) -> Result<()> {
    let dest = dest.unwrap_or(Path::new(name));
    extract_builtin_dataset(name, dest)?;
    println!("Extracted dataset '{name}' to {}", dest.display());

    Ok(())
}
