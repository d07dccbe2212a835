//! Code for writing report metadata to `metadata.toml`
use crate::dataset::DatasetParameters;
use anyhow::Result;
use chrono::Local;
use platform_info::{PlatformInfo, PlatformInfoAPI, UNameAPI};
use serde::Serialize;
use std::fs;
use std::path::Path;

const METADATA_FILE_NAME: &str = "metadata.toml";

/// Information about the program build via `built` crate
mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// The short git hash of the build, marked if the tree was dirty
fn git_version() -> String {
    match (built_info::GIT_COMMIT_HASH_SHORT, built_info::GIT_DIRTY) {
        (Some(hash), Some(true)) => format!("{hash}-dirty"),
        (Some(hash), _) => hash.into(),
        (None, _) => "unknown".into(),
    }
}

#[derive(Serialize)]
struct Metadata<'a> {
    report: ReportMetadata<'a>,
    program: ProgramMetadata,
    platform: PlatformMetadata,
}

/// Which dataset the report was generated from, and when
#[derive(Serialize)]
struct ReportMetadata<'a> {
    dataset_name: &'a str,
    /// Whether the dataset is the one embedded in the program
    embedded_dataset: bool,
    /// Directory the dataset was read from, for datasets not embedded in the program
    #[serde(skip_serializing_if = "Option::is_none")]
    dataset_path: Option<&'a Path>,
    share_tolerance: f64,
    strict_shares: bool,
    generated: String,
}

#[derive(Serialize)]
struct ProgramMetadata {
    name: &'static str,
    version: &'static str,
    target: &'static str,
    is_debug: bool,
    rustc_version: &'static str,
    build_time_utc: &'static str,
    git_commit_hash: String,
}

impl ProgramMetadata {
    fn new() -> Self {
        Self {
            name: built_info::PKG_NAME,
            version: built_info::PKG_VERSION,
            target: built_info::TARGET,
            is_debug: built_info::DEBUG,
            rustc_version: built_info::RUSTC_VERSION,
            build_time_utc: built_info::BUILT_TIME_UTC,
            git_commit_hash: git_version(),
        }
    }
}

/// The platform seaborne is running on, from [`PlatformInfo`]
#[derive(Serialize)]
struct PlatformMetadata {
    sysname: String,
    release: String,
    machine: String,
    osname: String,
}

impl PlatformMetadata {
    fn new() -> Result<Self> {
        let info = PlatformInfo::new()
            .map_err(|err| anyhow::anyhow!("Unable to determine platform info: {err}"))?;
        Ok(Self {
            sysname: info.sysname().to_string_lossy().into(),
            release: info.release().to_string_lossy().into(),
            machine: info.machine().to_string_lossy().into(),
            osname: info.osname().to_string_lossy().into(),
        })
    }
}

/// Write metadata about a report to the output directory in TOML format.
///
/// `dataset_path` is `None` when the report was generated from the embedded dataset.
pub fn write_metadata(
    output_dir: &Path,
    dataset_path: Option<&Path>,
    parameters: &DatasetParameters,
) -> Result<()> {
    let metadata = Metadata {
        report: ReportMetadata {
            dataset_name: &parameters.name,
            embedded_dataset: dataset_path.is_none(),
            dataset_path,
            share_tolerance: parameters.share_tolerance.value(),
            strict_shares: parameters.strict_shares,
            generated: Local::now().to_rfc2822(),
        },
        program: ProgramMetadata::new(),
        platform: PlatformMetadata::new()?,
    };
    fs::write(
        output_dir.join(METADATA_FILE_NAME),
        toml::to_string(&metadata)?,
    )?;

    Ok(())
}
