//! Shipping-industry reference data and the derivations that turn it into display-ready values.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod cli;
pub mod commodity;
pub mod company;
pub mod dataset;
pub mod forecast;
pub mod freight;
pub mod id;
pub mod input;
pub mod log;
pub mod market;
pub mod network;
pub mod number;
pub mod output;
pub mod port;
pub mod route;
pub mod scale;
pub mod segment;
pub mod settings;
pub mod shipbuilding;
pub mod stats;
pub mod style;
pub mod units;
pub mod vessel;

#[cfg(test)]
mod fixture;

/// Get config dir for program.
///
/// On Linux this is `~/.config/seaborne`; other platforms use their own conventions.
pub fn get_seaborne_config_dir() -> PathBuf {
    let Some(mut config_dir) = dirs::config_dir() else {
        // No config dir available on this platform, so use the current directory
        return PathBuf::new();
    };
    config_dir.push("seaborne");
    config_dir
}
