pub mod config;
pub mod simulate;

use std::path::Path;

use pasture_sim::SimConfig;

/// Load the config file if one was given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> Result<SimConfig, String> {
    match path {
        Some(path) => SimConfig::from_file(path).map_err(|e| e.to_string()),
        None => Ok(SimConfig::default()),
    }
}
