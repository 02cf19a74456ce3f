use std::path::Path;

use colored::Colorize;

use pasture_sim::SimConfig;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let text = serde_json::to_string_pretty(&SimConfig::default())
        .map_err(|e| format!("failed to serialize config: {e}"))?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            println!("  {} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
