//! Keys command implementation

use colored::Colorize;
use droid_meta::ExternalKey;
use serde_json::json;

use crate::error::Result;

/// List the injection keys a descriptor may refer to
pub fn run_keys(json: bool) -> Result<()> {
    if json {
        let keys: Vec<_> = ExternalKey::ALL
            .iter()
            .map(|key| json!({ "key": key.as_str(), "description": key.description() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&keys)?);
        return Ok(());
    }

    println!("{}:", "Injectable keys".bold());
    for key in ExternalKey::ALL {
        println!(
            "  {} {}",
            format!("{:<28}", key.as_str()).cyan(),
            key.description().dimmed()
        );
    }
    Ok(())
}
