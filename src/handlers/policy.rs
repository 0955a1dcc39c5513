use crate::config::{self, types::Config};
use colored::Colorize;
use serde_json::json;

pub fn handle_policy(config: &Config, json: bool, save: bool) -> crate::Result<()> {
    let policy = super::effective_policy(config);

    if save {
        config::save_global_config(config)?;
        if let Some(path) = config::global_config_path() {
            eprintln!("Configuration saved to: {}", path.display());
        }
    }

    if json {
        let value = json!({
            "zone_capable_regions": policy.regions(),
            "zone_capable_skus": policy.skus(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "\n{} {}",
        "▶".bright_blue(),
        "EFFECTIVE ELIGIBILITY POLICY".bright_white().bold()
    );
    println!("{}", "─".repeat(50).dimmed());

    println!(
        "{} Zone-capable regions ({}):",
        "│".dimmed(),
        policy.regions().len()
    );
    for chunk in policy.regions().chunks(4) {
        println!("{}   {}", "│".dimmed(), chunk.join(", "));
    }

    println!(
        "{} Zone-capable SKUs ({}):",
        "│".dimmed(),
        policy.skus().len()
    );
    for chunk in policy.skus().chunks(6) {
        println!("{}   {}", "│".dimmed(), chunk.join(", "));
    }

    println!("{}", "─".repeat(50).dimmed());
    Ok(())
}
