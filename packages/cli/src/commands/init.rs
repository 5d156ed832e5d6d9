use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use lovelace_common::write_dashboard;
use lovelace_schema::LovelaceConfig;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Dashboard file to create
    #[arg(short, long, default_value = "ui-lovelace.json")]
    pub dashboard: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing dashboard project...".bright_blue().bold());

    let config = Config {
        dashboard: args.dashboard.clone(),
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)? + "\n")?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let dashboard_path = cwd.join(&args.dashboard);
    if dashboard_path.exists() && !args.force {
        println!("  {} Kept existing {}", "•".dimmed(), args.dashboard);
    } else {
        write_dashboard(&dashboard_path, &LovelaceConfig::default(), config.pretty)?;
        println!("  {} Created {}", "✓".green(), args.dashboard);
    }

    println!();
    println!("{}", "✨ Ready! Add a view with:".green().bold());
    println!(
        "   lovelace apply '{}'",
        r#"{"op": "add_view", "view": {"title": "Home", "path": "home"}}"#
    );

    Ok(())
}
