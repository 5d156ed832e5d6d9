use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use lovelace_editor::{Dashboard, Mutation};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Mutation JSON (one object or an array), or @file to read it from disk
    pub mutations: String,

    /// Dashboard file (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the edited dashboard instead of saving it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MutationInput {
    One(Mutation),
    Many(Vec<Mutation>),
}

impl MutationInput {
    fn into_vec(self) -> Vec<Mutation> {
        match self {
            MutationInput::One(mutation) => vec![mutation],
            MutationInput::Many(mutations) => mutations,
        }
    }
}

/// Parse mutations from inline JSON or an `@path` reference
pub fn parse_mutations(input: &str, cwd: &Path) -> Result<Vec<Mutation>> {
    let source = match input.strip_prefix('@') {
        Some(file) => {
            let path = cwd.join(file);
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => input.to_string(),
    };

    let parsed: MutationInput =
        serde_json::from_str(&source).context("Invalid mutation JSON")?;
    Ok(parsed.into_vec())
}

pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.dashboard_path(cwd, args.file.as_deref());
    let mutations = parse_mutations(&args.mutations, cwd)?;
    debug!(
        count = mutations.len(),
        ops = ?mutations.iter().map(Mutation::name).collect::<Vec<_>>(),
        "Parsed mutations"
    );

    let mut dashboard = Dashboard::load(&path)?.with_history_limit(config.history_limit);
    dashboard.apply_all(&mutations, &config.messages())?;

    for mutation in &mutations {
        println!("  {} {}", "✓".green(), mutation.name());
    }

    if args.dry_run {
        println!("{}", dashboard.to_json(config.pretty)?);
        return Ok(());
    }

    dashboard.save(config.pretty)?;
    println!(
        "{} Applied {} mutation(s) to {}",
        "✨".green(),
        mutations.len(),
        path.display().to_string().bright_white()
    );

    Ok(())
}
