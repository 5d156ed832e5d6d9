use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use lovelace_common::{read_dashboard, walk_view, Visitor};
use lovelace_schema::{CardConfig, CardPath, LovelaceConfig, ViewConfig};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Dashboard file (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.dashboard_path(cwd, args.file.as_deref());
    let dashboard = read_dashboard(&path)?;

    let report = inspect(&dashboard);
    println!(
        "🔍 {} views, {} cards",
        report.views.to_string().bright_white(),
        report.cards.to_string().bright_white()
    );

    if report.duplicates.is_empty() {
        println!("{} {}", "✓".green(), path.display());
        return Ok(());
    }

    for (url, indices) in &report.duplicates {
        warn!(path = %url, views = ?indices, "Duplicate view path");
        eprintln!(
            "  {} path \"{}\" used by views {:?}",
            "✗".red(),
            url,
            indices
        );
    }
    bail!("{} duplicate view path(s) in {}", report.duplicates.len(), path.display())
}

#[derive(Debug, Default)]
pub struct Report {
    pub views: usize,
    pub cards: usize,
    /// View paths used more than once, with the indices using them
    pub duplicates: Vec<(String, Vec<usize>)>,
}

pub fn inspect(config: &LovelaceConfig) -> Report {
    let mut collector = Collector::default();
    collector.visit_config(config);

    let mut duplicates: Vec<_> = collector
        .paths
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .collect();
    duplicates.sort();

    Report {
        views: collector.views,
        cards: collector.cards,
        duplicates,
    }
}

#[derive(Default)]
struct Collector {
    views: usize,
    cards: usize,
    paths: HashMap<String, Vec<usize>>,
}

impl Visitor for Collector {
    fn visit_view(&mut self, index: usize, view: &ViewConfig) {
        self.views += 1;
        if let Some(path) = view.url_path() {
            self.paths.entry(path.to_string()).or_default().push(index);
        }
        walk_view(self, index, view);
    }

    fn visit_card(&mut self, _path: CardPath, _card: &CardConfig) {
        self.cards += 1;
    }
}
