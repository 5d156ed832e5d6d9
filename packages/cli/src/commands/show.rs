use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use lovelace_common::{read_dashboard, walk_section, walk_view, Visitor};
use lovelace_schema::{
    is_strategy_section, is_strategy_view, CardConfig, CardPath, ContainerPath, LovelaceConfig,
    SectionConfig, ViewConfig,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Dashboard file (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn show(args: ShowArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.dashboard_path(cwd, args.file.as_deref());
    let dashboard = read_dashboard(&path)?;

    println!("{}", path.display().to_string().bright_white().bold());
    for line in render_tree(&dashboard) {
        println!("{}", line);
    }

    Ok(())
}

/// One line per node, indented by depth, with the indices used in paths
pub fn render_tree(config: &LovelaceConfig) -> Vec<String> {
    let mut printer = TreePrinter::default();
    printer.visit_config(config);
    printer.lines
}

#[derive(Default)]
struct TreePrinter {
    lines: Vec<String>,
}

impl Visitor for TreePrinter {
    fn visit_view(&mut self, index: usize, view: &ViewConfig) {
        let mut line = format!("view {}", index);
        if let Some(title) = &view.title {
            line.push_str(&format!(" \"{}\"", title));
        }
        if let Some(path) = view.url_path() {
            line.push_str(&format!(" /{}", path));
        }
        if is_strategy_view(view) {
            line.push_str(" [strategy]");
        }
        self.lines.push(line);

        walk_view(self, index, view);
    }

    fn visit_section(&mut self, path: ContainerPath, section: &SectionConfig) {
        let index = path.section.unwrap_or_default();
        let mut line = format!("  section {}", index);
        if let Some(section_type) = &section.section_type {
            line.push_str(&format!(" ({})", section_type));
        }
        if is_strategy_section(section) {
            line.push_str(" [strategy]");
        }
        self.lines.push(line);

        walk_section(self, path, section);
    }

    fn visit_card(&mut self, path: CardPath, card: &CardConfig) {
        let indent = if path.container.section.is_some() { "    " } else { "  " };
        self.lines.push(format!("{}card {}: {}", indent, path.card, card.card_type));
    }
}
