//! CLI domain: parsing, routing, and presentation only.
//! Domain work happens in the resolver, synchronizer, and navigator.

use crate::model::{Content, ContentModel, MemoryContentModel};
use crate::navigator::Navigator;
use crate::resolve::resolve_path;
use crate::sync::TreeSynchronizer;
use crate::types::NodeHandle;
use crate::view::{
    MemoryNavigationView, MemoryResultView, MemorySelectionController, NavigationView,
    ResultView, SelectionController,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::LocalSet;

/// Casetree: navigate a case hierarchy across tree and result views
#[derive(Debug, Parser)]
#[command(name = "casetree", version, about)]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Case description file (JSON); overrides the configured default
    #[arg(long, global = true)]
    pub case: Option<PathBuf>,

    /// Raise log verbosity to debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log level override (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format override (text, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output override (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the root-first ancestor path of an item
    Resolve {
        /// Display name of the target item
        target: String,
    },
    /// Run the two-phase navigation and report the resulting view states
    Navigate {
        /// Display name of the target item
        target: String,
    },
}

/// On-disk case description
#[derive(Debug, Deserialize)]
struct CaseFile {
    #[serde(default)]
    name: Option<String>,
    contents: Vec<Content>,
}

/// Loaded case plus everything a command needs to run
pub struct RunContext {
    case_name: Option<String>,
    model: Arc<MemoryContentModel>,
}

impl RunContext {
    pub fn new(case_path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(case_path)
            .with_context(|| format!("Couldn't read case file {}", case_path.display()))?;
        let case: CaseFile = serde_json::from_str(&raw)
            .with_context(|| format!("Couldn't parse case file {}", case_path.display()))?;
        let model = MemoryContentModel::from_contents(case.contents)
            .context("Case file describes an inconsistent hierarchy")?;
        Ok(Self {
            case_name: case.name,
            model: Arc::new(model),
        })
    }

    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::Resolve { target } => self.run_resolve(target),
            Commands::Navigate { target } => self.run_navigate(target),
        }
    }

    fn target(&self, name: &str) -> anyhow::Result<Content> {
        self.model
            .find_by_display_name(name)
            .with_context(|| format!("No content named {:?} in the case", name))
    }

    fn run_resolve(&self, target: &str) -> anyhow::Result<String> {
        let item = self.target(target)?;
        let path = resolve_path(self.model.as_ref(), &item);

        let mut out = String::new();
        if let Some(name) = &self.case_name {
            out.push_str(&format!("Case: {}\n", name));
        }
        for content in &path {
            out.push_str(&format!("{:<18}{}\n", content.kind(), content.display_name()));
        }
        Ok(out.trim_end().to_string())
    }

    fn run_navigate(&self, target: &str) -> anyhow::Result<String> {
        let item = self.target(target)?;

        let model = Arc::clone(&self.model) as Arc<dyn ContentModel>;
        let nav = Arc::new(MemoryNavigationView::from_model(model.as_ref()));
        let results = Arc::new(MemoryResultView::new());
        let selection = Arc::new(MemorySelectionController::new(
            Arc::clone(&nav),
            Arc::clone(&model),
            Arc::clone(&results),
        ));
        let synchronizer = TreeSynchronizer::new(
            Arc::clone(&nav) as Arc<dyn NavigationView>,
            Arc::clone(&selection) as Arc<dyn SelectionController>,
            Arc::clone(&results) as Arc<dyn ResultView>,
        );
        let navigator = Navigator::new(Arc::clone(&model), synchronizer);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .context("Couldn't start the task queue runtime")?;
        let selected = runtime.block_on(LocalSet::new().run_until(async {
            navigator.navigate_to_content(&item).wait().await
        }));

        let mut out = String::new();
        if let Some(name) = &self.case_name {
            out.push_str(&format!("Case: {}\n", name));
        }
        out.push_str("Navigation tree (+ expanded, * explored):\n");
        render_tree(&nav, nav.root(), selection.explored(), 0, &mut out);

        out.push_str("Result view (* selected):\n");
        let chosen = results.selected();
        for row in results.root_children() {
            let marker = if chosen.contains(&row) { "*" } else { " " };
            out.push_str(&format!("  {} {}\n", marker, results.node_identity(row)));
        }
        out.push_str(&format!(
            "Navigation {}\n",
            if selected {
                "completed with a selection"
            } else {
                "finished without a selection"
            }
        ));
        Ok(out.trim_end().to_string())
    }
}

fn render_tree(
    nav: &MemoryNavigationView,
    node: NodeHandle,
    explored: Option<NodeHandle>,
    depth: usize,
    out: &mut String,
) {
    let marker = if explored == Some(node) {
        " *"
    } else if nav.is_expanded(node) {
        " +"
    } else {
        ""
    };
    out.push_str(&format!(
        "{}{}{}\n",
        "  ".repeat(depth + 1),
        nav.display_name(node),
        marker
    ));
    for child in nav.children(node) {
        render_tree(nav, child, explored, depth + 1, out);
    }
}
