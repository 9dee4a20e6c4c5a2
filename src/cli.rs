use std::path::Path;
use std::process::exit;

use eyre::Context;
use tracing::info;

use crate::{
    rank::top_n,
    report::{self, Style},
    rules::IgnoreRules,
    scan::scan,
    Cli,
};

pub fn main(args: Cli) {
    let style = if args.json {
        Style::Json
    } else if args.human_readable {
        Style::HumanReadable
    } else {
        Style::Bytes
    };

    if let Err(err) = run(&args.root, &args.ignore, args.count, style) {
        eprintln!("Fatal error: {err:#}");
        exit(1)
    }
}

/// Scan `root`, rank what was found and print the top `count` to stdout.
fn run(root: &Path, extra_ignores: &[String], count: usize, style: Style) -> eyre::Result<()> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Cannot access {}", root.display()))?;
    if !root.is_dir() {
        eyre::bail!("{} is not a directory", root.display());
    }
    std::fs::read_dir(&root).with_context(|| format!("Cannot read {}", root.display()))?;

    let rules = IgnoreRules::load(&root, extra_ignores)?;

    info!("Scanning {}", root.display());
    let files = scan(&root, &rules)?;
    let total = files.len();
    let top = top_n(files, count);
    info!("Kept {} of {total} files", top.len());

    report::print(&mut std::io::stdout().lock(), &top, count, style)
        .context("Failed to write the report")
}
