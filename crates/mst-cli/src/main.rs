// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `mst`: headless host for mst-core.
//!
//! Loads JSON graph documents, runs the MST engines and renders results as
//! text or JSON. Also writes the plain-text export (weight matrix + Borůvka
//! tree) that interactive front ends offer as "save to file".

mod cli;
mod render;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use mst_app_core::config::ConfigService;
use mst_app_core::prefs::{OutputFormat, SolverPrefs, SOLVER_PREFS_KEY};
use mst_config_fs::FsConfigStore;
use mst_core::{boruvka_mst, kruskal_mst, prim_mst, Algorithm, ExportReport, Graph, GraphDocument};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::render::{CheckReport, SolveReport};

const MAX_EXPORT_NAME_CHARS: usize = 100;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // Config (best-effort)
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    let config = match store {
        Ok(store) => Some(ConfigService::new(store)),
        Err(err) => {
            warn!(%err, "config store unavailable; using defaults");
            None
        }
    };
    let saved: SolverPrefs = config
        .as_ref()
        .and_then(|c| match c.load_or_default(SOLVER_PREFS_KEY) {
            Ok(prefs) => Some(prefs),
            Err(err) => {
                warn!(%err, "ignoring unreadable solver prefs");
                None
            }
        })
        .unwrap_or_default();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Check { graph, format } => {
            let graph = load_graph(&graph)?;
            let report = CheckReport::of(&graph);
            match format.map_or(saved.output, OutputFormat::from) {
                OutputFormat::Text => render::check_text(&mut out, &report)?,
                OutputFormat::Json => render::json(&mut out, &report)?,
            }
        }
        Command::Matrix { graph, format } => {
            let graph = load_graph(&graph)?;
            let matrix = graph.to_weight_matrix();
            match format.map_or(saved.output, OutputFormat::from) {
                OutputFormat::Text => render::matrix_text(&mut out, &matrix)?,
                OutputFormat::Json => render::json(&mut out, &matrix.to_rows())?,
            }
        }
        Command::Solve {
            graph,
            overrides,
            lenient,
        } => {
            let prefs = overrides.apply(saved);
            let mut graph = load_graph(&graph)?;
            let algorithm = prefs.algorithm();
            let result = if lenient {
                match algorithm {
                    Algorithm::Prim { start } => prim_mst(&graph, start)?,
                    Algorithm::Kruskal => kruskal_mst(&graph),
                    Algorithm::Boruvka => boruvka_mst(&graph)?,
                }
            } else {
                graph.minimum_spanning_tree(algorithm)?.clone()
            };
            info!(%algorithm, steps = result.steps, "solved");
            let report = SolveReport::new(&result, &graph);
            match prefs.output {
                OutputFormat::Text => render::solve_text(&mut out, &report)?,
                OutputFormat::Json => render::json(&mut out, &report)?,
            }
        }
        Command::Export { graph, out: path } => {
            check_export_name(&path)?;
            let mut graph = load_graph(&graph)?;
            let report = ExportReport::build(&mut graph)?;
            let mut buf = Vec::new();
            render::export_text(&mut buf, &report)?;
            fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "exported {} tree edges to {}", report.tree.len(), path.display())?;
        }
        Command::Prefs { overrides, save } => {
            let prefs = overrides.apply(saved);
            if save {
                let Some(cfg) = &config else {
                    bail!("no config store available to save preferences");
                };
                cfg.save(SOLVER_PREFS_KEY, &prefs)
                    .context("failed to save solver preferences")?;
            }
            render::json(&mut out, &prefs)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn load_graph(path: &Path) -> Result<Graph> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc: GraphDocument = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse graph document {}", path.display()))?;
    let graph = Graph::from_document(&doc)
        .with_context(|| format!("invalid graph document {}", path.display()))?;
    Ok(graph)
}

/// Export file names must be non-empty and at most 100 characters.
fn check_export_name(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.is_empty() {
        bail!("export file name must not be empty");
    }
    if name.chars().count() > MAX_EXPORT_NAME_CHARS {
        bail!("export file name must be at most {MAX_EXPORT_NAME_CHARS} characters");
    }
    Ok(())
}
