// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text and JSON renderings of core results.

use std::io::Write;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use mst_core::{Edge, ExportReport, Graph, MstResult, WeightMatrix};
use serde::Serialize;

/// Summary printed by `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub nodes: usize,
    pub edges: usize,
    pub connected: bool,
}

impl CheckReport {
    pub fn of(graph: &Graph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            connected: graph.is_connected(),
        }
    }
}

/// JSON shape of `solve` output.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub algorithm: String,
    pub edges: &'a [Edge],
    pub total_weight: i64,
    pub steps: u64,
    pub spanning_tree: bool,
}

impl<'a> SolveReport<'a> {
    pub fn new(result: &'a MstResult, graph: &Graph) -> Self {
        Self {
            algorithm: result.algorithm.to_string(),
            edges: &result.edges,
            total_weight: result.total_weight(),
            steps: result.steps,
            spanning_tree: result.is_spanning_tree_of(graph),
        }
    }
}

pub fn json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn check_text(out: &mut impl Write, report: &CheckReport) -> Result<()> {
    writeln!(out, "nodes: {}", report.nodes)?;
    writeln!(out, "edges: {}", report.edges)?;
    writeln!(out, "connected: {}", if report.connected { "yes" } else { "no" })?;
    Ok(())
}

/// Right-aligned columns, one row per line.
pub fn matrix_text(out: &mut impl Write, matrix: &WeightMatrix) -> Result<()> {
    let width = matrix
        .rows()
        .flatten()
        .map(|w| w.to_string().len())
        .max()
        .unwrap_or(1);
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|w| format!("{w:>width$}")).collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    Ok(())
}

pub fn solve_text(out: &mut impl Write, report: &SolveReport<'_>) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "edge", "node1", "node2", "weight"]);
    for (i, e) in report.edges.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.id.to_string(),
            e.node1.to_string(),
            e.node2.to_string(),
            e.weight.to_string(),
        ]);
    }
    writeln!(out, "algorithm: {}", report.algorithm)?;
    writeln!(out, "{table}")?;
    writeln!(out, "total weight: {}", report.total_weight)?;
    writeln!(out, "steps: {}", report.steps)?;
    if !report.spanning_tree {
        writeln!(out, "note: result is a spanning forest")?;
    }
    Ok(())
}

/// Export layout: comma-joined matrix rows, a blank line, then one
/// `node1-node2: weight` line per tree edge.
pub fn export_text(out: &mut impl Write, report: &ExportReport) -> Result<()> {
    writeln!(out, "Weight matrix:")?;
    for row in &report.matrix {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", cells.join(","))?;
    }
    writeln!(out)?;
    writeln!(out, "Minimum spanning tree:")?;
    for e in &report.tree {
        writeln!(out, "{}-{}: {}", e.node1, e.node2, e.weight)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        for _ in 0..3 {
            g.add_node(0.0, 0.0);
        }
        g.add_edge(0, 1, 2).unwrap();
        g.add_edge(1, 2, 3).unwrap();
        g.add_edge(0, 2, -5).unwrap();
        g
    }

    #[test]
    fn matrix_columns_align_to_widest_cell() {
        let mut buf = Vec::new();
        matrix_text(&mut buf, &triangle().to_weight_matrix()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, " 0  2 -5\n 2  0  3\n-5  3  0\n");
    }

    #[test]
    fn export_lists_matrix_then_tree() {
        let mut g = triangle();
        let report = ExportReport::build(&mut g).unwrap();
        let mut buf = Vec::new();
        export_text(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Weight matrix:\n0,2,-5\n2,0,3\n-5,3,0\n\nMinimum spanning tree:\n"));
        assert!(text.contains("0-2: -5\n"));
        assert!(text.contains("0-1: 2\n"));
    }
}
