// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mst_app_core::prefs::{AlgorithmChoice, OutputFormat, SolverPrefs};

#[derive(Parser, Debug)]
#[command(name = "mst", author, version, about = "Minimum spanning trees over editable graph documents")]
pub struct Cli {
    /// Directory for saved preferences (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report node/edge counts and whether the graph is connected
    Check {
        /// Path to a JSON graph document
        graph: PathBuf,
        /// Output format (defaults to the saved preference)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Print the weight matrix
    Matrix {
        /// Path to a JSON graph document
        graph: PathBuf,
        /// Output format (defaults to the saved preference)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Compute a minimum spanning tree
    Solve {
        /// Path to a JSON graph document
        graph: PathBuf,
        #[command(flatten)]
        overrides: PrefOverrides,
        /// Run the raw engine without connectivity checks (Kruskal may return a forest)
        #[arg(long)]
        lenient: bool,
    },
    /// Write the weight matrix and a Borůvka MST to a text file
    Export {
        /// Path to a JSON graph document
        graph: PathBuf,
        /// Output file
        #[arg(long)]
        out: PathBuf,
    },
    /// Show effective solver preferences, optionally persisting overrides
    Prefs {
        #[command(flatten)]
        overrides: PrefOverrides,
        /// Save the effective preferences
        #[arg(long)]
        save: bool,
    },
}

/// Flags that override saved [`SolverPrefs`].
#[derive(clap::Args, Debug, Default)]
pub struct PrefOverrides {
    /// MST engine
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
    /// Start node for Prim
    #[arg(long)]
    pub start: Option<usize>,
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl PrefOverrides {
    pub fn apply(&self, mut prefs: SolverPrefs) -> SolverPrefs {
        if let Some(algorithm) = self.algorithm {
            prefs.algorithm = algorithm.into();
        }
        if let Some(start) = self.start {
            prefs.start_node = start;
        }
        if let Some(format) = self.format {
            prefs.output = format.into();
        }
        prefs
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    Prim,
    Kruskal,
    Boruvka,
}

impl From<AlgorithmArg> for AlgorithmChoice {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Prim => Self::Prim,
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Boruvka => Self::Boruvka,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
