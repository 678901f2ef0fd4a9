/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result, ensure};
use clap::Parser;
use condensation::connectivity::arcs_to_strongly_connect;
use condensation::graphs::DirectedGraph;
use dsi_progress_logger::prelude::*;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "condensation",
    version,
    about = "Computes the minimum number of arcs to add to a directed graph to make it strongly connected.",
    long_about = None
)]
struct CliArgs {
    /// The file containing the arc list; reads from standard input if
    /// missing. The format is a line "NODES ARCS" followed by one "SRC DST"
    /// pair of one-based node indices per arc (all whitespace is equivalent).
    pub src: Option<PathBuf>,
}

/// Parses the whitespace-separated, one-based arc-list format of the input.
fn parse_graph(input: &str) -> Result<DirectedGraph> {
    let mut tokens = input.split_whitespace();
    let mut next = |what: &str| -> Result<usize> {
        tokens
            .next()
            .with_context(|| format!("Unexpected end of input while reading {}", what))?
            .parse::<usize>()
            .with_context(|| format!("Cannot parse {}", what))
    };

    let num_nodes = next("the number of nodes")?;
    let num_arcs = next("the number of arcs")?;

    let mut graph = DirectedGraph::new(num_nodes);
    for arc in 0..num_arcs {
        let src = next(&format!("the source of arc {}", arc))?;
        let dst = next(&format!("the destination of arc {}", arc))?;
        ensure!(
            (1..=num_nodes).contains(&src) && (1..=num_nodes).contains(&dst),
            "Arc {} ({}, {}) is out of range (nodes are numbered from 1 to {})",
            arc,
            src,
            dst,
            num_nodes
        );
        // The input is one-based
        graph.add_arc(src - 1, dst - 1)?;
    }

    Ok(graph)
}

pub fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let args = CliArgs::parse();

    let mut input = String::new();
    match &args.src {
        Some(path) => {
            std::fs::File::open(path)
                .and_then(|mut file| file.read_to_string(&mut input))
                .with_context(|| format!("Cannot read {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Cannot read standard input")?;
        }
    }

    let graph = parse_graph(&input)?;
    log::info!(
        "Read a graph with {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    );

    let mut pl = ProgressLogger::default();
    println!("{}", arcs_to_strongly_connect(&graph, &mut pl));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph() -> Result<()> {
        let graph = parse_graph("4 4\n1 2\n2 3\n3 1\n3 4\n")?;
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_arcs(), 4);
        assert_eq!(graph.successors(2), &[0, 3]);
        Ok(())
    }

    #[test]
    fn test_parse_graph_rejects_out_of_range() {
        assert!(parse_graph("2 1\n1 3\n").is_err());
        assert!(parse_graph("2 1\n0 1\n").is_err());
    }

    #[test]
    fn test_parse_graph_rejects_truncated() {
        assert!(parse_graph("2 2\n1 2\n").is_err());
        assert!(parse_graph("2").is_err());
    }
}
