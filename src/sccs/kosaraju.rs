/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::graphs::DirectedGraph;
use crate::top_sort;
use crate::visits::{
    Sequential,
    depth_first::{Event, SeqDfs},
};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// The first pass computes the finish order of the nodes on the forward
/// adjacency; the second pass visits the transpose of the graph in that
/// order, and each visit tree is exactly one maximal strongly connected
/// component. Self-loops end up in singleton components and parallel arcs are
/// harmless; the whole computation is linear in the size of the graph.
///
/// Components are numbered in the order in which they are extracted, which is
/// a topological order of the condensation of the graph.
///
/// # Arguments
///
/// * `graph`: the graph; its [transposed view](DirectedGraph::transposed) is
///   used for the second pass.
///
/// * `pl`: a progress logger.
pub fn kosaraju(graph: &DirectedGraph, pl: &mut impl ProgressLog) -> Sccs {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let top_sort = top_sort(graph, pl);
    let mut number_of_components = 0;
    let transposed = graph.transposed();
    let mut visit = SeqDfs::new(&transposed);
    let mut components = vec![0; num_nodes].into_boxed_slice();

    visit
        .visit(top_sort, |event| {
            match event {
                Event::Previsit { node, .. } => {
                    pl.light_update();
                    components[node] = number_of_components;
                }
                Event::Done { .. } => {
                    number_of_components += 1;
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();

    Sccs::new(number_of_components, components)
}
