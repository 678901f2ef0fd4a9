/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::DirectedGraph;
use crate::sccs::Sccs;
use dsi_progress_logger::ProgressLog;

/// Builds the condensation of a graph, given its strongly connected
/// components.
///
/// The condensation has one node per component; for every arc `(u, v)` of
/// `graph` whose endpoints belong to distinct components there is an arc
/// between the corresponding components. Arcs internal to a component are
/// skipped, so the result is acyclic; parallel arcs between the same pair of
/// components are kept, as for each arc of the original graph the component
/// of both endpoints is just looked up in the dense table of `sccs`.
///
/// # Arguments
///
/// * `graph`: the graph `sccs` was computed from.
///
/// * `sccs`: the strongly connected components of `graph`.
///
/// * `pl`: a progress logger.
///
/// # Panics
///
/// In debug mode, if `sccs` was not computed from `graph` (in particular, if
/// the number of nodes differ).
pub fn condense(graph: &DirectedGraph, sccs: &Sccs, pl: &mut impl ProgressLog) -> DirectedGraph {
    let num_nodes = graph.num_nodes();
    debug_assert_eq!(sccs.components().len(), num_nodes);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Building condensation...");

    let components = sccs.components();
    let mut condensation = DirectedGraph::new(sccs.num_components());

    for node in 0..num_nodes {
        let src_component = components[node];
        for &succ in graph.successors(node) {
            let dst_component = components[succ];
            if src_component != dst_component {
                condensation.push_arc(src_component, dst_component);
            }
        }
        pl.light_update();
    }

    pl.done();
    condensation
}
