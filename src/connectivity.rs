/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::condensation::condense;
use crate::degrees::{ZeroDegrees, zero_degrees};
use crate::graphs::DirectedGraph;
use crate::sccs::kosaraju;
use dsi_progress_logger::ProgressLog;

/// Returns the minimum number of arcs whose addition makes the graph strongly
/// connected.
///
/// If the graph is already strongly connected (in particular, if it is empty
/// or has a single node) the result is zero. Otherwise, by the classical
/// characterization, the result is the larger of the number of source
/// components and the number of sink components of the condensation: pairing
/// sinks to sources with new arcs is always possible, and every source and
/// every sink needs at least one new incident arc.
///
/// # Examples
/// ```
/// use condensation::connectivity::arcs_to_strongly_connect;
/// use condensation::graphs::DirectedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (2, 3)])?;
/// // {0, 1, 2} condenses to a single source, {3} is the only sink
/// assert_eq!(arcs_to_strongly_connect(&graph, no_logging![]), 1);
/// # Ok::<(), condensation::graphs::NodeOutOfBounds>(())
/// ```
pub fn arcs_to_strongly_connect(graph: &DirectedGraph, pl: &mut impl ProgressLog) -> usize {
    let sccs = kosaraju(graph, pl);

    if sccs.num_components() <= 1 {
        return 0;
    }

    let condensation = condense(graph, &sccs, pl);
    let ZeroDegrees { zero_in, zero_out } = zero_degrees(&condensation);
    zero_in.max(zero_out)
}
