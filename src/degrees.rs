/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Successors;

/// The number of nodes of a graph with no incoming and no outgoing arcs.
///
/// On a condensation, [`zero_in`](ZeroDegrees::zero_in) is the number of
/// source components and [`zero_out`](ZeroDegrees::zero_out) is the number of
/// sink components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroDegrees {
    /// The number of nodes with in-degree zero.
    pub zero_in: usize,
    /// The number of nodes with out-degree zero.
    pub zero_out: usize,
}

/// Computes the number of nodes with zero in-degree and zero out-degree.
///
/// A single scan of the successor lists accumulates the in-degree and
/// out-degree of every node; parallel arcs inflate the degrees but cannot
/// turn a zero degree into a nonzero one, so duplicate arcs (as produced,
/// e.g., by [`condense`](crate::condensation::condense)) do not affect the
/// result.
pub fn zero_degrees(graph: impl Successors) -> ZeroDegrees {
    let num_nodes = graph.num_nodes();
    let mut in_degrees = vec![0_usize; num_nodes];
    let mut out_degrees = vec![0_usize; num_nodes];

    for node in 0..num_nodes {
        for succ in graph.successors(node) {
            out_degrees[node] += 1;
            in_degrees[succ] += 1;
        }
    }

    ZeroDegrees {
        zero_in: in_degrees.iter().filter(|&&degree| degree == 0).count(),
        zero_out: out_degrees.iter().filter(|&&degree| degree == 0).count(),
    }
}
