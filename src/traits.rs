/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Traits abstracting access to the successors of a node.
//!
//! All traversal code in this crate is written against [`Successors`], so it
//! works equally on a [`DirectedGraph`](crate::graphs::DirectedGraph), on its
//! [transposed view](crate::graphs::DirectedGraph::transposed), and on
//! references to either.

/// A directed graph on nodes `0..num_nodes` whose successor lists can be
/// enumerated in constant time per node.
///
/// Successors are returned in a fixed, implementation-defined order (for
/// adjacency-list graphs, insertion order). Duplicate successors are allowed.
pub trait Successors {
    /// The type of the enumeration of the successors of a node.
    type Succ<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns an enumeration of the successors of `node`.
    ///
    /// # Panics
    ///
    /// This method may panic if `node` is not smaller than
    /// [`num_nodes`](Successors::num_nodes).
    fn successors(&self, node: usize) -> Self::Succ<'_>;
}

impl<G: Successors> Successors for &G {
    type Succ<'a>
        = G::Succ<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Succ<'_> {
        (**self).successors(node)
    }
}
