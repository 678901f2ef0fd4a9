/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Successors;
use thiserror::Error;

/// The error returned when an arc endpoint is not a node of the graph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Node {node} does not exist (the graph has {num_nodes} nodes)")]
pub struct NodeOutOfBounds {
    /// The offending endpoint.
    pub node: usize,
    /// The number of nodes of the graph.
    pub num_nodes: usize,
}

/// A mutable directed graph based on vectors of successors and predecessors.
///
/// The graph keeps both the forward and the reverse adjacency lists, so the
/// [transposed view](DirectedGraph::transposed) is available at no cost; this
/// is convenient for algorithms, such as
/// [Kosaraju's](crate::sccs::kosaraju()), that need to traverse arcs in both
/// directions.
///
/// Arcs can only be added, never removed: the intended lifecycle is to build
/// the graph once and then traverse it. Arcs are stored in insertion order and
/// duplicate arcs are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
    /// For each node, its list of predecessors.
    pred: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Creates a new graph with `n` nodes and no arcs.
    pub fn new(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
            pred: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Creates a new graph with `n` nodes from a list of arcs.
    ///
    /// # Errors
    ///
    /// Returns a [`NodeOutOfBounds`] error if some arc endpoint is not
    /// smaller than `n`.
    pub fn from_arcs(
        n: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, NodeOutOfBounds> {
        let mut graph = Self::new(n);
        for (u, v) in arcs {
            graph.add_arc(u, v)?;
        }
        Ok(graph)
    }

    /// Adds the arc `(u, v)` to the graph.
    ///
    /// # Errors
    ///
    /// Returns a [`NodeOutOfBounds`] error if `u` or `v` is not a node of the
    /// graph; in that case, the graph is left unchanged.
    pub fn add_arc(&mut self, u: usize, v: usize) -> Result<(), NodeOutOfBounds> {
        let num_nodes = self.succ.len();
        let max = u.max(v);
        if max >= num_nodes {
            return Err(NodeOutOfBounds {
                node: max,
                num_nodes,
            });
        }
        self.push_arc(u, v);
        Ok(())
    }

    /// Adds the arc `(u, v)` assuming both endpoints are nodes of the graph.
    pub(crate) fn push_arc(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.succ.len());
        debug_assert!(v < self.succ.len());
        self.succ[u].push(v);
        self.pred[v].push(u);
        self.num_arcs += 1;
    }

    /// Returns the number of nodes of the graph.
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of arcs of the graph.
    pub fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    /// Returns the successors of `node`, in insertion order.
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }

    /// Returns the predecessors of `node`, in insertion order.
    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.pred[node]
    }

    /// Returns a view of the graph with all arcs reversed.
    ///
    /// The view borrows the graph and costs nothing to build, as the
    /// predecessor lists are already stored.
    pub fn transposed(&self) -> Transposed<'_> {
        Transposed(self)
    }
}

impl Successors for DirectedGraph {
    type Succ<'a>
        = std::iter::Copied<std::slice::Iter<'a, usize>>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Succ<'_> {
        self.succ[node].iter().copied()
    }
}

/// A borrowing view of a [`DirectedGraph`] exposing the reverse adjacency
/// lists as successors.
#[derive(Clone, Copy, Debug)]
pub struct Transposed<'a>(&'a DirectedGraph);

impl Successors for Transposed<'_> {
    type Succ<'a>
        = std::iter::Copied<std::slice::Iter<'a, usize>>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.0.num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Succ<'_> {
        self.0.pred[node].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_symmetry() -> Result<(), NodeOutOfBounds> {
        let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (2, 3), (0, 1)])?;

        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_arcs(), 5);
        assert_eq!(graph.successors(0), &[1, 1]);
        assert_eq!(graph.predecessors(1), &[0, 0]);
        assert_eq!(graph.successors(2), &[0, 3]);
        assert_eq!(graph.predecessors(0), &[2]);

        for u in 0..graph.num_nodes() {
            for &v in graph.successors(u) {
                assert!(graph.predecessors(v).contains(&u));
            }
        }

        Ok(())
    }

    #[test]
    fn test_add_arc_out_of_bounds() {
        let mut graph = DirectedGraph::new(2);
        assert_eq!(
            graph.add_arc(0, 2),
            Err(NodeOutOfBounds {
                node: 2,
                num_nodes: 2
            })
        );
        assert_eq!(graph.num_arcs(), 0);
    }

    #[test]
    fn test_transposed() -> Result<(), NodeOutOfBounds> {
        let graph = DirectedGraph::from_arcs(3, [(0, 1), (1, 2)])?;
        let transposed = graph.transposed();

        assert_eq!(transposed.num_nodes(), 3);
        assert_eq!(transposed.successors(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(transposed.successors(0).count(), 0);

        Ok(())
    }
}
