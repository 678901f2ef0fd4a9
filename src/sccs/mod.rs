/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components.
//!
//! The components of a directed graph are computed with [Kosaraju's
//! algorithm](kosaraju), a two-pass depth-first technique: the first pass
//! records the finish order of the nodes on the forward adjacency, and the
//! second pass extracts one maximal component per visit tree on the reverse
//! adjacency, following that order.
//!
//! # Examples
//! ```
//! use condensation::graphs::DirectedGraph;
//! use condensation::sccs::kosaraju;
//! use dsi_progress_logger::no_logging;
//!
//! let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)])?;
//!
//! let mut sccs = kosaraju(&graph, no_logging![]);
//!
//! // Let's sort the components by size
//! let sizes = sccs.sort_by_size();
//!
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! assert_eq!(sccs.components(), &vec![0, 0, 0, 1]);
//! # Ok::<(), condensation::graphs::NodeOutOfBounds>(())
//! ```

mod kosaraju;
pub use kosaraju::*;

/// Strongly connected components.
///
/// An instance of this structure stores the [index of the
/// component](Sccs::components) of each node as a dense table, so component
/// membership queries take constant time. Components are numbered from 0 to
/// [`num_components`](Sccs::num_components).
///
/// Moreover, this structure makes it possible to [sort the components by
/// size](Sccs::sort_by_size).
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of strongly connected
    /// components will be decreasing in the component index. The method
    /// returns the sizes of the components after the renumbering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let mut sizes = self.compute_sizes();
        assert!(sizes.len() == self.num_components());
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_unstable_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        sort_perm
            .iter()
            .enumerate()
            .for_each(|(i, &x)| inv_perm[x] = i);

        self.components
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
        sizes.sort_by(|&x, &y| y.cmp(&x));
        sizes
    }
}
