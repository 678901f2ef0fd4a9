/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations accept a callback function with argument [`Event`]. Since
//! [`Event`] contains the predecessor of the visited node, all
//! post-initialization visit events can be interpreted as arc events. The
//! only exception are the previsit and postvisit events of the root.

mod seq;
pub use seq::*;

/// Types of callback events generated during depth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Event {
    /// This event should be used to set up state at the start of the visit.
    ///
    /// Note that this event will not happen if the visit is empty, that
    /// is, all of the roots have already been visited.
    Init {
        /// The root of the current visit tree, that is, the first node that
        /// will be visited.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all node fields are equal to the root.
    Previsit {
        /// The current node.
        node: usize,
        /// The parent of [`node`](`Event::Previsit::node`) in the visit tree,
        /// or [`root`](`Event::Previsit::root`) if
        /// [`node`](`Event::Previsit::node`) is the root.
        parent: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the [root](`Event::Previsit::root`) to
        /// [`node`](`Event::Previsit::node`).
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        node: usize,
        /// The predecessor of [`node`](`Event::Revisit::node`) used to reach
        /// it.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the [root](`Event::Revisit::root`) to
        /// [`node`](`Event::Revisit::node`).
        depth: usize,
        /// Whether the node is currently on the visit path, that is, if we
        /// are traversing a back arc, and retreating from it. This is always
        /// false if the visit does not keep track of the visit path (see
        /// [`SeqDfs`] vs. [`SeqPath`]).
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all node fields are equal to
    /// the root.
    Postvisit {
        /// The current node.
        node: usize,
        /// The parent of [`node`](`Event::Postvisit::node`) in the visit
        /// tree, or [`root`](`Event::Postvisit::root`) if
        /// [`node`](`Event::Postvisit::node`) is the root.
        parent: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the [root](`Event::Postvisit::root`) to
        /// [`node`](`Event::Postvisit::node`).
        depth: usize,
    },
    /// The visit has been completed.
    ///
    /// Note that this event will not happen if the visit is empty (that is,
    /// if the root has already been visited) or if the visit is stopped by a
    /// callback breaking out.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}
