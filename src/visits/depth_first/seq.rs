/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Successors;
use crate::visits::{Sequential, depth_first::Event};
use sealed::sealed;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A depth-first visit which does not keep track of nodes on the visit path.
pub type SeqDfs<'a, G> = SeqIter<'a, TwoStates, G>;

/// A depth-first visit which keeps track of nodes on the visit path.
pub type SeqPath<'a, G> = SeqIter<'a, ThreeStates, G>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit keeps an explicit stack of successor enumerations, one for each
/// node on the visit path, and simulates exactly the call/return sequence of
/// the recursive formulation. In particular, [`Postvisit`](Event::Postvisit)
/// events happen in the finish order of the recursive visit.
///
/// There are two versions of the visit, which are type aliases to the same
/// common implementation: [`SeqDfs`] and [`SeqPath`] (the generic
/// implementation should not be instantiated by the user).
///
/// * [`SeqDfs`] uses one bit per node to remember known nodes; it can be
///   used, for example, to compute reachability information or a [topological
///   sort](crate::top_sort()). Events of type [`Revisit`](Event::Revisit)
///   will always have the associated [`on_stack`](Event::Revisit::on_stack)
///   Boolean equal to false.
/// * [`SeqPath`] uses two bits per node to remember known nodes and whether
///   the node is on the visit path; it can be used, for example, to establish
///   [acyclicity](crate::is_acyclic()).
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use condensation::graphs::DirectedGraph;
/// use condensation::visits::{Sequential, StoppedWhenDone, depth_first};
/// use std::ops::ControlFlow::*;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)])?;
/// let mut visit = depth_first::SeqPath::new(&graph);
///
/// assert!(visit.visit(
///     0..graph.num_nodes(),
///     |event| {
///         match event {
///             // Stop the visit as soon as a back arc is found
///             depth_first::Event::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
///             _ => Continue(()),
///         }
///     },
/// ).is_break()); // As the graph is not acyclic
/// # Ok::<(), condensation::graphs::NodeOutOfBounds>(())
/// ```
///
/// Or, assuming the input is acyclic, let us compute the reverse of a
/// topological sort:
///
/// ```
/// use condensation::graphs::DirectedGraph;
/// use condensation::visits::{Sequential, depth_first};
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (1, 3), (0, 3)])?;
/// let mut visit = depth_first::SeqDfs::new(&graph);
/// let mut top_sort = Vec::with_capacity(graph.num_nodes());
///
/// visit.visit(
///     0..graph.num_nodes(),
///     |event| {
///         if let depth_first::Event::Postvisit { node, .. } = event {
///             top_sort.push(node);
///         }
///         Continue(())
///     }
/// ).continue_value_no_break();
/// # Ok::<(), condensation::graphs::NodeOutOfBounds>(())
/// ```
pub struct SeqIter<'a, S, G: Successors> {
    graph: &'a G,
    /// Entries on this stack represent the enumeration of the successors of a
    /// node and the parent of the node. This approach makes it possible to
    /// avoid storing both the current and the parent node in the stack.
    stack: Vec<(<G::Succ<'a> as IntoIterator>::IntoIter, usize)>,
    state: S,
}

impl<'a, S: NodeStates, G: Successors> SeqIter<'a, S, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, S, G> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            state: S::new(num_nodes),
        }
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, node: usize);
    fn set_off_stack(&mut self, node: usize);
    fn on_stack(&self, node: usize) -> bool;
    fn set_known(&mut self, node: usize);
    fn known(&self, node: usize) -> bool;
    fn reset(&mut self);
}

#[doc(hidden)]
/// A two-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does not keep track of nodes on the stack, so events of
/// type [`Revisit`](`Event::Revisit`) will always have the associated Boolean
/// equal to false.
pub struct TwoStates(BitVec);

#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_stack(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

#[doc(hidden)]
/// A three-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does keep track of nodes on the stack, so events of
/// type [`Revisit`](`Event::Revisit`) will provide information about whether
/// the node associated with the event is currently on the visit path.
pub struct ThreeStates(BitVec);

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, node: usize) -> bool {
        self.0.get(node * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node * 2, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node * 2)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

impl<S: NodeStates, G: Successors> Sequential<Event> for SeqIter<'_, S, G> {
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, Event) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        let state = &mut self.state;

        for root in roots {
            if state.known(root) {
                // The node has been visited from an earlier root
                continue;
            }

            callback(&mut init, Event::Init { root })?;

            state.set_known(root);
            callback(
                &mut init,
                Event::Previsit {
                    node: root,
                    parent: root,
                    root,
                    depth: 0,
                },
            )?;

            self.stack
                .push((self.graph.successors(root).into_iter(), root));

            state.set_on_stack(root);

            // This variable keeps track of the current node being visited; the
            // parent node is derived at each iteration of the 'recurse loop.
            let mut curr = root;

            'recurse: loop {
                let depth = self.stack.len();
                let Some((iter, parent)) = self.stack.last_mut() else {
                    callback(&mut init, Event::Done { root })?;
                    break;
                };

                for succ in iter {
                    // Check if node should be visited
                    if state.known(succ) {
                        // Node has already been discovered
                        callback(
                            &mut init,
                            Event::Revisit {
                                node: succ,
                                pred: curr,
                                root,
                                depth,
                                on_stack: state.on_stack(succ),
                            },
                        )?;
                    } else {
                        // First time seeing node
                        state.set_known(succ);
                        callback(
                            &mut init,
                            Event::Previsit {
                                node: succ,
                                parent: curr,
                                root,
                                depth,
                            },
                        )?;
                        // curr is the parent of succ
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), curr));

                        state.set_on_stack(succ);

                        // At the next iteration, succ will be the current node
                        curr = succ;

                        continue 'recurse;
                    }
                }

                callback(
                    &mut init,
                    Event::Postvisit {
                        node: curr,
                        parent: *parent,
                        root,
                        depth: depth - 1,
                    },
                )?;

                state.set_off_stack(curr);

                // We're going up one stack level, so the next current node
                // is the current parent.
                curr = *parent;
                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}
