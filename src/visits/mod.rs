/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Visits provide a visit method accepting a callback function with an event
//! argument `A` and returning a `ControlFlow<E, ()>`, where `E` is a type
//! parameter of the visit method: for example, `E` might be
//! [`StoppedWhenDone`] when completing early, [`Interrupted`] when
//! interrupted, or [`Infallible`](std::convert::Infallible) if the visit
//! cannot be interrupted.
//!
//! If a callback returns a [`Break`](std::ops::ControlFlow::Break), the visit
//! will be interrupted, and the [`Break`](std::ops::ControlFlow::Break) value
//! will be the return value of the visit method; for uninterruptible visits we
//! suggest to use the [`no-break`](https://crates.io/crates/no-break) crate
//! and its
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! method on the result to let type inference run smoothly.
//!
//! Note that an interruption does not necessarily denote an error condition
//! (see, e.g., [`StoppedWhenDone`]).
//!
//! Visits must provide a `reset` method that makes it possible to reuse the
//! visit.

pub mod depth_first;

use std::ops::ControlFlow;
use thiserror::Error;

#[derive(Error, Debug)]
/// The visit was interrupted.
#[error("The visit was interrupted")]
pub struct Interrupted;

#[derive(Error, Debug)]
/// The result of the visit was computed without completing the visit; for
/// example, during an acyclicity test a single arc pointing at the visit path
/// is sufficient to compute the result.
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// A sequential visit.
///
/// Implementations of this trait must provide the
/// [`visit_with`](Sequential::visit_with) method, which should perform a
/// visit of a graph starting from a given set of nodes; a [depth-first
/// visit](depth_first) interprets the set of nodes as a list of nodes from
/// which to start visits.
pub trait Sequential<A> {
    /// Visits the graph from the specified nodes with an initialization value.
    ///
    /// The initialization value will be passed by mutable reference to the
    /// callback at each event, providing scratch state without captures.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `init`: a value that will be passed to the callback function.
    ///
    /// * `callback`: The callback function.
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified nodes.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `callback`: The callback function.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_with(roots, (), |(), event| callback(event))
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
