/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]

pub mod acyclicity;
pub mod condensation;
pub mod connectivity;
pub mod degrees;
pub mod graphs;
pub mod sccs;
pub mod top_sort;
pub mod traits;
pub mod visits;

pub use acyclicity::is_acyclic;
pub use top_sort::top_sort;

pub mod prelude {
    pub use crate::acyclicity::is_acyclic;
    pub use crate::condensation::condense;
    pub use crate::connectivity::arcs_to_strongly_connect;
    pub use crate::degrees::{ZeroDegrees, zero_degrees};
    pub use crate::graphs::DirectedGraph;
    pub use crate::sccs::{Sccs, kosaraju};
    pub use crate::top_sort::top_sort;
    pub use crate::traits::Successors;
    pub use crate::visits::depth_first;
}
