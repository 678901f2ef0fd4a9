/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.

pub mod directed;
pub use directed::{DirectedGraph, NodeOutOfBounds, Transposed};
