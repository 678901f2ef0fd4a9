/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use condensation::graphs::DirectedGraph;
use condensation::top_sort;
use dsi_progress_logger::prelude::*;

#[test]
fn test_path() -> Result<()> {
    let graph = DirectedGraph::from_arcs(3, [(1, 2), (0, 1)])?;

    assert_eq!(
        top_sort(&graph, no_logging![]),
        vec![0, 1, 2].into_boxed_slice()
    );

    Ok(())
}

#[test]
fn test_dag_order_is_topological() -> Result<()> {
    let arcs = [(0, 2), (1, 2), (2, 3), (2, 4), (3, 5), (4, 5)];
    let graph = DirectedGraph::from_arcs(6, arcs)?;

    let order = top_sort(&graph, no_logging![]);

    let mut position = vec![0; graph.num_nodes()];
    for (pos, &node) in order.iter().enumerate() {
        position[node] = pos;
    }
    for (u, v) in arcs {
        assert!(position[u] < position[v], "arc ({u}, {v})");
    }

    Ok(())
}

#[test]
fn test_cyclic_graph_yields_a_permutation() -> Result<()> {
    let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (3, 1)])?;

    let mut order = top_sort(&graph, no_logging![]).to_vec();
    order.sort_unstable();

    assert_eq!(order, vec![0, 1, 2, 3]);

    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let graph = DirectedGraph::new(0);

    assert!(top_sort(&graph, no_logging![]).is_empty());

    Ok(())
}
