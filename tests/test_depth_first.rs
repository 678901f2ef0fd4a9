/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use condensation::graphs::DirectedGraph;
use condensation::visits::{Sequential, StoppedWhenDone, depth_first};
use no_break::NoBreak;
use std::ops::ControlFlow::{Break, Continue};

#[test]
fn test_depth() -> Result<()> {
    let graph = DirectedGraph::from_arcs(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)])?;
    depth_first::SeqDfs::new(&graph)
        .visit([0], |event| {
            if let depth_first::Event::Previsit { node, depth, .. } = event {
                assert_eq!(node, depth);
            }
            Continue(())
        })
        .continue_value_no_break();
    Ok(())
}

#[test]
fn test_finish_order() -> Result<()> {
    // On a path, postvisits happen in reverse visit order
    let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 3)])?;
    let mut finish_order = Vec::new();

    depth_first::SeqDfs::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            if let depth_first::Event::Postvisit { node, .. } = event {
                finish_order.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(finish_order, vec![3, 2, 1, 0]);
    Ok(())
}

#[test]
fn test_parents() -> Result<()> {
    let graph = DirectedGraph::from_arcs(5, [(0, 1), (0, 2), (1, 3), (2, 4)])?;
    let mut parent = vec![usize::MAX; graph.num_nodes()];

    depth_first::SeqDfs::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            if let depth_first::Event::Previsit { node, parent: p, .. } = event {
                parent[node] = p;
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(parent, vec![0, 0, 0, 1, 2]);
    Ok(())
}

#[test]
fn test_back_arc_is_on_stack() -> Result<()> {
    let graph = DirectedGraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)])?;
    let mut visit = depth_first::SeqPath::new(&graph);

    assert!(
        visit
            .visit(0..graph.num_nodes(), |event| {
                match event {
                    depth_first::Event::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
                    _ => Continue(()),
                }
            })
            .is_break()
    );
    Ok(())
}

#[test]
fn test_cross_arc_is_off_stack() -> Result<()> {
    // The arc (2, 1) is a cross arc: 1 has already been postvisited
    let graph = DirectedGraph::from_arcs(3, [(0, 1), (0, 2), (2, 1)])?;
    let mut revisits = 0;

    depth_first::SeqPath::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            if let depth_first::Event::Revisit { on_stack, .. } = event {
                assert!(!on_stack);
                revisits += 1;
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(revisits, 1);
    Ok(())
}

#[test]
fn test_roots_already_visited_are_skipped() -> Result<()> {
    let graph = DirectedGraph::from_arcs(3, [(0, 1), (1, 2)])?;
    let mut init_events = 0;

    depth_first::SeqDfs::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            if let depth_first::Event::Init { root } = event {
                assert_eq!(root, 0);
                init_events += 1;
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(init_events, 1);
    Ok(())
}

#[test]
fn test_reset() -> Result<()> {
    let graph = DirectedGraph::from_arcs(2, [(0, 1)])?;
    let mut visit = depth_first::SeqDfs::new(&graph);

    let mut previsits = 0;
    visit
        .visit([0], |event| {
            if let depth_first::Event::Previsit { .. } = event {
                previsits += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(previsits, 2);

    // Without a reset, everything is known
    visit
        .visit([0], |event| {
            if let depth_first::Event::Previsit { .. } = event {
                previsits += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(previsits, 2);

    visit.reset();
    visit
        .visit([1], |event| {
            if let depth_first::Event::Previsit { .. } = event {
                previsits += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(previsits, 3);

    Ok(())
}
