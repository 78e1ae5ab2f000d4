// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use pgar::error::Error;
use pgar::generate;
use pgar::{Graph, LrPlanarity, Planarity};

fn test_graph(graph: Graph) -> Planarity {
    let mut test = LrPlanarity::new(graph);
    test.run().unwrap()
}

/// Subdivides every edge of K5 once, so the edge-count rejection does
/// not apply and the conflict machinery has to find the obstruction.
fn k5_subdivision() -> Graph {
    let mut graph = Graph::new();
    let corners: Vec<usize> = (0..5).map(|_| graph.add_vertex()).collect();
    for i in 0..5 {
        for j in i + 1..5 {
            let mid = graph.add_vertex();
            graph.add_edge(corners[i], mid).unwrap();
            graph.add_edge(mid, corners[j]).unwrap();
        }
    }
    graph
}

#[test]
fn tiny_graphs_are_planar_without_dfs() {
    for graph in [
        Graph::new(),
        {
            let mut g = Graph::new();
            g.add_vertex();
            g
        },
        {
            let mut g = Graph::new();
            let a = g.add_vertex();
            let b = g.add_vertex();
            g.add_edge(a, b).unwrap();
            g
        },
    ] {
        let mut test = LrPlanarity::new(graph);
        assert_eq!(test.run().unwrap(), Planarity::Planar);
        assert!(!test.dfs_was_run());
    }
}

#[test]
fn dense_graphs_rejected_without_dfs() {
    // K5 has 10 > 3 * 5 - 6 edges
    let mut test = LrPlanarity::new(generate::complete(5));
    assert_eq!(test.run().unwrap(), Planarity::NotPlanar);
    assert!(!test.dfs_was_run());

    let mut test = LrPlanarity::new(generate::complete(6));
    assert_eq!(test.run().unwrap(), Planarity::NotPlanar);
    assert!(!test.dfs_was_run());
}

#[test]
fn k33_is_not_planar() {
    // 9 edges on 6 vertices passes the count check, the DFS must run
    let mut test = LrPlanarity::new(generate::complete_bipartite(3, 3));
    assert_eq!(test.run().unwrap(), Planarity::NotPlanar);
    assert!(test.dfs_was_run());
}

#[test]
fn k5_subdivision_is_not_planar() {
    let graph = k5_subdivision();
    assert!(graph.edge_count() <= 3 * graph.vertex_count() - 6);
    let mut test = LrPlanarity::new(graph);
    assert_eq!(test.run().unwrap(), Planarity::NotPlanar);
    assert!(test.dfs_was_run());
}

#[test]
fn k33_subdivisions_are_not_planar() {
    assert_eq!(
        test_graph(generate::k33_subdivision_small()),
        Planarity::NotPlanar
    );
    assert_eq!(
        test_graph(generate::k33_subdivision_large()),
        Planarity::NotPlanar
    );
}

#[test]
fn planar_families_pass() {
    assert_eq!(test_graph(generate::complete(4)), Planarity::Planar);
    assert_eq!(test_graph(generate::star(10)), Planarity::Planar);
    assert_eq!(test_graph(generate::wheel(50)), Planarity::Planar);
    assert_eq!(test_graph(generate::lattice(8, 8)), Planarity::Planar);
    assert_eq!(test_graph(generate::three_tree(3)), Planarity::Planar);
    assert_eq!(
        test_graph(generate::complete_bipartite(2, 10)),
        Planarity::Planar
    );
}

#[test]
fn random_triangulations_are_maximal_planar() {
    for seed in 0..20 {
        let graph = generate::random_triangulation(40, seed);
        assert_eq!(graph.edge_count(), 3 * graph.vertex_count() - 6);
        assert_eq!(test_graph(graph), Planarity::Planar);

        // any further edge pushes it over the 3V - 6 bound
        let mut graph = generate::random_triangulation(40, seed);
        let mut added = false;
        'outer: for u in 0..40 {
            for v in u + 1..40 {
                if graph.add_edge(u, v).is_ok() {
                    added = true;
                    break 'outer;
                }
            }
        }
        assert!(added);
        assert_eq!(test_graph(graph), Planarity::NotPlanar);
    }
}

#[test]
fn components_are_counted() {
    let mut test = LrPlanarity::new(generate::two_cliques(3, 4));
    assert_eq!(test.run().unwrap(), Planarity::Planar);
    assert_eq!(test.component_count().unwrap(), 2);

    let mut test = LrPlanarity::new(generate::lattice(5, 5));
    test.run().unwrap();
    assert_eq!(test.component_count().unwrap(), 1);
}

#[test]
fn wheel_stays_planar_with_a_rim_chord() {
    let mut graph = generate::wheel(12);
    graph.add_edge(2, 4).unwrap();
    assert_eq!(test_graph(graph), Planarity::Planar);
}

#[test]
fn usage_errors_are_reported() {
    let mut test = LrPlanarity::new(generate::complete(4));
    assert!(matches!(test.is_planar(), Err(Error::TestNotRun)));
    assert!(matches!(test.embeddings(), Err(Error::TestNotRun)));

    test.run().unwrap();
    assert!(matches!(test.run(), Err(Error::TestAlreadyRun)));
    assert!(test.is_planar().unwrap());

    test.embeddings().unwrap();
    assert!(matches!(test.embeddings(), Err(Error::AlreadyEmbedded)));
}

#[test]
fn embedding_refused_for_non_planar_graph() {
    let mut test = LrPlanarity::new(generate::complete(5));
    assert_eq!(test.run().unwrap(), Planarity::NotPlanar);
    assert!(matches!(test.embeddings(), Err(Error::NotPlanarGraph)));
}

#[test]
fn simple_graph_precondition_is_validated() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    assert!(matches!(graph.add_edge(a, a), Err(Error::SelfLoop { .. })));
    graph.add_edge(a, b).unwrap();
    assert!(matches!(
        graph.add_edge(b, a),
        Err(Error::ParallelEdge { .. })
    ));
    assert_eq!(graph.edge_count(), 1);
}
