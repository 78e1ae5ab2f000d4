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

use pgar::drawing::{canonical_order, triangulate};
use pgar::error::Error;
use pgar::generate;
use pgar::{Embedding, Graph, LrPlanarity};

fn embedding_of(graph: Graph) -> Embedding {
    let mut test = LrPlanarity::new(graph);
    test.run().unwrap();
    test.embeddings().unwrap().remove(0)
}

fn assert_valid_canonical(tri: &Embedding) {
    let canonical = canonical_order(tri).unwrap();
    let n = tri.vertex_count();

    // a permutation of all vertex handles
    assert_eq!(canonical.order.len(), n);
    let mut seen = vec![false; n];
    for &v in &canonical.order {
        assert!(v < n);
        assert!(!seen[v], "vertex {} appears twice in the order", v);
        seen[v] = true;
    }

    // every child ranks strictly before its parent
    let mut rank = vec![0; n];
    for (k, &v) in canonical.order.iter().enumerate() {
        rank[v] = k;
    }
    for (k, &v) in canonical.order.iter().enumerate().skip(3) {
        let children = &canonical.children[v];
        assert!(children.len() >= 2, "vertex {} has too few children", v);
        for &c in children {
            assert!(
                rank[c] < k,
                "child {} of {} does not rank before it",
                c,
                v
            );
        }
    }
}

#[test]
fn canonical_order_of_k4() {
    let emb = embedding_of(generate::complete(4));
    // K4's embedding is already triangulated
    assert_valid_canonical(&emb);
}

#[test]
fn canonical_order_of_triangulated_square() {
    let emb = embedding_of({
        let mut g = Graph::new();
        let vs: Vec<usize> = (0..4).map(|_| g.add_vertex()).collect();
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            g.add_edge(vs[u], vs[v]).unwrap();
        }
        g
    });
    let tri = triangulate(&emb).unwrap();
    assert_valid_canonical(&tri);
}

#[test]
fn canonical_order_of_random_triangulations() {
    for seed in 0..10 {
        let emb = embedding_of(generate::random_triangulation(50, seed));
        assert_valid_canonical(&emb);
    }
}

#[test]
fn canonical_order_of_stacked_triangulations() {
    let emb = embedding_of(generate::three_tree(3));
    assert_valid_canonical(&emb);
}

#[test]
fn non_triangulation_is_rejected() {
    // the square has quadrilateral faces
    let emb = embedding_of({
        let mut g = Graph::new();
        let vs: Vec<usize> = (0..4).map(|_| g.add_vertex()).collect();
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            g.add_edge(vs[u], vs[v]).unwrap();
        }
        g
    });
    assert!(matches!(
        canonical_order(&emb),
        Err(Error::NotATriangulation)
    ));
}
