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

use pgar::generate;
use pgar::{Embedding, Graph, LrPlanarity};

fn embeddings_of(graph: Graph) -> Vec<Embedding> {
    let mut test = LrPlanarity::new(graph);
    test.run().unwrap();
    test.embeddings().unwrap()
}

fn square() -> Graph {
    let mut g = Graph::new();
    let vs: Vec<usize> = (0..4).map(|_| g.add_vertex()).collect();
    g.add_edge(vs[0], vs[1]).unwrap();
    g.add_edge(vs[1], vs[2]).unwrap();
    g.add_edge(vs[2], vs[3]).unwrap();
    g.add_edge(vs[3], vs[0]).unwrap();
    g
}

/// V - E + F = 2 for the embedding of one connected component.
fn assert_euler(emb: &Embedding) {
    let v = emb.vertex_count() as i64;
    let e = emb.edge_count() as i64;
    let f = emb.face_count() as i64;
    assert_eq!(v - e + f, 2, "Euler formula violated: V={} E={} F={}", v, e, f);
}

fn assert_consistent(emb: &Embedding) {
    for e in 0..emb.half_edges.len() {
        let twin = emb.half_edges[e].twin;
        assert_eq!(emb.half_edges[twin].twin, e, "twin involution broken");
        assert_ne!(twin, e);

        let next = emb.half_edges[e].next;
        assert_eq!(emb.half_edges[next].prev, e, "next/prev mismatch");
        // neighbors along a boundary share their face
        assert_eq!(emb.half_edges[next].face, emb.half_edges[e].face);
        // next starts where this edge ends
        assert_eq!(emb.source(next), emb.half_edges[e].target);
    }

    // every rotation accounts for all half-edges exactly once
    let rotation_total: usize = (0..emb.vertex_count())
        .map(|v| emb.vertex_degree(v))
        .sum();
    assert_eq!(rotation_total, emb.half_edges.len());

    // face boundary walks cover all half-edges exactly once
    let boundary_total: usize = (0..emb.face_count())
        .map(|f| emb.face_degree(f))
        .sum();
    assert_eq!(boundary_total, emb.half_edges.len());
}

#[test]
fn square_embedding_has_two_faces() {
    let embs = embeddings_of(square());
    assert_eq!(embs.len(), 1);
    let emb = &embs[0];
    assert_eq!(emb.vertex_count(), 4);
    assert_eq!(emb.edge_count(), 4);
    assert_eq!(emb.face_count(), 2);
    assert_euler(emb);
    assert_consistent(emb);
    // a 4-cycle bounds two faces of degree 4
    assert_eq!(emb.face_degree(0), 4);
    assert_eq!(emb.face_degree(1), 4);
}

#[test]
fn k4_embedding_satisfies_euler() {
    let embs = embeddings_of(generate::complete(4));
    assert_eq!(embs.len(), 1);
    let emb = &embs[0];
    assert_eq!(emb.vertex_count(), 4);
    assert_eq!(emb.edge_count(), 6);
    assert_eq!(emb.face_count(), 4);
    assert_euler(emb);
    assert_consistent(emb);
    for f in 0..emb.face_count() {
        assert_eq!(emb.face_degree(f), 3);
    }
}

#[test]
fn tree_embedding_is_one_face() {
    let embs = embeddings_of(generate::star(5));
    let emb = &embs[0];
    assert_eq!(emb.vertex_count(), 5);
    assert_eq!(emb.edge_count(), 4);
    assert_eq!(emb.face_count(), 1);
    assert_euler(emb);
    assert_consistent(emb);
    assert_eq!(emb.face_degree(0), 8);
}

#[test]
fn every_component_gets_an_embedding() {
    let embs = embeddings_of(generate::two_cliques(3, 4));
    assert_eq!(embs.len(), 2);
    for emb in &embs {
        assert_euler(emb);
        assert_consistent(emb);
    }
    assert_eq!(embs[0].vertex_count() + embs[1].vertex_count(), 7);
}

#[test]
fn larger_planar_graphs_embed_consistently() {
    for graph in [
        generate::wheel(20),
        generate::lattice(6, 6),
        generate::three_tree(3),
        generate::random_triangulation(60, 7),
    ] {
        let embs = embeddings_of(graph);
        for emb in &embs {
            assert_euler(emb);
            assert_consistent(emb);
        }
    }
}

#[test]
fn embedding_keeps_vertex_labels() {
    let mut g = Graph::new();
    let a = g.add_labeled("b1".to_string());
    let b = g.add_labeled("r1".to_string());
    let c = g.add_labeled("b2".to_string());
    g.add_edge(a, b).unwrap();
    g.add_edge(b, c).unwrap();
    g.add_edge(c, a).unwrap();

    let embs = embeddings_of(g);
    let labels: Vec<&str> = embs[0].vertices.iter().map(|v| v.label.as_str()).collect();
    assert!(labels.contains(&"b1"));
    assert!(labels.contains(&"r1"));
    assert!(labels.contains(&"b2"));
}
