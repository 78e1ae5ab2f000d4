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

use pgar::drawing::triangulate;
use pgar::error::Error;
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
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        g.add_edge(vs[u], vs[v]).unwrap();
    }
    g
}

fn assert_triangulated(tri: &Embedding) {
    for f in 0..tri.face_count() {
        assert_eq!(tri.face_degree(f), 3, "face {} is not a triangle", f);
    }
    let v = tri.vertex_count() as i64;
    let e = tri.edge_count() as i64;
    let f = tri.face_count() as i64;
    assert_eq!(v - e + f, 2);
}

#[test]
fn square_triangulates_to_triangles() {
    let embs = embeddings_of(square());
    let tri = triangulate(&embs[0]).unwrap();
    assert_eq!(tri.vertex_count(), 6); // one center per quadrilateral face
    assert_eq!(tri.edge_count(), 12);
    assert_triangulated(&tri);
    // the input embedding is untouched
    assert_eq!(embs[0].vertex_count(), 4);
    assert_eq!(embs[0].face_count(), 2);
}

#[test]
fn triangulation_is_idempotent_on_triangulations() {
    let embs = embeddings_of(generate::random_triangulation(25, 3));
    let emb = &embs[0];
    let tri = triangulate(emb).unwrap();
    // already maximal planar: nothing to insert
    assert_eq!(tri.vertex_count(), emb.vertex_count());
    assert_eq!(tri.edge_count(), emb.edge_count());
    assert_triangulated(&tri);
}

#[test]
fn wheel_and_lattice_triangulate() {
    for graph in [generate::wheel(12), generate::lattice(5, 5)] {
        let embs = embeddings_of(graph);
        let tri = triangulate(&embs[0]).unwrap();
        assert_triangulated(&tri);
    }
}

#[test]
fn single_vertex_component_gets_dummies() {
    let mut g = square();
    g.add_vertex(); // isolated
    let embs = embeddings_of(g);
    assert_eq!(embs.len(), 2);

    let lone = &embs[1];
    assert_eq!(lone.vertex_count(), 1);
    let tri = triangulate(lone).unwrap();
    // documented degenerate case: two dummies, one face of degree 4
    assert_eq!(tri.vertex_count(), 3);
    assert_eq!(tri.edge_count(), 2);
    assert_eq!(tri.face_count(), 1);
    assert_eq!(tri.face_degree(0), 4);
}

#[test]
fn two_vertex_component_becomes_a_triangle() {
    let mut g = square();
    let a = g.add_vertex();
    let b = g.add_vertex();
    g.add_edge(a, b).unwrap();
    let embs = embeddings_of(g);
    assert_eq!(embs.len(), 2);

    let pair = &embs[1];
    assert_eq!(pair.vertex_count(), 2);
    let tri = triangulate(pair).unwrap();
    assert_eq!(tri.vertex_count(), 3);
    assert_triangulated(&tri);
}

#[test]
fn bridges_are_rejected() {
    // triangle with a pendant edge: the pendant is a bridge, so one
    // face boundary repeats it
    let mut g = Graph::new();
    let vs: Vec<usize> = (0..4).map(|_| g.add_vertex()).collect();
    for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3)] {
        g.add_edge(vs[u], vs[v]).unwrap();
    }
    let embs = embeddings_of(g);
    assert!(matches!(
        triangulate(&embs[0]),
        Err(Error::NonSimpleFace { .. })
    ));
}
