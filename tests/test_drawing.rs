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
use pgar::geometry::{segments_intersect, Coord};
use pgar::{Embedding, Graph, LrPlanarity};

fn drawn_embeddings_of(graph: Graph) -> Vec<Embedding> {
    let mut test = LrPlanarity::new(graph);
    test.run().unwrap();
    test.drawn_embeddings().unwrap()
}

fn square() -> Graph {
    let mut g = Graph::new();
    let vs: Vec<usize> = (0..4).map(|_| g.add_vertex()).collect();
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        g.add_edge(vs[u], vs[v]).unwrap();
    }
    g
}

fn coord_of(emb: &Embedding, v: usize) -> Coord {
    Coord::new(emb.vertices[v].x, emb.vertices[v].y)
}

/// A straight-line grid drawing is valid when coordinates are
/// non-negative, no two non-adjacent drawn edges share a point, and no
/// two vertices coincide.
fn assert_valid_drawing(emb: &Embedding) {
    for vertex in &emb.vertices {
        assert!(vertex.x >= 0 && vertex.y >= 0, "negative coordinate");
    }

    if emb.vertex_count() > 1 {
        for u in 0..emb.vertex_count() {
            for v in u + 1..emb.vertex_count() {
                assert_ne!(coord_of(emb, u), coord_of(emb, v), "coinciding vertices");
            }
        }
    }

    let mut drawn: Vec<(usize, usize)> = Vec::new();
    for e in 0..emb.half_edges.len() {
        if emb.half_edges[e].to_draw {
            drawn.push((emb.source(e), emb.half_edges[e].target));
        }
    }
    // exactly one half-edge per twin pair
    assert_eq!(drawn.len(), emb.edge_count());

    for i in 0..drawn.len() {
        for j in i + 1..drawn.len() {
            let (a, b) = drawn[i];
            let (c, d) = drawn[j];
            if a == c || a == d || b == c || b == d {
                continue;
            }
            assert!(
                !segments_intersect(
                    coord_of(emb, a),
                    coord_of(emb, b),
                    coord_of(emb, c),
                    coord_of(emb, d)
                ),
                "edges ({},{}) and ({},{}) cross",
                a,
                b,
                c,
                d
            );
        }
    }
}

#[test]
fn square_draws_as_four_distinct_points() {
    let embs = drawn_embeddings_of(square());
    assert_eq!(embs.len(), 1);
    let emb = &embs[0];
    assert_eq!(emb.vertex_count(), 4);
    assert_eq!(emb.face_count(), 2);
    assert_valid_drawing(emb);
}

#[test]
fn k4_draws_without_crossings() {
    let embs = drawn_embeddings_of(generate::complete(4));
    assert_valid_drawing(&embs[0]);
}

#[test]
fn wheels_draw_without_crossings() {
    for n in [5, 8, 13, 20] {
        let embs = drawn_embeddings_of(generate::wheel(n));
        assert_valid_drawing(&embs[0]);
    }
}

#[test]
fn random_triangulations_draw_without_crossings() {
    for seed in 0..10 {
        let embs = drawn_embeddings_of(generate::random_triangulation(35, seed));
        assert_valid_drawing(&embs[0]);
    }
}

#[test]
fn stacked_triangulation_draws_without_crossings() {
    let embs = drawn_embeddings_of(generate::three_tree(3));
    assert_valid_drawing(&embs[0]);
}

#[test]
fn drawing_width_is_linear() {
    let embs = drawn_embeddings_of(generate::random_triangulation(40, 11));
    let emb = &embs[0];
    let max_x = emb.vertices.iter().map(|v| v.x).max().unwrap();
    let max_y = emb.vertices.iter().map(|v| v.y).max().unwrap();
    // the shift algorithm guarantees a (2n - 4) x (n - 2) grid; the
    // triangulation adds no vertices here
    let n = emb.vertex_count() as i64;
    assert!(max_x <= 2 * n - 4);
    assert!(max_y <= n - 2);
}

#[test]
fn isolated_vertices_draw_at_origin() {
    let mut g = square();
    g.add_vertex();
    let embs = drawn_embeddings_of(g);
    assert_eq!(embs.len(), 2);
    assert_valid_drawing(&embs[0]);
    let lone = &embs[1];
    assert_eq!(lone.vertices[0].x, 0);
    assert_eq!(lone.vertices[0].y, 0);
}

#[test]
fn stretched_coordinates_stay_in_viewport() {
    let embs = drawn_embeddings_of(generate::wheel(9));
    for vertex in &embs[0].vertices {
        assert!(vertex.stretched_x >= 0 && vertex.stretched_x <= 1600);
        assert!(vertex.stretched_y >= 0 && vertex.stretched_y <= 940);
    }
}

#[test]
fn bridge_components_cannot_be_drawn() {
    let mut g = Graph::new();
    let vs: Vec<usize> = (0..4).map(|_| g.add_vertex()).collect();
    for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3)] {
        g.add_edge(vs[u], vs[v]).unwrap();
    }
    let mut test = LrPlanarity::new(g);
    test.run().unwrap();
    assert!(matches!(
        test.drawn_embeddings(),
        Err(Error::NonSimpleFace { .. })
    ));
}
