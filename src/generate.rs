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

//! Graph generators for tests, benchmarks and demos.
//!
//! All constructions are simple graphs, so the `add_edge` results are
//! infallible by construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

fn connect(graph: &mut Graph, u: usize, v: usize) {
    graph.add_edge(u, v).expect("generator produced a non-simple edge");
}

fn vertices(graph: &mut Graph, count: usize) -> Vec<usize> {
    (0..count).map(|_| graph.add_vertex()).collect()
}

/// A star: vertex 0 connected to all others.
pub fn star(n: usize) -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, n);
    for i in 1..n {
        connect(&mut graph, vs[0], vs[i]);
    }
    graph
}

/// A width x height grid graph.
pub fn lattice(width: usize, height: usize) -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, width * height);
    for i in 0..width {
        for j in 0..height {
            if j + 1 < height {
                connect(&mut graph, vs[i * height + j], vs[i * height + j + 1]);
            }
            if i + 1 < width {
                connect(&mut graph, vs[i * height + j], vs[(i + 1) * height + j]);
            }
        }
    }
    graph
}

/// A wheel: a cycle of n - 1 vertices, each also connected to a hub.
pub fn wheel(n: usize) -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, n);
    for i in 1..n {
        connect(&mut graph, vs[0], vs[i]);
        let j = if i == n - 1 { 1 } else { i + 1 };
        connect(&mut graph, vs[i], vs[j]);
    }
    graph
}

/// The complete graph on n vertices.
pub fn complete(n: usize) -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, n);
    for i in 0..n {
        for j in i + 1..n {
            connect(&mut graph, vs[i], vs[j]);
        }
    }
    graph
}

/// The complete bipartite graph with set sizes a and b.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, a + b);
    for i in 0..a {
        for j in a..a + b {
            connect(&mut graph, vs[i], vs[j]);
        }
    }
    graph
}

/// Two disjoint cliques of the given sizes, for multi-component tests.
pub fn two_cliques(n1: usize, n2: usize) -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, n1 + n2);
    for i in 0..n1 {
        for j in i + 1..n1 {
            connect(&mut graph, vs[i], vs[j]);
        }
    }
    for i in n1..n1 + n2 {
        for j in i + 1..n1 + n2 {
            connect(&mut graph, vs[i], vs[j]);
        }
    }
    graph
}

/// A maximal planar graph built by recursively stacking a vertex into
/// every face of a triangle, `depth` levels deep. The vertex count is
/// exponential in `depth`.
pub fn three_tree(depth: usize) -> Graph {
    let mut graph = Graph::new();
    let v1 = graph.add_vertex();
    let v2 = graph.add_vertex();
    let v3 = graph.add_vertex();
    connect(&mut graph, v1, v2);
    connect(&mut graph, v1, v3);
    connect(&mut graph, v2, v3);
    stack_triangle(&mut graph, v1, v2, v3, depth);
    graph
}

fn stack_triangle(graph: &mut Graph, v1: usize, v2: usize, v3: usize, depth: usize) {
    let v = graph.add_vertex();
    connect(graph, v, v1);
    connect(graph, v, v2);
    connect(graph, v, v3);
    if depth <= 1 {
        return;
    }
    stack_triangle(graph, v1, v2, v, depth - 1);
    stack_triangle(graph, v1, v3, v, depth - 1);
    stack_triangle(graph, v2, v3, v, depth - 1);
}

/// A random maximal planar graph on `n >= 3` vertices: starts from a
/// triangle and repeatedly splits a random triangular face with a new
/// vertex connected to its three corners.
pub fn random_triangulation(n: usize, seed: u64) -> Graph {
    assert!(n >= 3, "a triangulation needs at least 3 vertices");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let v1 = graph.add_vertex();
    let v2 = graph.add_vertex();
    let v3 = graph.add_vertex();
    connect(&mut graph, v1, v2);
    connect(&mut graph, v1, v3);
    connect(&mut graph, v2, v3);

    let mut faces = vec![[v1, v2, v3], [v1, v2, v3]];
    for _ in 3..n {
        let i = rng.random_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(i);
        let v = graph.add_vertex();
        connect(&mut graph, v, a);
        connect(&mut graph, v, b);
        connect(&mut graph, v, c);
        faces.push([a, b, v]);
        faces.push([a, c, v]);
        faces.push([b, c, v]);
    }
    graph
}

/// A subdivision of K3,3 on 8 vertices.
pub fn k33_subdivision_small() -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, 8);
    for (u, v) in [
        (0, 3),
        (0, 4),
        (0, 5),
        (1, 3),
        (1, 4),
        (1, 5),
        (2, 4),
        (2, 5),
        (2, 7),
        (3, 6),
        (6, 7),
    ] {
        connect(&mut graph, vs[u], vs[v]);
    }
    graph
}

/// A larger K3,3 subdivision hidden in a 17-vertex graph.
pub fn k33_subdivision_large() -> Graph {
    let mut graph = Graph::new();
    let vs = vertices(&mut graph, 17);
    for (u, v) in [
        (0, 3),
        (0, 4),
        (0, 11),
        (1, 3),
        (1, 4),
        (1, 6),
        (2, 4),
        (2, 5),
        (2, 16),
        (3, 15),
        (5, 7),
        (5, 12),
        (6, 7),
        (6, 8),
        (6, 9),
        (6, 10),
        (7, 8),
        (7, 9),
        (7, 10),
        (8, 9),
        (9, 10),
        (11, 12),
        (11, 13),
        (11, 14),
        (12, 13),
        (12, 14),
        (13, 14),
        (15, 16),
    ] {
        connect(&mut graph, vs[u], vs[v]);
    }
    graph
}
