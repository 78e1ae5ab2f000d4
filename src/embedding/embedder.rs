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

//! Turns one tested DFS-tree component into a half-edge embedding.
//!
//! After the embedding-order pass, every adjacency list is a valid
//! counterclockwise rotation. The embedder materializes the rotation
//! system as half-edges and discovers the face structure from the back
//! edges' cycles.

use ahash::AHashMap;

use crate::embedding::Embedding;
use crate::graph::Graph;

/// Builds the half-edge embedding of the component reachable from
/// `root`. The graph must have passed the planarity test and been
/// spliced into embedding order.
pub fn build_embedding(graph: &Graph, root: usize) -> Embedding {
    let mut emb = Embedding::new();
    // one artificial outer face; re-seated once the faces are known
    let outer_face = emb.add_face();

    // component vertices in DFS pre-order over tree edges
    let mut vertices = Vec::new();
    let mut stack = vec![root];
    while let Some(v) = stack.pop() {
        vertices.push(v);
        let mut children = Vec::new();
        for e in graph.adjacency(v).iter() {
            let edge = graph.edge(e);
            if edge.is_tree_edge && edge.source() == v {
                children.push(edge.target());
            }
        }
        for &c in children.iter().rev() {
            stack.push(c);
        }
    }

    let mut vmap: AHashMap<usize, usize> = AHashMap::with_capacity(vertices.len());
    for &v in &vertices {
        let ev = emb.add_labeled(graph.vertex(v).label.clone());
        vmap.insert(v, ev);
    }

    // one half-edge per adjacency-list entry; each graph edge shows up
    // in both endpoint lists, which yields exactly its two half-edges
    let mut out_map: AHashMap<(usize, usize), usize> = AHashMap::new();
    let mut in_map: AHashMap<(usize, usize), usize> = AHashMap::new();
    let mut back_edges: Vec<usize> = Vec::new();

    for &v in &vertices {
        for e in graph.adjacency(v).iter() {
            let w = graph.edge(e).other(v);
            let he = emb.add_half_edge(vmap[&w]);
            emb.half_edges[he].face = outer_face;
            out_map.insert((v, e), he);
            in_map.insert((w, e), he);
            emb.vertices[vmap[&v]].out_edge = he;

            if graph.edge(e).source() == v && !graph.edge(e).is_tree_edge {
                // every back edge closes one face of the embedding
                let f = emb.add_face();
                emb.half_edges[he].face = f;
                emb.faces[f].half_edge = he;
                back_edges.push(he);
            }
        }
    }

    // connect twins through the symmetric maps
    for &v in &vertices {
        for e in graph.adjacency(v).iter() {
            let he = out_map[&(v, e)];
            let twin = in_map[&(v, e)];
            emb.half_edges[he].twin = twin;
            emb.half_edges[twin].twin = he;
        }
    }

    // chain next/prev: the in-edge of one rotation entry continues into
    // the out-edge of the following entry, wrapping last to first
    for &v in &vertices {
        let mut first_out: Option<usize> = None;
        let mut prev_in: Option<usize> = None;
        for e in graph.adjacency(v).iter() {
            let out_edge = out_map[&(v, e)];
            if first_out.is_none() {
                first_out = Some(out_edge);
            }
            if let Some(pi) = prev_in {
                emb.half_edges[pi].next = out_edge;
                emb.half_edges[out_edge].prev = pi;
            }
            prev_in = Some(in_map[&(v, e)]);
        }
        if let (Some(first), Some(last_in)) = (first_out, prev_in) {
            emb.half_edges[last_in].next = first;
            emb.half_edges[first].prev = last_in;
        }
    }

    // propagate each back edge's face around its boundary cycle
    for &b in &back_edges {
        let face = emb.half_edges[b].face;
        let mut e = b;
        while emb.half_edges[e].next != b {
            e = emb.half_edges[e].next;
            emb.half_edges[e].face = face;
        }
    }

    // the outer face is whichever face a back edge's twin landed in
    for &b in &back_edges {
        let twin = emb.half_edges[b].twin;
        if emb.half_edges[twin].face == outer_face {
            emb.faces[outer_face].half_edge = twin;
        }
    }
    if back_edges.is_empty() {
        // a tree component is a single face; any edge will do
        for &v in &vertices {
            let ev = vmap[&v];
            if !emb.vertices[ev].is_isolated() {
                emb.faces[outer_face].half_edge = emb.vertices[ev].out_edge;
            }
        }
    }

    emb
}
