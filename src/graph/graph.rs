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

use ahash::AHashSet;

use crate::error::Error;
use crate::graph::adjacency::AdjacencyList;
use crate::graph::edge::Edge;
use crate::graph::vertex::Vertex;
use crate::sort::counting_sort_auto;

/// An undirected simple graph. Vertex and edge handles are indices into
/// the arenas; every edge appears in the adjacency lists of both of its
/// endpoints.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adjacency: Vec<AdjacencyList>,
    endpoint_pairs: AHashSet<(usize, usize)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self) -> usize {
        let id = self.vertices.len();
        self.add_labeled(id.to_string())
    }

    pub fn add_labeled(&mut self, label: String) -> usize {
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(label));
        self.adjacency.push(AdjacencyList::new());
        id
    }

    /// Adds the undirected edge (source, target) and appends it to both
    /// adjacency lists. Self-loops and parallel edges violate the
    /// simple-graph precondition of the planarity test and are rejected
    /// here, where the check is cheap.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<usize, Error> {
        if source == target {
            return Err(Error::SelfLoop { vertex: source });
        }
        let pair = (source.min(target), source.max(target));
        if !self.endpoint_pairs.insert(pair) {
            return Err(Error::ParallelEdge { source, target });
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(source, target));
        self.adjacency[source].push_back(id);
        self.adjacency[target].push_back(id);
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, v: usize) -> &Vertex {
        &self.vertices[v]
    }

    pub fn vertex_mut(&mut self, v: usize) -> &mut Vertex {
        &mut self.vertices[v]
    }

    pub fn edge(&self, e: usize) -> &Edge {
        &self.edges[e]
    }

    pub fn edge_mut(&mut self, e: usize) -> &mut Edge {
        &mut self.edges[e]
    }

    pub fn adjacency(&self, v: usize) -> &AdjacencyList {
        &self.adjacency[v]
    }

    pub fn adjacency_mut(&mut self, v: usize) -> &mut AdjacencyList {
        &mut self.adjacency[v]
    }

    /// Sorts every adjacency list non-decreasingly by nesting depth,
    /// in linear time per list.
    pub fn sort_adjacency_lists(&mut self) -> Result<(), Error> {
        for v in 0..self.vertices.len() {
            if self.adjacency[v].len() < 2 {
                continue;
            }
            let ids = self.adjacency[v].to_vec();
            let edges = &self.edges;
            let sorted = counting_sort_auto(ids, |&e| edges[e].nesting_depth)?;
            self.adjacency[v].rebuild(&sorted);
        }
        Ok(())
    }

    /// Resolves every edge's side through its reference-edge chain and
    /// folds the sign into the nesting depth, so that the next sort
    /// produces the final embedding order.
    pub fn update_nesting_depth_for_embedding(&mut self) {
        for e in 0..self.edges.len() {
            let sign = self.resolved_sign(e);
            self.edges[e].nesting_depth *= sign as i64;
        }
    }

    /// Lazy sign resolution with path compression: walks the reference
    /// chain, then folds the resolved sign backwards, clearing each
    /// reference so no edge is resolved twice.
    fn resolved_sign(&mut self, e: usize) -> i8 {
        let mut chain = vec![e];
        let mut cur = e;
        while let Some(r) = self.edges[cur].reference_edge {
            chain.push(r);
            cur = r;
        }
        for i in (0..chain.len() - 1).rev() {
            let next_side = self.edges[chain[i + 1]].side;
            let edge = &mut self.edges[chain[i]];
            edge.side *= next_side;
            edge.reference_edge = None;
        }
        self.edges[e].side
    }
}
