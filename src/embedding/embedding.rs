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

use crate::embedding::face::Face;
use crate::embedding::half_edge::HalfEdge;
use crate::embedding::vertex::Vertex;
use crate::error::Error;

/// A planar map. Vertex, half-edge and face handles are indices into the
/// arenas, so cloning an embedding keeps all handles valid; the
/// triangulator exploits that to transfer coordinates back by handle.
#[derive(Debug, Clone, Default)]
pub struct Embedding {
    pub vertices: Vec<Vertex>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}

impl Embedding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Creates a vertex with the generated label `x<id>`.
    pub fn add_vertex(&mut self) -> usize {
        let id = self.vertices.len();
        self.add_labeled(format!("x{}", id))
    }

    pub fn add_labeled(&mut self, label: String) -> usize {
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(label));
        id
    }

    pub fn add_half_edge(&mut self, target: usize) -> usize {
        let id = self.half_edges.len();
        self.half_edges.push(HalfEdge::new(target));
        id
    }

    pub fn add_face(&mut self) -> usize {
        let id = self.faces.len();
        self.faces.push(Face::new());
        id
    }

    /// Source vertex of a half-edge, i.e. the target of its twin.
    pub fn source(&self, e: usize) -> usize {
        self.half_edges[self.half_edges[e].twin].target
    }

    /// The half-edges on the boundary of `face`, in boundary order.
    pub fn face_edges(&self, face: usize) -> Vec<usize> {
        let start = self.faces[face].half_edge;
        if start == usize::MAX {
            return Vec::new();
        }
        let mut edges = vec![start];
        let mut e = self.half_edges[start].next;
        while e != start {
            edges.push(e);
            e = self.half_edges[e].next;
        }
        edges
    }

    /// Number of half-edges on the boundary of `face`.
    pub fn face_degree(&self, face: usize) -> usize {
        let start = self.faces[face].half_edge;
        if start == usize::MAX {
            return 0;
        }
        let mut deg = 0;
        let mut e = start;
        loop {
            deg += 1;
            e = self.half_edges[e].next;
            if e == start {
                break;
            }
        }
        deg
    }

    /// The outgoing half-edges of `v` in rotation order.
    pub fn vertex_edges(&self, v: usize) -> Vec<usize> {
        let start = self.vertices[v].out_edge;
        if start == usize::MAX {
            return Vec::new();
        }
        let mut edges = vec![start];
        let mut e = self.half_edges[self.half_edges[start].twin].next;
        while e != start {
            edges.push(e);
            e = self.half_edges[self.half_edges[e].twin].next;
        }
        edges
    }

    pub fn vertex_degree(&self, v: usize) -> usize {
        self.vertex_edges(v).len()
    }

    pub fn face_has_vertex(&self, face: usize, v: usize) -> bool {
        self.face_edges(face).iter().any(|&e| self.source(e) == v)
    }

    /// Inserts the edge (source, target) into `face`. Both vertices must
    /// already lie on the face boundary, except that either may still be
    /// isolated. When both endpoints already have a rotation, the face
    /// is split and the twin's side becomes a new face.
    ///
    /// Returns the half-edge directed from `source` to `target`.
    pub fn insert_edge(
        &mut self,
        source: usize,
        target: usize,
        face: usize,
    ) -> Result<usize, Error> {
        let (source, target, switched) = if self.vertices[source].is_isolated() {
            (target, source, true)
        } else {
            (source, target, false)
        };

        let edge = self.add_half_edge(target);
        let twin = self.add_half_edge(source);
        self.half_edges[edge].twin = twin;
        self.half_edges[twin].twin = edge;
        self.half_edges[edge].face = face;
        self.faces[face].half_edge = edge;

        if self.vertices[target].is_isolated() {
            // target dangles off the boundary, the face is not split
            self.half_edges[edge].next = twin;
            self.half_edges[twin].prev = edge;
            self.vertices[target].out_edge = twin;
            self.half_edges[twin].face = face;

            if self.vertices[source].is_isolated() {
                // very first edge of this face
                self.vertices[source].out_edge = edge;
                self.half_edges[edge].prev = twin;
                self.half_edges[twin].next = edge;
            } else {
                let source_out = self.out_edge_on_face(source, face)?;
                let source_in = self.half_edges[source_out].prev;
                self.half_edges[edge].prev = source_in;
                self.half_edges[source_in].next = edge;
                self.half_edges[twin].next = source_out;
                self.half_edges[source_out].prev = twin;
            }
        } else {
            // both endpoints are on the boundary: the edge closes a
            // cycle and the twin's side becomes a new face
            let new_face = self.add_face();
            self.faces[new_face].half_edge = twin;
            self.half_edges[twin].face = new_face;

            let source_out = self.out_edge_on_face(source, face)?;
            let source_in = self.half_edges[source_out].prev;
            let target_out = self.out_edge_on_face(target, face)?;
            let target_in = self.half_edges[target_out].prev;

            self.half_edges[edge].next = target_out;
            self.half_edges[target_out].prev = edge;
            self.half_edges[edge].prev = source_in;
            self.half_edges[source_in].next = edge;

            self.half_edges[twin].next = source_out;
            self.half_edges[source_out].prev = twin;
            self.half_edges[twin].prev = target_in;
            self.half_edges[target_in].next = twin;

            // re-label the boundary that now belongs to the new face
            let mut e = self.half_edges[twin].next;
            while e != twin {
                self.half_edges[e].face = new_face;
                e = self.half_edges[e].next;
            }
        }

        Ok(if switched { twin } else { edge })
    }

    /// Outgoing half-edge of `v` whose left face is `face`. This decides
    /// on which side of a shared vertex an insertion splices in.
    fn out_edge_on_face(&self, v: usize, face: usize) -> Result<usize, Error> {
        for e in self.vertex_edges(v) {
            if self.half_edges[e].face == face {
                return Ok(e);
            }
        }
        Err(Error::VertexNotOnFace { vertex: v, face })
    }
}
