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

use crate::embedding::Embedding;
use crate::error::Error;

/// Triangulates a planar embedding: every face of degree greater than
/// three gets a center vertex connected to each boundary vertex.
///
/// The input embedding is left untouched; the returned triangulation is
/// a clone with extra vertices, edges and faces appended, so every
/// handle of the input remains valid in the output.
///
/// Precondition: all faces are simple, i.e. no undirected edge appears
/// twice on one face's boundary. Bridges violate this and are rejected
/// with [`Error::NonSimpleFace`]. Components with one or two vertices
/// are special-cased with dummy vertices.
pub fn triangulate(embedding: &Embedding) -> Result<Embedding, Error> {
    let mut tri = embedding.clone();

    if embedding.face_count() == 1 {
        let face = 0;
        if embedding.vertex_count() == 2 {
            let dummy = tri.add_vertex();
            for v in 0..embedding.vertex_count() {
                tri.insert_edge(v, dummy, face)?;
            }
            return Ok(tri);
        }
        if embedding.vertex_count() == 1 {
            let dummy1 = tri.add_vertex();
            let dummy2 = tri.add_vertex();
            tri.insert_edge(0, dummy1, face)?;
            tri.insert_edge(0, dummy2, face)?;
            return Ok(tri);
        }
    }

    // only faces of the input embedding are subdivided; faces created
    // while inserting are triangles already
    for face in 0..embedding.face_count() {
        if tri.face_degree(face) <= 3 {
            continue;
        }
        let boundary = embedding.face_edges(face);
        check_simple(embedding, face, &boundary)?;

        let center = tri.add_vertex();
        for e in boundary {
            let source = embedding.source(e);
            // the same edge handle is valid in the clone; its current
            // face there is where the next spoke must go
            let insertion_face = tri.half_edges[e].face;
            tri.insert_edge(source, center, insertion_face)?;
        }
    }

    Ok(tri)
}

/// A face boundary that contains both half-edges of one undirected edge
/// cannot be subdivided correctly, so it is rejected up front.
fn check_simple(embedding: &Embedding, face: usize, boundary: &[usize]) -> Result<(), Error> {
    let mut seen: AHashSet<(usize, usize)> = AHashSet::with_capacity(boundary.len());
    for &e in boundary {
        let s = embedding.source(e);
        let t = embedding.half_edges[e].target;
        if !seen.insert((s.min(t), s.max(t))) {
            return Err(Error::NonSimpleFace { face });
        }
    }
    Ok(())
}
