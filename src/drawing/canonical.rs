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
use smallvec::SmallVec;

use crate::embedding::Embedding;
use crate::error::Error;

/// A canonical vertex order of a triangulation.
///
/// `order[0]` and `order[1]` are the base edge of the drawing;
/// `order[k]`'s already-placed neighbors form a contiguous arc of the
/// outer boundary after v0..v(k-1) are placed. `children[v]` lists those
/// neighbors from left to right; all of them rank before `v`.
#[derive(Debug, Clone)]
pub struct CanonicalOrder {
    pub order: Vec<usize>,
    pub children: Vec<SmallVec<[usize; 4]>>,
}

/// Computes a canonical order by repeatedly peeling an outer-cycle
/// vertex without chords. Fails with [`Error::NotATriangulation`] when
/// no vertex can be peeled, which means the input was not triangulated.
pub fn canonical_order(tri: &Embedding) -> Result<CanonicalOrder, Error> {
    let n = tri.vertex_count();
    if n < 3 {
        return Err(Error::NotATriangulation);
    }

    let mut order = vec![usize::MAX; n];
    let mut children: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); n];
    // chords(v) = neighbors of v on the outer cycle, minus its two
    // cycle neighbors; only chord-free vertices can be peeled
    let mut chords = vec![0i64; n];

    // any face works as the outer face, take the first
    let e = tri.faces[0].half_edge;
    if e == usize::MAX {
        return Err(Error::NotATriangulation);
    }
    order[1] = tri.source(e);
    order[0] = tri.half_edges[e].target;

    // vertices currently on the outer cycle
    let mut on_outer: Vec<usize> = Vec::new();
    on_outer.push(tri.half_edges[e].target);
    on_outer.push(tri.half_edges[tri.half_edges[e].next].target);
    on_outer.push(tri.source(e));

    // the outer cycle as half-edges from order[0] towards order[1],
    // excluding the base edge itself
    let next = tri.half_edges[e].next;
    let next2 = tri.half_edges[next].next;
    let mut outer_cycle: Vec<usize> = Vec::new();
    outer_cycle.push(tri.half_edges[next2].twin);
    outer_cycle.push(tri.half_edges[next].twin);

    for k in (2..n).rev() {
        // peel any chord-free outer vertex other than the base edge
        let mut picked = None;
        for (i, &cand) in on_outer.iter().enumerate() {
            if cand != order[0] && cand != order[1] && chords[cand] == 0 {
                picked = Some((i, cand));
                break;
            }
        }
        let Some((i, next_vertex)) = picked else {
            return Err(Error::NotATriangulation);
        };
        on_outer.remove(i);
        order[k] = next_vertex;

        // locate the cycle edge entering the peeled vertex
        let mut index = 0;
        loop {
            if index >= outer_cycle.len() {
                return Err(Error::NotATriangulation);
            }
            if tri.half_edges[outer_cycle[index]].target == next_vertex {
                break;
            }
            index += 1;
        }
        if index + 1 >= outer_cycle.len() {
            return Err(Error::NotATriangulation);
        }
        let out_of_next = outer_cycle.remove(index + 1);
        let into_next = outer_cycle.remove(index);

        // walk the fan below the peeled vertex; every step exposes one
        // new cycle edge and records one child
        let mut current = tri.half_edges[into_next].next;
        let mut end_index = index;
        while current != out_of_next {
            let on_cycle = tri.half_edges[tri.half_edges[current].next].twin;
            outer_cycle.insert(end_index, on_cycle);
            children[next_vertex].insert(0, tri.source(on_cycle));
            end_index += 1;
            current = tri.half_edges[tri.half_edges[current].twin].next;
            on_outer.push(tri.half_edges[on_cycle].target);
        }
        let last_edge = tri.half_edges[tri.half_edges[out_of_next].next].twin;
        outer_cycle.insert(end_index, last_edge);
        children[next_vertex].insert(0, tri.source(last_edge));
        children[next_vertex].insert(0, tri.half_edges[last_edge].target);

        // recompute chord counts for the whole outer cycle
        let members: AHashSet<usize> = on_outer.iter().copied().collect();
        for &v in &on_outer {
            let mut count: i64 = -2;
            for edge in tri.vertex_edges(v) {
                if members.contains(&tri.half_edges[edge].target) {
                    count += 1;
                }
            }
            chords[v] = count;
        }
    }

    Ok(CanonicalOrder { order, children })
}
