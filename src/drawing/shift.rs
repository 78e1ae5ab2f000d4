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

use smallvec::SmallVec;

use crate::embedding::Embedding;
use crate::geometry::Coord;

/// The shift algorithm: assigns integer grid coordinates to every
/// vertex of a triangulation given a canonical order and the child
/// lists recorded with it.
///
/// Returns one coordinate per vertex handle. The drawing is a planar
/// straight-line embedding with non-negative coordinates and width and
/// height linear in the vertex count.
pub fn assign_coordinates(
    tri: &Embedding,
    order: &[usize],
    children: &[SmallVec<[usize; 4]>],
) -> Vec<Coord> {
    let mut coords = vec![Coord::default(); tri.vertex_count()];
    // covering[v] = vertices that shift whenever v shifts
    let mut covering: Vec<Vec<usize>> = (0..tri.vertex_count()).map(|v| vec![v]).collect();

    coords[order[0]] = Coord::new(0, 0);
    coords[order[1]] = Coord::new(2, 0);
    coords[order[2]] = Coord::new(1, 1);

    // the current outer face from left to right
    let mut outer: Vec<usize> = vec![order[0], order[2], order[1]];

    for k in 3..order.len() {
        let vk = order[k];
        let cs = &children[vk];
        debug_assert!(cs.len() >= 2);
        let left_child = cs[0];
        let right_child = cs[cs.len() - 1];

        let mut p = 0;
        while outer[p] != left_child {
            p += 1;
        }

        // shift the strictly covered span by one and absorb it
        let mut q = p + 1;
        let mut absorbed: Vec<usize> = Vec::new();
        while outer[q] != right_child {
            for &covered in &covering[outer[q]] {
                coords[covered].x += 1;
                absorbed.push(covered);
            }
            q += 1;
        }

        // everything from the right child on moves out of the way
        for &outer_vertex in &outer[q..] {
            for &covered in &covering[outer_vertex] {
                coords[covered].x += 2;
            }
        }
        covering[vk].extend(absorbed);

        // vk sits on the crossing of the +1 diagonal through the left
        // child and the -1 diagonal through the right child; the sums
        // are even by construction, anything else is an upstream bug
        let left = coords[left_child];
        let right = coords[right_child];
        debug_assert_eq!((right.x + right.y + left.x - left.y) % 2, 0);
        coords[vk] = Coord::new(
            (right.x + right.y + left.x - left.y) / 2,
            (right.x + right.y - left.x + left.y) / 2,
        );

        // vk replaces the covered span on the outer face
        outer.drain(p + 1..q);
        outer.insert(p + 1, vk);
    }

    coords
}
