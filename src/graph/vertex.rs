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

/// DFS height of a vertex that has not been discovered yet.
pub const UNDEFINED_HEIGHT: usize = usize::MAX;

/// Sentinel for an unset edge reference slot.
pub const NO_EDGE: usize = usize::MAX;

/// A graph vertex. The id of a vertex is its index in the graph arena.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub label: String,

    /// Depth in the DFS tree, `UNDEFINED_HEIGHT` before discovery.
    pub height: usize,
    /// Tree edge leading from the DFS parent into this vertex.
    pub parent_edge: Option<usize>,

    // Reference edge slots of the embedding-order pass. `left_ref` is the
    // leftmost, `right_ref` the rightmost back edge entry point seen so
    // far from the current DFS subtree.
    pub left_ref: usize,
    pub right_ref: usize,
}

impl Vertex {
    pub fn new(label: String) -> Self {
        Self {
            label,
            height: UNDEFINED_HEIGHT,
            parent_edge: None,
            left_ref: NO_EDGE,
            right_ref: NO_EDGE,
        }
    }

    pub fn is_discovered(&self) -> bool {
        self.height != UNDEFINED_HEIGHT
    }
}
