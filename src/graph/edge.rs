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

use crate::graph::vertex::UNDEFINED_HEIGHT;

/// An undirected edge that is oriented exactly once when the DFS first
/// visits it. After orientation, tree edges point parent to child and
/// back edges point descendant to ancestor.
#[derive(Debug, Clone)]
pub struct Edge {
    source: usize,
    target: usize,
    oriented: bool,

    pub is_tree_edge: bool,

    /// Lowest DFS height reachable from the subtree below this edge via
    /// a single back edge.
    pub lowpoint: usize,
    /// Second lowest such height.
    pub lowpoint2: usize,

    /// Sort key for adjacency lists: `2 * lowpoint`, plus one if the
    /// subtree is chordal (`lowpoint2 < height(source)`). Multiplied by
    /// the resolved side before the embedding-order pass, so it can go
    /// negative.
    pub nesting_depth: i64,

    /// Side of this edge relative to its reference edge, +1 or -1.
    pub side: i8,

    /// Size of the conflict stack when the testing pass first processed
    /// this edge.
    pub stack_bottom: usize,

    /// Back edge realizing `lowpoint`.
    pub low_point_edge: Option<usize>,
    /// Edge whose resolved side this edge's side is relative to. Cleared
    /// when the side is resolved.
    pub reference_edge: Option<usize>,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self {
            source,
            target,
            oriented: false,
            is_tree_edge: false,
            lowpoint: UNDEFINED_HEIGHT,
            lowpoint2: UNDEFINED_HEIGHT,
            nesting_depth: -1,
            side: 1,
            stack_bottom: 0,
            low_point_edge: None,
            reference_edge: None,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// The endpoint that is not `v`.
    pub fn other(&self, v: usize) -> usize {
        if self.source == v { self.target } else { self.source }
    }

    pub fn is_oriented(&self) -> bool {
        self.oriented
    }

    /// Orients this edge away from `from`. A one-time transition; the
    /// orientation pass checks `is_oriented` before calling this.
    pub fn orient(&mut self, from: usize) {
        debug_assert!(!self.oriented, "edge must be oriented only once");
        debug_assert!(from == self.source || from == self.target);
        if self.target == from {
            self.target = self.source;
            self.source = from;
        }
        self.oriented = true;
    }
}
