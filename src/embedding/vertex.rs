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

/// Semantic color tag a renderer maps to an actual color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Color {
    /// Vertex of the first bipartite set (label prefix `b`).
    SetA,
    /// Vertex of the second bipartite set (label prefix `r`).
    SetB,
    /// A crossing vertex. Never produced here since only planar graphs
    /// are drawn, but part of the renderer contract.
    Crossing,
    #[default]
    Other,
}

/// A vertex of a planar map.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub label: String,
    /// One outgoing half-edge, `usize::MAX` while the vertex is
    /// isolated.
    pub out_edge: usize,

    // drawing results
    pub x: i64,
    pub y: i64,
    pub stretched_x: i64,
    pub stretched_y: i64,
    pub color: Color,
}

impl Vertex {
    pub fn new(label: String) -> Self {
        Self {
            label,
            out_edge: usize::MAX,
            x: 0,
            y: 0,
            stretched_x: 0,
            stretched_y: 0,
            color: Color::Other,
        }
    }

    pub fn is_isolated(&self) -> bool {
        self.out_edge == usize::MAX
    }
}
