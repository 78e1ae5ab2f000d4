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

/// A directed half-edge. Its source vertex is the target of its twin.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    /// Vertex this half-edge points at.
    pub target: usize,
    /// Face to the left of this half-edge.
    pub face: usize,
    /// Oppositely directed partner, `twin(twin(e)) == e`.
    pub twin: usize,
    /// Next edge along the boundary of `face`.
    pub next: usize,
    /// Previous edge along the boundary of `face`.
    pub prev: usize,

    /// Exactly one of a half-edge and its twin is drawn.
    pub to_draw: bool,
    pub label: String,
}

impl HalfEdge {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            face: usize::MAX,
            twin: usize::MAX,
            next: usize::MAX,
            prev: usize::MAX,
            to_draw: false,
            label: String::new(),
        }
    }
}
