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

/// An interval of back edges on one side of the current DFS path: the
/// edges with the lowest and the highest return point. Both absent means
/// the interval is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interval {
    pub low: Option<usize>,
    pub high: Option<usize>,
}

impl Interval {
    pub fn new(low: Option<usize>, high: Option<usize>) -> Self {
        Self { low, high }
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// A left and a right interval of back edges whose sides are mutually
/// constrained. Short-lived bookkeeping of the testing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictPair {
    pub left: Interval,
    pub right: Interval,
}

impl ConflictPair {
    /// The trivial pair for a freshly seen back edge: the edge goes to
    /// the right side, the left side is empty.
    pub fn trivial(edge: usize) -> Self {
        Self {
            left: Interval::default(),
            right: Interval::new(Some(edge), Some(edge)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

/// The conflict-pair stack of one test run. Owned by the tester instance
/// so that independent testers never share state.
#[derive(Debug, Default)]
pub struct ConflictStack {
    pairs: Vec<ConflictPair>,
}

impl ConflictStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn push(&mut self, pair: ConflictPair) {
        self.pairs.push(pair);
    }

    pub fn pop(&mut self) -> Option<ConflictPair> {
        self.pairs.pop()
    }

    pub fn peek(&self) -> Option<&ConflictPair> {
        self.pairs.last()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
