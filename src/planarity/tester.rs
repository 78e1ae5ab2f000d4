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

use crate::drawing::layout::compute_drawing;
use crate::embedding::embedder::build_embedding;
use crate::embedding::Embedding;
use crate::error::Error;
use crate::graph::{Graph, NO_EDGE};
use crate::planarity::conflict::{ConflictPair, ConflictStack, Interval};

/// Outcome of the planarity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planarity {
    Planar,
    NotPlanar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    NotRun,
    Oriented,
    Tested,
    Embedded,
}

struct OrientFrame {
    v: usize,
    cursor: Option<usize>,
    /// Tree edge whose child subtree is in flight; its lowpoints are
    /// merged into the parent edge once the subtree is done.
    pending: Option<usize>,
}

struct TestFrame {
    v: usize,
    cursor: Option<usize>,
    first_out: Option<usize>,
    pending: Option<usize>,
}

struct EmbedFrame {
    v: usize,
    /// Snapshot of the adjacency list at entry. The pass splices lists
    /// in place, so iterating the live list would be unsound.
    edges: Vec<usize>,
    idx: usize,
}

/// Left-Right planarity tester.
///
/// Single-use: `run` may be called once, and `embeddings` once after a
/// passing run. The tester owns the graph for the duration of the test
/// because all three passes mutate it in place.
///
/// ```
/// use pgar::{Graph, LrPlanarity, Planarity};
///
/// let mut g = Graph::new();
/// let a = g.add_vertex();
/// let b = g.add_vertex();
/// let c = g.add_vertex();
/// g.add_edge(a, b).unwrap();
/// g.add_edge(b, c).unwrap();
/// g.add_edge(c, a).unwrap();
///
/// let mut test = LrPlanarity::new(g);
/// assert_eq!(test.run().unwrap(), Planarity::Planar);
/// ```
pub struct LrPlanarity {
    graph: Graph,
    stage: Stage,
    planar: bool,
    dfs_run: bool,
    roots: Vec<usize>,
    stack: ConflictStack,
}

impl LrPlanarity {
    /// Creates a tester for `graph`. The graph must be simple, which
    /// [`Graph::add_edge`] already guarantees.
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            stage: Stage::NotRun,
            planar: false,
            dfs_run: false,
            roots: Vec::new(),
            stack: ConflictStack::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// True once the test result is available.
    pub fn was_run(&self) -> bool {
        self.stage != Stage::NotRun
    }

    /// Whether the DFS passes actually executed. The trivial accept for
    /// at most two vertices and the edge-count reject both skip them.
    pub fn dfs_was_run(&self) -> bool {
        self.dfs_run
    }

    pub fn is_planar(&self) -> Result<bool, Error> {
        if self.stage == Stage::NotRun {
            return Err(Error::TestNotRun);
        }
        Ok(self.planar)
    }

    /// Number of connected components discovered by the orientation
    /// pass. Zero when the DFS was skipped.
    pub fn component_count(&self) -> Result<usize, Error> {
        if self.stage == Stage::NotRun {
            return Err(Error::TestNotRun);
        }
        Ok(self.roots.len())
    }

    /// Runs the planarity test. Non-planarity is an outcome, not an
    /// error; only calling `run` twice is.
    pub fn run(&mut self) -> Result<Planarity, Error> {
        if self.stage != Stage::NotRun {
            return Err(Error::TestAlreadyRun);
        }

        let n = self.graph.vertex_count();
        if n <= 2 {
            // a graph with at most 2 vertices is planar
            self.planar = true;
            self.stage = Stage::Tested;
            return Ok(Planarity::Planar);
        }
        if self.graph.edge_count() > 3 * n - 6 {
            // a planar graph has at most 3V - 6 edges
            self.planar = false;
            self.stage = Stage::Tested;
            return Ok(Planarity::NotPlanar);
        }

        self.dfs_run = true;

        // pass 1: orientation
        for s in 0..n {
            if !self.graph.vertex(s).is_discovered() {
                self.graph.vertex_mut(s).height = 0;
                self.roots.push(s);
                self.orient_dfs(s);
            }
        }
        self.stage = Stage::Oriented;

        // pass 2: constraint testing on nesting-depth-ordered lists
        self.graph.sort_adjacency_lists()?;
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            if !self.test_dfs(root) {
                self.planar = false;
                self.stage = Stage::Tested;
                return Ok(Planarity::NotPlanar);
            }
        }

        self.planar = true;
        self.stage = Stage::Tested;
        Ok(Planarity::Planar)
    }

    /// Calculates a planar embedding for every connected component.
    /// Requires a passing [`run`].
    ///
    /// [`run`]: LrPlanarity::run
    pub fn embeddings(&mut self) -> Result<Vec<Embedding>, Error> {
        match self.stage {
            Stage::NotRun | Stage::Oriented => return Err(Error::TestNotRun),
            Stage::Embedded => return Err(Error::AlreadyEmbedded),
            Stage::Tested => {}
        }
        if !self.planar {
            return Err(Error::NotPlanarGraph);
        }

        // pass 3: resolve sides, re-sort, splice into a rotation system
        self.graph.update_nesting_depth_for_embedding();
        self.graph.sort_adjacency_lists()?;
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            self.embed_dfs(root);
        }
        self.stage = Stage::Embedded;

        let mut embeddings = Vec::with_capacity(self.roots.len());
        for &root in &self.roots {
            embeddings.push(build_embedding(&self.graph, root));
        }
        Ok(embeddings)
    }

    /// Like [`embeddings`], but additionally computes the straight-line
    /// grid drawing of every component: coordinates, colors, draw flags
    /// and edge labels.
    ///
    /// Drawing triangulates each embedding, so components with bridges
    /// are rejected with [`Error::NonSimpleFace`]; plain embeddings of
    /// such components are still available through [`embeddings`].
    ///
    /// [`embeddings`]: LrPlanarity::embeddings
    pub fn drawn_embeddings(&mut self) -> Result<Vec<Embedding>, Error> {
        let mut embeddings = self.embeddings()?;
        for emb in &mut embeddings {
            compute_drawing(emb)?;
        }
        Ok(embeddings)
    }

    // ----- pass 1: orientation -----

    fn orient_dfs(&mut self, s: usize) {
        let mut frames = vec![OrientFrame {
            v: s,
            cursor: self.graph.adjacency(s).first(),
            pending: None,
        }];

        while !frames.is_empty() {
            let top = frames.len() - 1;
            if let Some(e) = frames[top].pending.take() {
                self.finish_oriented_edge(e);
            }
            let Some(eid) = frames[top].cursor else {
                frames.pop();
                continue;
            };
            let v = frames[top].v;
            frames[top].cursor = self.graph.adjacency(v).next_of(eid);

            if self.graph.edge(eid).is_oriented() {
                continue;
            }

            let v_height = self.graph.vertex(v).height;
            {
                let edge = self.graph.edge_mut(eid);
                edge.orient(v);
                edge.lowpoint = v_height;
                edge.lowpoint2 = v_height;
            }

            let w = self.graph.edge(eid).target();
            if !self.graph.vertex(w).is_discovered() {
                // tree edge, descend
                self.graph.edge_mut(eid).is_tree_edge = true;
                self.graph.vertex_mut(w).parent_edge = Some(eid);
                self.graph.vertex_mut(w).height = v_height + 1;
                frames[top].pending = Some(eid);
                let first = self.graph.adjacency(w).first();
                frames.push(OrientFrame { v: w, cursor: first, pending: None });
            } else {
                // back edge to an ancestor
                self.graph.edge_mut(eid).is_tree_edge = false;
                let w_height = self.graph.vertex(w).height;
                self.graph.edge_mut(eid).lowpoint = w_height;
                self.finish_oriented_edge(eid);
            }
        }
    }

    /// Nesting depth of `e` and lowpoint merge into the parent edge.
    /// Runs when the edge is fully explored, i.e. immediately for back
    /// edges and after the child subtree for tree edges.
    fn finish_oriented_edge(&mut self, e: usize) {
        let v = self.graph.edge(e).source();
        let v_height = self.graph.vertex(v).height;
        let (lp, lp2) = {
            let edge = self.graph.edge(e);
            (edge.lowpoint, edge.lowpoint2)
        };

        let mut nesting = 2 * (lp as i64);
        if lp2 < v_height {
            // chordal
            nesting += 1;
        }
        self.graph.edge_mut(e).nesting_depth = nesting;

        // a two-element priority merge, not a general comparison
        if let Some(pe) = self.graph.vertex(v).parent_edge {
            let (parent_lp, parent_lp2) = {
                let parent = self.graph.edge(pe);
                (parent.lowpoint, parent.lowpoint2)
            };
            let parent = self.graph.edge_mut(pe);
            if lp < parent_lp {
                parent.lowpoint2 = parent_lp.min(lp2);
                parent.lowpoint = lp;
            } else if lp > parent_lp {
                parent.lowpoint2 = parent_lp2.min(lp);
            } else {
                parent.lowpoint2 = parent_lp2.min(lp2);
            }
        }
    }

    // ----- pass 2: constraint testing -----

    fn test_dfs(&mut self, s: usize) -> bool {
        let mut frames = vec![TestFrame {
            v: s,
            cursor: self.graph.adjacency(s).first(),
            first_out: None,
            pending: None,
        }];

        while !frames.is_empty() {
            let top = frames.len() - 1;
            if let Some(e) = frames[top].pending.take() {
                let v = frames[top].v;
                let first_out = frames[top].first_out;
                if !self.integrate_return_edges(e, v, first_out) {
                    return false;
                }
            }
            let Some(eid) = frames[top].cursor else {
                let v = frames[top].v;
                frames.pop();
                self.leave_vertex(v);
                continue;
            };
            let v = frames[top].v;
            frames[top].cursor = self.graph.adjacency(v).next_of(eid);

            if self.graph.edge(eid).source() != v {
                // only outgoing edges
                continue;
            }
            if frames[top].first_out.is_none() {
                frames[top].first_out = Some(eid);
            }

            self.graph.edge_mut(eid).stack_bottom = self.stack.len();
            if self.graph.edge(eid).is_tree_edge {
                let w = self.graph.edge(eid).target();
                frames[top].pending = Some(eid);
                let first = self.graph.adjacency(w).first();
                frames.push(TestFrame { v: w, cursor: first, first_out: None, pending: None });
            } else {
                self.graph.edge_mut(eid).low_point_edge = Some(eid);
                self.stack.push(ConflictPair::trivial(eid));
                let first_out = frames[top].first_out;
                if !self.integrate_return_edges(eid, v, first_out) {
                    return false;
                }
            }
        }

        true
    }

    /// Folds the return edges of the finished outgoing edge `e` into the
    /// constraints of `v`'s parent edge.
    fn integrate_return_edges(&mut self, e: usize, v: usize, first_out: Option<usize>) -> bool {
        if self.graph.edge(e).lowpoint >= self.graph.vertex(v).height {
            // no return edge above v
            return true;
        }
        let Some(parent_edge) = self.graph.vertex(v).parent_edge else {
            return true;
        };
        if Some(e) == first_out {
            // cheap path: the first outgoing edge hands its lowpoint
            // edge straight to the parent
            let lpe = self.graph.edge(e).low_point_edge;
            self.graph.edge_mut(parent_edge).low_point_edge = lpe;
            true
        } else {
            self.add_constraints(e, parent_edge)
        }
    }

    /// The constraint-merge routine. Returns false on a genuine
    /// left-right conflict, which proves the graph non-planar.
    fn add_constraints(&mut self, e: usize, parent_edge: usize) -> bool {
        let mut p = ConflictPair::default();
        let bottom = self.graph.edge(e).stack_bottom;

        // merge the return edges of e into p.right
        while self.stack.len() > bottom {
            let Some(mut q) = self.stack.pop() else { break };
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                // both sides occupied even after swapping
                return false;
            }
            let Some(q_low) = q.right.low else { continue };
            if self.graph.edge(q_low).lowpoint > self.graph.edge(parent_edge).lowpoint {
                // interval stays constrained, chain it under p.right
                if p.right.is_empty() {
                    p.right.high = q.right.high;
                } else if let Some(p_low) = p.right.low {
                    self.graph.edge_mut(p_low).reference_edge = q.right.high;
                }
                p.right.low = q.right.low;
            } else {
                // returns at the parent's lowpoint, align with it
                let lpe = self.graph.edge(parent_edge).low_point_edge;
                self.graph.edge_mut(q_low).reference_edge = lpe;
            }
        }

        // merge conflicting return edges of earlier siblings of e into
        // p.left; they must travel on the other side
        loop {
            let (top_left, top_right) = match self.stack.peek() {
                Some(pair) => (pair.left, pair.right),
                None => break,
            };
            if !self.conflicting(top_left, e) && !self.conflicting(top_right, e) {
                break;
            }
            let Some(mut q) = self.stack.pop() else { break };
            if self.conflicting(q.right, e) {
                q.swap();
            }
            if self.conflicting(q.right, e) {
                return false;
            }
            // the non-conflicting interval goes below e's lowpoint on
            // the right
            if let Some(p_low) = p.right.low {
                self.graph.edge_mut(p_low).reference_edge = q.right.high;
            }
            if q.right.low.is_some() {
                p.right.low = q.right.low;
            }
            if p.left.is_empty() {
                p.left.high = q.left.high;
            } else if let Some(p_left_low) = p.left.low {
                self.graph.edge_mut(p_left_low).reference_edge = q.left.high;
            }
            p.left.low = q.left.low;
        }

        if !p.is_empty() {
            self.stack.push(p);
        }
        true
    }

    fn conflicting(&self, interval: Interval, e: usize) -> bool {
        interval
            .high
            .is_some_and(|h| self.graph.edge(h).lowpoint > self.graph.edge(e).lowpoint)
    }

    /// Removes return edges ending at `u` when the DFS retreats over the
    /// tree edge into `u`.
    fn trim_back(&mut self, u: usize) {
        let u_height = self.graph.vertex(u).height;

        // drop whole pairs whose lowest return point is u
        loop {
            let top = match self.stack.peek() {
                Some(pair) => *pair,
                None => break,
            };
            if self.lowest(top) != u_height {
                break;
            }
            self.stack.pop();
            if let Some(l) = top.left.low {
                self.graph.edge_mut(l).side = -1;
            }
        }

        // trim the top pair's high ends pointing at u
        if let Some(mut p) = self.stack.pop() {
            loop {
                match p.left.high {
                    Some(h) if self.graph.edge(h).target() == u => {
                        p.left.high = self.graph.edge(h).reference_edge;
                    }
                    _ => break,
                }
            }
            if p.left.high.is_none() {
                if let Some(low) = p.left.low {
                    // interval just emptied, re-home it on the right
                    self.graph.edge_mut(low).reference_edge = p.right.low;
                    self.graph.edge_mut(low).side = -1;
                    p.left.low = None;
                }
            }

            loop {
                match p.right.high {
                    Some(h) if self.graph.edge(h).target() == u => {
                        p.right.high = self.graph.edge(h).reference_edge;
                    }
                    _ => break,
                }
            }
            if p.right.high.is_none() {
                if let Some(low) = p.right.low {
                    self.graph.edge_mut(low).reference_edge = p.left.low;
                    self.graph.edge_mut(low).side = -1;
                    p.right.low = None;
                }
            }

            self.stack.push(p);
        }
    }

    /// Lowest return point recorded in a conflict pair.
    fn lowest(&self, pair: ConflictPair) -> usize {
        match (pair.left.low, pair.right.low) {
            (Some(l), Some(r)) => {
                self.graph.edge(l).lowpoint.min(self.graph.edge(r).lowpoint)
            }
            (Some(l), None) => self.graph.edge(l).lowpoint,
            (None, Some(r)) => self.graph.edge(r).lowpoint,
            (None, None) => usize::MAX,
        }
    }

    /// Post-visit work of the testing pass: trim constraints returning
    /// to the parent and record the parent edge's reference edge.
    fn leave_vertex(&mut self, v: usize) {
        let Some(parent_edge) = self.graph.vertex(v).parent_edge else {
            return;
        };
        let u = self.graph.edge(parent_edge).source();
        self.trim_back(u);

        if self.graph.edge(parent_edge).lowpoint < self.graph.vertex(u).height {
            // the parent edge has a return edge; its side is the side of
            // the highest remaining return edge, ties to the right
            let top = match self.stack.peek() {
                Some(pair) => *pair,
                None => return,
            };
            let chosen = match (top.left.high, top.right.high) {
                (Some(l), Some(r)) => {
                    if self.graph.edge(l).lowpoint > self.graph.edge(r).lowpoint {
                        Some(l)
                    } else {
                        Some(r)
                    }
                }
                (Some(l), None) => Some(l),
                (None, r) => r,
            };
            self.graph.edge_mut(parent_edge).reference_edge = chosen;
        }
    }

    // ----- pass 3: embedding order -----

    fn embed_dfs(&mut self, s: usize) {
        let mut frames = vec![EmbedFrame {
            v: s,
            edges: self.graph.adjacency(s).to_vec(),
            idx: 0,
        }];

        while !frames.is_empty() {
            let top = frames.len() - 1;
            if frames[top].idx >= frames[top].edges.len() {
                frames.pop();
                continue;
            }
            let eid = frames[top].edges[frames[top].idx];
            frames[top].idx += 1;
            let v = frames[top].v;

            if self.graph.edge(eid).source() != v {
                continue;
            }
            let w = self.graph.edge(eid).target();

            if self.graph.edge(eid).is_tree_edge {
                // the tree edge becomes the first entry of the child's
                // rotation and brackets the recursion window
                self.graph.adjacency_mut(w).move_front(eid);
                let vertex = self.graph.vertex_mut(v);
                vertex.left_ref = eid;
                vertex.right_ref = eid;
                let snapshot = self.graph.adjacency(w).to_vec();
                frames.push(EmbedFrame { v: w, edges: snapshot, idx: 0 });
            } else if self.graph.edge(eid).side == 1 {
                let right = self.graph.vertex(w).right_ref;
                debug_assert_ne!(right, NO_EDGE);
                self.graph.adjacency_mut(w).move_after(eid, right);
            } else {
                let left = self.graph.vertex(w).left_ref;
                debug_assert_ne!(left, NO_EDGE);
                self.graph.adjacency_mut(w).move_before(eid, left);
                self.graph.vertex_mut(w).left_ref = eid;
            }
        }
    }
}
