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

use crate::drawing::canonical::canonical_order;
use crate::drawing::shift::assign_coordinates;
use crate::drawing::triangulate::triangulate;
use crate::embedding::{Color, Embedding};
use crate::error::Error;

/// Label prefix of the first bipartite set.
pub const SET_A_PREFIX: &str = "b";
/// Label prefix of the second bipartite set.
pub const SET_B_PREFIX: &str = "r";

/// Pixel space the grid drawing is stretched into for rendering.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: i64,
    pub height: i64,
    /// Width and height of a rendered node; kept free as a margin.
    pub node_size: i64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1600, height: 940, node_size: 18 }
    }
}

/// Computes everything a renderer or exporter reads from an embedding:
/// grid coordinates, stretched pixel coordinates for the default
/// viewport, vertex colors, draw flags and edge labels.
///
/// Coordinates are computed on a triangulation of the embedding and
/// transferred back by vertex handle; the helper vertices of the
/// triangulation are discarded with it.
pub fn compute_drawing(embedding: &mut Embedding) -> Result<(), Error> {
    if embedding.vertex_count() == 0 {
        return Ok(());
    }

    if embedding.vertex_count() == 1 {
        // nothing to triangulate, the vertex sits at the origin
        embedding.vertices[0].x = 0;
        embedding.vertices[0].y = 0;
    } else {
        let tri = triangulate(embedding)?;
        let canonical = canonical_order(&tri)?;
        let coords = assign_coordinates(&tri, &canonical.order, &canonical.children);
        for v in 0..embedding.vertex_count() {
            embedding.vertices[v].x = coords[v].x;
            embedding.vertices[v].y = coords[v].y;
        }
    }

    for vertex in &mut embedding.vertices {
        vertex.color = if vertex.label.starts_with(SET_A_PREFIX) {
            Color::SetA
        } else if vertex.label.starts_with(SET_B_PREFIX) {
            Color::SetB
        } else {
            Color::Other
        };
    }

    stretch_to_viewport(embedding, &Viewport::default());

    // exactly one half-edge per twin pair is drawn
    for e in 0..embedding.half_edges.len() {
        let twin = embedding.half_edges[e].twin;
        if !embedding.half_edges[e].to_draw && !embedding.half_edges[twin].to_draw {
            embedding.half_edges[e].to_draw = true;
        }
    }

    // a drawn edge is labelled after its second-set endpoint
    for e in 0..embedding.half_edges.len() {
        if !embedding.half_edges[e].to_draw {
            continue;
        }
        let source = embedding.source(e);
        let target = embedding.half_edges[e].target;
        let label_vertex = if embedding.vertices[source].label.starts_with(SET_A_PREFIX) {
            target
        } else {
            source
        };
        embedding.half_edges[e].label = embedding.vertices[label_vertex].label.clone();
    }

    Ok(())
}

/// Maps the grid coordinates linearly into the viewport, leaving a
/// node-sized margin on every side.
pub fn stretch_to_viewport(embedding: &mut Embedding, viewport: &Viewport) {
    if embedding.vertices.is_empty() {
        return;
    }

    let mut min_x = i64::MAX;
    let mut max_x = i64::MIN;
    let mut min_y = i64::MAX;
    let mut max_y = i64::MIN;
    for vertex in &embedding.vertices {
        min_x = min_x.min(vertex.x);
        max_x = max_x.max(vertex.x);
        min_y = min_y.min(vertex.y);
        max_y = max_y.max(vertex.y);
    }

    // a degenerate extent still maps into the viewport
    let extent_x = (max_x - min_x).max(1) as f64;
    let extent_y = (max_y - min_y).max(1) as f64;
    let factor_x = (viewport.width - 2 * viewport.node_size) as f64 / extent_x;
    let factor_y = (viewport.height - 2 * viewport.node_size) as f64 / extent_y;

    for vertex in &mut embedding.vertices {
        vertex.stretched_x = viewport.node_size + ((vertex.x - min_x) as f64 * factor_x) as i64;
        vertex.stretched_y = viewport.node_size + ((vertex.y - min_y) as f64 * factor_y) as i64;
    }
}
