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

use std::collections::TryReserveError;
use std::fmt;

/// Errors reported by the planarity pipeline.
///
/// A non-planar input is not an error of [`crate::planarity::LrPlanarity::run`];
/// it is the `NotPlanar` outcome. `NotPlanarGraph` is only returned when an
/// embedding is requested for a graph that failed the test.
#[derive(Debug)]
pub enum Error {
    /// The planarity test was already executed on this instance.
    TestAlreadyRun,
    /// An operation that needs the test result was called before `run`.
    TestNotRun,
    /// An embedding was requested although the instance is already embedded.
    AlreadyEmbedded,
    /// An embedding was requested for a graph that is not planar.
    NotPlanarGraph,
    /// `add_edge` was called with identical endpoints.
    SelfLoop { vertex: usize },
    /// `add_edge` was called for an already existing vertex pair.
    ParallelEdge { source: usize, target: usize },
    /// Counting sort was called with `max < min`.
    InvalidKeyRange { min: i64, max: i64 },
    /// Counting sort found a key outside the declared range.
    KeyOutOfRange { key: i64, min: i64, max: i64 },
    /// The counter array of the counting sort could not be allocated.
    Alloc(TryReserveError),
    /// The canonical orderer ran out of peelable vertices, so its input
    /// was not a triangulation.
    NotATriangulation,
    /// The triangulator met a face whose boundary contains the same
    /// undirected edge twice (e.g. a bridge). Such faces are outside the
    /// triangulator's precondition.
    NonSimpleFace { face: usize },
    /// `insert_edge` was asked to insert at a vertex that does not lie on
    /// the boundary of the given face.
    VertexNotOnFace { vertex: usize, face: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TestAlreadyRun => {
                write!(f, "planarity test has already been executed")
            }
            Error::TestNotRun => {
                write!(f, "run the planarity test first")
            }
            Error::AlreadyEmbedded => {
                write!(f, "embeddings were already calculated for this instance")
            }
            Error::NotPlanarGraph => {
                write!(f, "cannot calculate an embedding for a non-planar graph")
            }
            Error::SelfLoop { vertex } => {
                write!(f, "self-loop at vertex {}", vertex)
            }
            Error::ParallelEdge { source, target } => {
                write!(f, "parallel edge between {} and {}", source, target)
            }
            Error::InvalidKeyRange { min, max } => {
                write!(f, "invalid sort key range [{}, {}]", min, max)
            }
            Error::KeyOutOfRange { key, min, max } => {
                write!(f, "sort key {} outside range [{}, {}]", key, min, max)
            }
            Error::Alloc(e) => {
                write!(f, "allocation failure in counting sort: {}", e)
            }
            Error::NotATriangulation => {
                write!(f, "canonical order requires a triangulated embedding")
            }
            Error::NonSimpleFace { face } => {
                write!(f, "face {} repeats an edge on its boundary", face)
            }
            Error::VertexNotOnFace { vertex, face } => {
                write!(f, "vertex {} is not on the boundary of face {}", vertex, face)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::Alloc(e)
    }
}
