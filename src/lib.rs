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

//! pgar - planar graph algorithms in Rust.
//!
//! Decides planarity of undirected simple graphs with the Left-Right
//! planarity test, builds half-edge (DCEL) embeddings for planar ones,
//! and draws them as straight-line grid drawings via triangulation,
//! canonical ordering and the shift algorithm.
//!
//! ```
//! use pgar::{generate, LrPlanarity, Planarity};
//!
//! let mut test = LrPlanarity::new(generate::wheel(8));
//! assert_eq!(test.run().unwrap(), Planarity::Planar);
//! let embeddings = test.embeddings().unwrap();
//! assert_eq!(embeddings.len(), 1);
//! ```

pub mod drawing;
pub mod embedding;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod planarity;
pub mod sort;

pub use embedding::Embedding;
pub use error::Error;
pub use graph::Graph;
pub use planarity::{LrPlanarity, Planarity};
