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

//! GML text export of a drawn embedding.
//!
//! Reads only the drawing view of the model: vertex positions, colors
//! and labels, edge endpoints, labels and draw flags.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::embedding::{Color, Embedding};

// grid-to-GML coordinate scaling
const STRETCH_FACTOR_X: i64 = 60;
const STRETCH_FACTOR_Y: i64 = 80;

const FILL_SET_A: &str = "#0000FF";
const FILL_SET_B: &str = "#FF0000";
const FILL_CROSSING: &str = "#D228C2";

/// Writes the embedding as a GML file. An existing file is overwritten.
pub fn write_gml<P: AsRef<Path>>(embedding: &Embedding, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_gml_to(embedding, &mut out)?;
    out.flush()
}

/// Writes the embedding as GML to any writer.
pub fn write_gml_to<W: Write>(embedding: &Embedding, out: &mut W) -> io::Result<()> {
    writeln!(out, "graph")?;
    writeln!(out, "[")?;
    writeln!(out, "\thierarchic\t1")?;
    writeln!(out, "\tlabel\t\"\"")?;
    writeln!(out, "\tdirected\t1")?;

    for (id, vertex) in embedding.vertices.iter().enumerate() {
        let fill = match vertex.color {
            Color::SetB => FILL_SET_B,
            Color::Crossing => FILL_CROSSING,
            _ => FILL_SET_A,
        };
        writeln!(out, "\tnode")?;
        writeln!(out, "\t[")?;
        writeln!(out, "\t\tid\t{}", id)?;
        writeln!(out, "\t\tlabel\t\"{}\"", vertex.label)?;
        writeln!(out, "\t\tgraphics")?;
        writeln!(out, "\t\t[")?;
        writeln!(out, "\t\t\tx\t{}", vertex.x * STRETCH_FACTOR_X)?;
        writeln!(out, "\t\t\ty\t{}", vertex.y * STRETCH_FACTOR_Y)?;
        writeln!(out, "\t\t\tw\t30.0")?;
        writeln!(out, "\t\t\th\t15.0")?;
        writeln!(out, "\t\t\ttype\t\"ellipse\"")?;
        writeln!(out, "\t\t\traisedBorder\t0")?;
        writeln!(out, "\t\t\tfill\t\"{}\"", fill)?;
        writeln!(out, "\t\t\toutline\t\"#000000\"")?;
        writeln!(out, "\t\t]")?;
        writeln!(out, "\t\tLabelGraphics")?;
        writeln!(out, "\t\t[")?;
        writeln!(out, "\t\t\ttext\t\"{}\"", vertex.label)?;
        writeln!(out, "\t\t\tcolor\t\"#FFFFFF\"")?;
        writeln!(out, "\t\t\tfontSize\t12")?;
        writeln!(out, "\t\t\tfontName\t\"Dialog\"")?;
        writeln!(out, "\t\t\tanchor\t\"c\"")?;
        writeln!(out, "\t\t]")?;
        writeln!(out, "\t]")?;
    }

    for (id, edge) in embedding.half_edges.iter().enumerate() {
        if !edge.to_draw {
            continue;
        }
        writeln!(out, "\tedge")?;
        writeln!(out, "\t[")?;
        writeln!(out, "\t\tsource\t{}", embedding.source(id))?;
        writeln!(out, "\t\ttarget\t{}", edge.target)?;
        writeln!(out, "\t\tgraphics")?;
        writeln!(out, "\t\t[")?;
        writeln!(out, "\t\t\tfill\t\"#000000\"")?;
        writeln!(out, "\t\t]")?;
        writeln!(out, "\t\tLabelGraphics")?;
        writeln!(out, "\t\t[")?;
        writeln!(out, "\t\t\ttext\t\"{}\"", edge.label)?;
        writeln!(out, "\t\t\tfill\t\"#FFFFFF\"")?;
        writeln!(out, "\t\t\tfontSize\t12")?;
        writeln!(out, "\t\t\tfontName\t\"Dialog\"")?;
        writeln!(out, "\t\t\tconfiguration\t\"AutoFlippingLabel\"")?;
        writeln!(out, "\t\t\tcontentWidth\t36")?;
        writeln!(out, "\t\t\tcontentHeight\t20")?;
        writeln!(out, "\t\t\tmodel\t\"centered\"")?;
        writeln!(out, "\t\t\tposition\t\"center\"")?;
        writeln!(out, "\t\t]")?;
        writeln!(out, "\t]")?;
    }

    writeln!(out, "]")
}
