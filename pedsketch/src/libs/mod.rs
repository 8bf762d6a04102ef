// PEDSKETCH - Pedigree sketches from pairwise relatedness
// Copyright (C) 2024  The PEDSKETCH authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//
//
//

//! PEDSKETCH - Pedigree sketches from pairwise relatedness
//!
//! This library and program turn a table of pairwise relatedness coefficients (or a categorical
//! ML-Relate export) into an undirected pedigree sketch. Every related pair is joined by a chain
//! of unknown individuals whose length is the inferred number of generations between them, after
//! which the graph is pruned down to the shortest relationship paths between known individuals.
//!
//! PEDSKETCH commands
//!
//! * Pedigree sketch from a relatedness coefficient table
//! * Pedigree sketch from an ML-Relate relationship table
//!
//! # Getting started
//!
//! ## Installing PEDSKETCH
//!
//! Rust and its package manager cargo can be installed following the instruction for [rustup](https://rustup.rs/).
//!
//! After installing cargo, run the following command
//!
//! ```bash
//! cargo install pedsketch
//! ```
//!
//! ## Running PEDSKETCH
//!
//! To print the available commands use:
//! ```bash
//! pedsketch --help
//! ```
//! A relatedness table with the columns `indv1,indv2,relatedness` is drawn into a Graphviz file with:
//! ```bash
//! pedsketch relatedness $file -o ${outdir}/pedigree.dot
//!
//! dot -Tpng ${outdir}/pedigree.dot > ${outdir}/pedigree.png
//! ```
//!
//! Negative estimators can be rescaled instead of being treated as unrelated:
//! ```bash
//! pedsketch relatedness $file --normalize --max-distance 5 -o ${outdir}/pedigree.dot
//!
//! pedsketch ml-relate $ml_relate_file --format csv -o ${outdir}/pedigree_edges.csv
//!```
//!

#[doc(hidden)]
pub mod args;

#[doc(hidden)]
pub mod io;

/// Relatedness coefficients, relational distances and ML-Relate codes
pub mod relatedness;

#[doc(hidden)]
pub mod error;

#[cfg(feature = "clap")]
pub mod clap;
