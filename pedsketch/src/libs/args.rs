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

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct PedigreeArgs {
    /// Input table, use - for stdin
    pub file: PathBuf,

    /// Output file, use - for stdout
    #[cfg_attr(feature = "clap", arg(short = 'o', long, default_value_os_t = PathBuf::from("-"), value_hint = clap::ValueHint::FilePath))]
    pub output: PathBuf,

    #[cfg_attr(feature = "clap", arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Dot))]
    pub format: OutputFormat,

    /// Normalize relatedness to [0,1] instead of treating negative values as unrelated
    #[cfg_attr(feature = "clap", arg(long))]
    pub normalize: bool,

    /// Max relational distance to incorporate
    #[cfg_attr(feature = "clap", arg(short = 'm', long))]
    pub max_distance: Option<u32>,

    /// Keep individuals without any related partner in the pedigree
    #[cfg_attr(feature = "clap", arg(long))]
    pub keep_unrelated: bool,

    /// Number of shortest paths kept between each pair of known individuals
    #[cfg_attr(feature = "clap", arg(short = 'k', long, default_value_t = 10))]
    pub k_paths: usize,

    /// Only connect a pair through the unknown individuals inferred for that pair
    #[cfg_attr(feature = "clap", arg(long))]
    pub isolate_pairs: bool,
}

impl Default for PedigreeArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            output: PathBuf::from("-"),
            format: OutputFormat::Dot,
            normalize: false,
            max_distance: None,
            keep_unrelated: false,
            k_paths: 10,
            isolate_pairs: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    /// Graphviz DOT
    Dot,
    /// Edge list with the columns indv1,indv2
    Csv,
    /// Individuals and relationships as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::Dot => write!(f, "dot"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}
