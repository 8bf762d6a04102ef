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

use color_eyre::{eyre::ensure, Result};

use crate::args::{OutputFormat, PedigreeArgs};
use crate::error::PedigreeError;
use crate::graphs::{prune_to_shortest, PathInflator, Pedigree, PruneConfig, RelationGraph};
use crate::io::write_pedigree;
use crate::relatedness::{prepare_relatedness, RelatednessRow};

/// Relational distance limit for coefficient tables
pub const DEFAULT_MAX_DISTANCE: u32 = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct PedigreeConfig {
    /// Rows further apart than this are dropped before inflation
    pub max_distance: u32,
    pub normalize: bool,
    pub remove_disconnected: bool,
    pub prune: PruneConfig,
}

impl Default for PedigreeConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            normalize: false,
            remove_disconnected: true,
            prune: PruneConfig::default(),
        }
    }
}

impl PedigreeConfig {
    pub fn from_args(args: &PedigreeArgs, default_max_distance: u32) -> Result<Self> {
        ensure!(args.k_paths >= 1, PedigreeError::ZeroPathsError);

        Ok(Self {
            max_distance: args.max_distance.unwrap_or(default_max_distance),
            normalize: args.normalize,
            remove_disconnected: !args.keep_unrelated,
            prune: PruneConfig {
                k_paths: args.k_paths,
                isolate_pairs: args.isolate_pairs,
            },
        })
    }
}

/// Encode, inflate, optionally drop disconnected individuals and prune
pub fn sketch_pedigree(mut rows: Vec<RelatednessRow>, config: &PedigreeConfig) -> RelationGraph {
    prepare_relatedness(&mut rows, config.normalize);

    let mut inflator = PathInflator::new(config.max_distance, &rows);
    let mut graph = inflator.inflate(&rows);

    if config.remove_disconnected {
        let removed = graph.remove_disconnected_nodes();
        tracing::info!("Removed {} individuals without related partners", removed.len());
        tracing::debug!("Removed individuals: {}", removed.join(", "));
    }

    prune_to_shortest(&graph, &config.prune)
}

#[doc(hidden)]
pub fn sketch_and_write(
    rows: Vec<RelatednessRow>,
    config: &PedigreeConfig,
    format: &OutputFormat,
    output: PathBuf,
) -> Result<()> {
    let graph = sketch_pedigree(rows, config);
    let pedigree = Pedigree::from_graph(&graph);

    tracing::info!(
        "Writing a pedigree of {} individuals and {} relationships as {format} to {output:?}",
        pedigree.nodes.len(),
        pedigree.edges.len()
    );

    write_pedigree(&pedigree, format, &output)
}
