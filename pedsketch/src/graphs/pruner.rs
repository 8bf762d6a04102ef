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

use itertools::Itertools;
use rayon::prelude::*;

use crate::graphs::relation_graph::{Individual, RelationGraph};
use crate::graphs::shortest_paths::WeightedPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneConfig {
    /// Number of shortest paths kept between each pair of known individuals
    pub k_paths: usize,
    /// Only route a pair through the unknowns that were created for that pair
    pub isolate_pairs: bool,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            k_paths: 10,
            isolate_pairs: false,
        }
    }
}

/// Rebuild the graph from the `k_paths` shortest paths between every pair of known individuals.
///
/// Pairs are searched in parallel over the shared graph and merged in natural (alphanumeric)
/// order of the known names, so the result does not depend on the number of threads.
/// Known individuals without any neighbours are carried over as lone nodes.
pub fn prune_to_shortest(graph: &RelationGraph, config: &PruneConfig) -> RelationGraph {
    let knowns: Vec<&str> = graph
        .known_individuals()
        .map(Individual::name)
        .sorted_by(|a, b| alphanumeric_sort::compare_str(a, b))
        .collect();

    let pairs: Vec<(&str, &str)> = knowns.iter().copied().tuple_combinations().collect();

    tracing::info!(
        "Searching for {} shortest paths between {} pairs of known individuals",
        config.k_paths,
        pairs.len()
    );

    let paths: Vec<Vec<WeightedPath>> = pairs
        .par_iter()
        .map(|(indv1, indv2)| shortest_paths_for_pair(graph, indv1, indv2, config))
        .collect();

    let mut pruned = RelationGraph::new();
    for path in paths.iter().flatten() {
        pruned.add_path(&path.individuals, &path.weights);
    }

    for individual in graph.known_individuals() {
        if !pruned.contains(individual.name()) && graph.neighbors(individual.name()).is_empty() {
            pruned.add_node(individual.clone());
        }
    }

    tracing::info!(
        "Pruned {} individuals and {} edges down to {} individuals and {} edges",
        graph.node_count(),
        graph.edge_count(),
        pruned.node_count(),
        pruned.edge_count()
    );

    pruned
}

fn shortest_paths_for_pair(
    graph: &RelationGraph,
    indv1: &str,
    indv2: &str,
    config: &PruneConfig,
) -> Vec<WeightedPath> {
    let paths = match config.isolate_pairs {
        true => graph.k_shortest_paths(indv1, indv2, config.k_paths, |individual| {
            !individual.is_known() && !individual.created_for(indv1, indv2)
        }),
        false => graph.k_shortest_paths(indv1, indv2, config.k_paths, |_| false),
    };

    tracing::trace!("{} paths between {indv1} and {indv2}", paths.len());

    paths
}
