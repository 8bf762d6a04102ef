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

/// Weighted, undirected graph of known and unknown individuals
pub mod relation_graph;

/// K shortest simple paths between two individuals
pub mod shortest_paths;

/// Chains of unknown individuals for every related pair
pub mod inflate;

/// Reduce the inflated graph to the shortest paths between known individuals
pub mod pruner;

/// Pedigree output
pub mod pedigree;

pub use inflate::PathInflator;
pub use pedigree::{emit_pedigree, Pedigree, PedigreeSink};
pub use pruner::{prune_to_shortest, PruneConfig};
pub use relation_graph::{Individual, RelationGraph, UnknownNamer};
pub use shortest_paths::WeightedPath;
