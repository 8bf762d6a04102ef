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

use crate::graphs::relation_graph::{Individual, RelationGraph, UnknownNamer};
use crate::relatedness::RelatednessRow;

/// Turns related rows into chains of unknown individuals, one chain per row
#[derive(Debug, Clone)]
pub struct PathInflator {
    max_distance: u32,
    namer: UnknownNamer,
}

impl PathInflator {
    /// Every individual named in `rows` is reserved, so no unknown can take a known name
    pub fn new(max_distance: u32, rows: &[RelatednessRow]) -> Self {
        let reserved = rows
            .iter()
            .flat_map(|row| [row.indv1.as_str(), row.indv2.as_str()]);

        Self {
            max_distance,
            namer: UnknownNamer::new(reserved),
        }
    }

    pub fn inflate(&mut self, rows: &[RelatednessRow]) -> RelationGraph {
        let mut graph = RelationGraph::new();

        let ninflated = rows
            .iter()
            .filter(|row| self.insert_row(&mut graph, row))
            .count();

        tracing::info!(
            "Inflated {ninflated} of {} rows into {} individuals and {} edges",
            rows.len(),
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }

    /// Register both individuals and, if the row passes the filters, add its chain.
    /// Returns whether a chain was added.
    pub fn insert_row(&mut self, graph: &mut RelationGraph, row: &RelatednessRow) -> bool {
        graph.add_node(Individual::known(&row.indv1));
        graph.add_node(Individual::known(&row.indv2));

        let Some(distance) = self.accepted_distance(row) else {
            tracing::debug!(
                "Skipping {} -- {} with relatedness {}",
                row.indv1,
                row.indv2,
                row.relatedness
            );
            return false;
        };

        graph.add_unknown_path(
            &row.indv1,
            &row.indv2,
            distance,
            row.relatedness,
            &mut self.namer,
        );
        true
    }

    fn accepted_distance(&self, row: &RelatednessRow) -> Option<u32> {
        let distance = row.relational_distance()?;

        let accepted = distance > 0
            && distance <= self.max_distance
            && row.relatedness > 0.0
            && !row.is_self_pair();

        accepted.then_some(distance)
    }
}
