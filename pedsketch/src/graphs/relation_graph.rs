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

use std::collections::HashSet;

use indexmap::IndexMap;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// An individual named in the input table
    Known(String),
    /// A placeholder for an unsampled ancestor, created for the pair of knowns it connects
    Unknown { name: String, pair: (String, String) },
}

impl Individual {
    pub fn known(name: impl Into<String>) -> Self {
        Self::Known(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Known(name) | Self::Unknown { name, .. } => name,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// True for unknowns inserted between `indv1` and `indv2`, in either order
    pub fn created_for(&self, indv1: &str, indv2: &str) -> bool {
        match self {
            Self::Known(_) => false,
            Self::Unknown { pair: (a, b), .. } => {
                (a == indv1 && b == indv2) || (a == indv2 && b == indv1)
            }
        }
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Hands out names for unknown individuals. A name is never repeated and never collides with a
/// reserved (known) name.
#[derive(Debug, Default, Clone)]
pub struct UnknownNamer {
    counter: u64,
    reserved: HashSet<String>,
}

impl UnknownNamer {
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            counter: 0,
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    pub fn next_name(&mut self) -> String {
        loop {
            self.counter += 1;
            let name = format!("Unknown{}", self.counter);
            if !self.reserved.contains(&name) {
                return name;
            }
        }
    }
}

/// Individuals live in a stable node arena, `index` maps names to their slots in insertion order.
/// Removing a node drops its slot and its index entry together.
#[derive(Debug, Default, Clone)]
pub struct RelationGraph {
    pub(crate) graph: StableUnGraph<Individual, f64>,
    pub(crate) index: IndexMap<String, NodeIndex>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an individual. Adding a name that is already present is a no-op.
    pub fn add_node(&mut self, individual: Individual) -> NodeIndex {
        if let Some(idx) = self.index.get(individual.name()) {
            return *idx;
        }
        let name = individual.name().to_string();
        let idx = self.graph.add_node(individual);
        self.index.insert(name, idx);
        idx
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn slot(&self, name: &str) -> NodeIndex {
        match self.index.get(name) {
            Some(idx) => *idx,
            None => panic!("Individual {name:?} has not been added to the graph"),
        }
    }

    /// Create or overwrite the single edge between two registered individuals
    pub fn add_weighted_edge(&mut self, indv1: &str, indv2: &str, weight: f64) {
        assert!(
            weight > 0.0,
            "Edge {indv1} -- {indv2} needs a positive weight, got {weight}"
        );
        let (a, b) = (self.slot(indv1), self.slot(indv2));
        self.graph.update_edge(a, b, weight);
    }

    /// Add every individual of the path and an edge with the matching weight between each
    /// consecutive pair
    pub fn add_path(&mut self, individuals: &[Individual], weights: &[f64]) {
        assert!(
            !individuals.is_empty() && weights.len() == individuals.len() - 1,
            "Weights along a path should be one less than individuals along the path ({} individuals, {} weights)",
            individuals.len(),
            weights.len()
        );

        for individual in individuals {
            self.add_node(individual.clone());
        }

        for (pair, weight) in individuals.windows(2).zip(weights) {
            self.add_weighted_edge(pair[0].name(), pair[1].name(), *weight);
        }
    }

    /// Join two known individuals through `distance - 1` new unknowns. Each of the `distance`
    /// edges carries an equal share of the relatedness.
    pub fn add_unknown_path(
        &mut self,
        indv1: &str,
        indv2: &str,
        distance: u32,
        relatedness: f64,
        namer: &mut UnknownNamer,
    ) {
        assert!(distance >= 1, "Relational distance must be at least one");

        let pair = (indv1.to_string(), indv2.to_string());
        let mut path = Vec::with_capacity(distance as usize + 1);
        path.push(Individual::known(indv1));

        for _ in 1..distance {
            let mut name = namer.next_name();
            while self.contains(&name) {
                name = namer.next_name();
            }
            path.push(Individual::Unknown {
                name,
                pair: pair.clone(),
            });
        }
        path.push(Individual::known(indv2));

        let weights = vec![relatedness / f64::from(distance); distance as usize];
        self.add_path(&path, &weights);
    }

    /// Remove every individual without neighbours and return their names
    pub fn remove_disconnected_nodes(&mut self) -> Vec<String> {
        let disconnected: Vec<(String, NodeIndex)> = self
            .index
            .iter()
            .filter(|(_, idx)| self.graph.neighbors(**idx).next().is_none())
            .map(|(name, idx)| (name.clone(), *idx))
            .collect();

        for (name, idx) in &disconnected {
            self.graph.remove_node(*idx);
            self.index.shift_remove(name);
        }

        disconnected.into_iter().map(|(name, _)| name).collect()
    }

    /// Neighbours of an individual, empty if the individual is not in the graph
    pub fn neighbors(&self, name: &str) -> Vec<&Individual> {
        match self.index.get(name) {
            Some(idx) => self.graph.neighbors(*idx).map(|n| &self.graph[n]).collect(),
            None => vec![],
        }
    }

    pub fn weighted_edge(&self, indv1: &str, indv2: &str) -> Option<f64> {
        let (a, b) = (self.index.get(indv1)?, self.index.get(indv2)?);
        self.graph.find_edge(*a, *b).map(|edge| self.graph[edge])
    }

    /// Individuals in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Individual> {
        self.index.values().map(|idx| &self.graph[*idx])
    }

    pub fn known_individuals(&self) -> impl Iterator<Item = &Individual> {
        self.nodes().filter(|individual| individual.is_known())
    }

    /// Edges in insertion order
    pub fn weighted_edges(&self) -> Vec<(&Individual, &Individual, f64)> {
        self.graph
            .edge_indices()
            .filter_map(|edge| {
                let (a, b) = self.graph.edge_endpoints(edge)?;
                Some((&self.graph[a], &self.graph[b], self.graph[edge]))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;

    fn unknown(name: &str) -> Individual {
        Individual::Unknown { name: name.to_string(), pair: (String::from("A"), String::from("B")) }
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = RelationGraph::new();
        let first = g.add_node(Individual::known("A"));
        let second = g.add_node(Individual::known("A"));
        assert_eq!(first, second);
        assert_eq!(1, g.node_count());
        assert!(g.contains("A"));
        assert!(!g.contains("B"));
        assert_eq!(None, g.weighted_edge("A", "B"));
        assert!(g.neighbors("B").is_empty());
    }

    #[test]
    fn edges_are_overwritten_not_duplicated() {
        let mut g = RelationGraph::new();
        g.add_node(Individual::known("A"));
        g.add_node(Individual::known("B"));
        g.add_weighted_edge("A", "B", 0.5);
        g.add_weighted_edge("B", "A", 0.25);

        assert_eq!(1, g.edge_count());
        assert_eq!(Some(0.25), g.weighted_edge("A", "B"));
        assert_eq!(Some(0.25), g.weighted_edge("B", "A"));
    }

    #[test]
    #[should_panic(expected = "has not been added")]
    fn edge_to_unregistered_individual_panics() {
        let mut g = RelationGraph::new();
        g.add_node(Individual::known("A"));
        g.add_weighted_edge("A", "B", 0.5);
    }

    #[test]
    #[should_panic(expected = "one less")]
    fn path_with_mismatched_weights_panics() {
        let mut g = RelationGraph::new();
        g.add_path(&[Individual::known("A"), Individual::known("B")], &[0.5, 0.5]);
    }

    #[test]
    fn add_path_registers_nodes_and_edges() {
        let mut g = RelationGraph::new();
        let path = [Individual::known("A"), unknown("Unknown1"), Individual::known("B")];
        g.add_path(&path, &[0.1, 0.2]);

        assert_eq!(3, g.node_count());
        assert_eq!(2, g.edge_count());
        assert_eq!(Some(0.1), g.weighted_edge("A", "Unknown1"));
        assert_eq!(Some(0.2), g.weighted_edge("Unknown1", "B"));
        assert_eq!(None, g.weighted_edge("A", "B"));
        assert_eq!(vec!["A", "Unknown1", "B"], g.nodes().map(Individual::name).collect::<Vec<_>>());
        assert_eq!(vec!["A", "B"], g.known_individuals().map(Individual::name).collect::<Vec<_>>());
    }

    #[test]
    fn unknown_path_splits_relatedness() {
        let mut namer = UnknownNamer::default();

        for distance in 1..=6 {
            let mut g = RelationGraph::new();
            g.add_unknown_path("A", "B", distance, 0.3, &mut namer);

            assert_eq!(distance as usize, g.edge_count());
            assert_eq!(distance as usize - 1, g.nodes().filter(|i| !i.is_known()).count());

            let total: f64 = g.weighted_edges().iter().map(|(_, _, w)| w).sum();
            assert!((total - 0.3).abs() < 1e-12);
            for (_, _, w) in g.weighted_edges() {
                assert!((w - 0.3 / f64::from(distance)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn unknown_path_of_distance_one_is_a_direct_edge() {
        let mut g = RelationGraph::new();
        g.add_unknown_path("A", "B", 1, 0.5, &mut UnknownNamer::default());
        assert_eq!(2, g.node_count());
        assert_eq!(Some(0.5), g.weighted_edge("A", "B"));
    }

    #[test]
    fn unknowns_remember_their_pair() {
        let mut g = RelationGraph::new();
        g.add_unknown_path("A", "B", 2, 0.25, &mut UnknownNamer::default());
        let unknown = g.nodes().find(|i| !i.is_known()).unwrap();

        assert!(unknown.created_for("A", "B"));
        assert!(unknown.created_for("B", "A"));
        assert!(!unknown.created_for("A", "C"));
        assert!(!Individual::known("A").created_for("A", "B"));
    }

    #[test]
    fn parallel_unknown_paths_never_share_names() {
        let mut g = RelationGraph::new();
        let mut namer = UnknownNamer::default();
        g.add_unknown_path("A", "B", 3, 0.125, &mut namer);
        g.add_unknown_path("A", "B", 3, 0.125, &mut namer);

        assert_eq!(6, g.node_count());
        assert_eq!(6, g.edge_count());
        assert_eq!(2, g.neighbors("A").len());
    }

    #[test]
    fn namer_skips_reserved_names() {
        let mut namer = UnknownNamer::new(["Unknown1", "Unknown3"]);
        assert_eq!("Unknown2", namer.next_name());
        assert_eq!("Unknown4", namer.next_name());
        assert_eq!("Unknown5", namer.next_name());
    }

    #[test]
    fn unknown_names_avoid_registered_individuals() {
        let mut g = RelationGraph::new();
        g.add_node(Individual::known("Unknown1"));
        g.add_unknown_path("A", "B", 2, 0.25, &mut UnknownNamer::default());

        assert!(g.contains("Unknown2"));
        assert!(g.weighted_edge("A", "Unknown2").is_some());
        assert!(g.neighbors("Unknown1").is_empty());
    }

    #[test]
    fn remove_disconnected_nodes() {
        let mut g = RelationGraph::new();
        g.add_node(Individual::known("lonely"));
        g.add_unknown_path("A", "B", 2, 0.25, &mut UnknownNamer::default());
        g.add_node(Individual::known("C"));

        let removed = g.remove_disconnected_nodes();

        assert_eq!(vec!["lonely", "C"], removed);
        assert!(!g.contains("lonely"));
        assert!(!g.contains("C"));
        assert_eq!(3, g.node_count());
        assert_eq!(2, g.edge_count());
        assert_eq!(vec!["A", "Unknown1", "B"], g.nodes().map(Individual::name).collect::<Vec<_>>());

        assert!(g.remove_disconnected_nodes().is_empty());
    }

    #[test]
    fn weighted_edges_follow_insertion_order() {
        let mut g = RelationGraph::new();
        let mut namer = UnknownNamer::default();
        g.add_unknown_path("A", "B", 1, 0.5, &mut namer);
        g.add_unknown_path("A", "C", 2, 0.25, &mut namer);

        let edges: Vec<(&str, &str)> = g.weighted_edges().iter().map(|(a, b, _)| (a.name(), b.name())).collect();
        assert_eq!(vec![("A", "B"), ("A", "Unknown1"), ("Unknown1", "C")], edges);
    }
}
