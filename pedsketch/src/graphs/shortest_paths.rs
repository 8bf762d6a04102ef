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

use std::cmp::Ordering;
use std::collections::HashSet;

use petgraph::algo::astar;
use petgraph::stable_graph::{EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::{EdgeFiltered, EdgeRef};

use super::relation_graph::{Individual, RelationGraph};

/// A path between two individuals and the weights of its edges
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    pub individuals: Vec<Individual>,
    pub weights: Vec<f64>,
}

impl WeightedPath {
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn names(&self) -> Vec<&str> {
        self.individuals.iter().map(Individual::name).collect()
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    nodes: Vec<NodeIndex>,
    edges: Vec<EdgeIndex>,
    cost: f64,
}

impl RelationGraph {
    /// Up to `k` shortest simple paths between two individuals ranked by ascending total weight
    /// (Yen's algorithm). The search stops at `k` accepted paths; candidates of equal weight are
    /// accepted and returned in order of their sequence of names. Individuals matching
    /// `excluded` are never visited, unless they are an endpoint.
    ///
    /// Returns no paths when either endpoint is absent or they are not connected.
    pub fn k_shortest_paths<F>(
        &self,
        from: &str,
        to: &str,
        k: usize,
        excluded: F,
    ) -> Vec<WeightedPath>
    where
        F: Fn(&Individual) -> bool,
    {
        let (Some(&source), Some(&target)) = (self.index.get(from), self.index.get(to)) else {
            return vec![];
        };
        if k == 0 || source == target {
            return vec![];
        }

        let banned: HashSet<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|idx| *idx != source && *idx != target && excluded(&self.graph[*idx]))
            .collect();

        let Some(shortest) = self.shortest_path(source, target, &banned, &HashSet::new()) else {
            return vec![];
        };

        let mut accepted = vec![shortest];
        let mut candidates: Vec<Candidate> = vec![];

        while accepted.len() < k {
            let previous = accepted[accepted.len() - 1].clone();
            self.push_deviations(&previous, &accepted, &mut candidates, target, &banned);

            let Some(best) = (0..candidates.len())
                .min_by(|a, b| self.rank(&candidates[*a], &candidates[*b]))
            else {
                break;
            };

            accepted.push(candidates.swap_remove(best));
        }

        accepted.sort_by(|a, b| self.rank(a, b));

        accepted
            .into_iter()
            .map(|path| self.weighted_path(&path))
            .collect()
    }

    /// Spur from every node of `previous` and add the new paths to `candidates`
    fn push_deviations(
        &self,
        previous: &Candidate,
        accepted: &[Candidate],
        candidates: &mut Vec<Candidate>,
        target: NodeIndex,
        banned: &HashSet<NodeIndex>,
    ) {
        for i in 0..previous.edges.len() {
            let spur = previous.nodes[i];
            let root = &previous.nodes[..=i];

            // Edges leaving the spur node along already accepted paths sharing this root
            let banned_edges: HashSet<EdgeIndex> = accepted
                .iter()
                .filter(|path| path.edges.len() > i && path.nodes[..=i] == *root)
                .map(|path| path.edges[i])
                .collect();

            let mut banned_nodes = banned.clone();
            banned_nodes.extend(root[..i].iter().copied());

            let Some(spur_path) = self.shortest_path(spur, target, &banned_nodes, &banned_edges) else {
                continue;
            };

            let mut nodes = root[..i].to_vec();
            nodes.extend(spur_path.nodes);
            let mut edges = previous.edges[..i].to_vec();
            edges.extend(spur_path.edges);

            if accepted
                .iter()
                .chain(candidates.iter())
                .any(|path| path.edges == edges)
            {
                continue;
            }

            let cost = self.path_cost(&edges);
            candidates.push(Candidate { nodes, edges, cost });
        }
    }

    /// Lightest path from `source` to `target` avoiding the banned individuals and edges
    fn shortest_path(
        &self,
        source: NodeIndex,
        target: NodeIndex,
        banned_nodes: &HashSet<NodeIndex>,
        banned_edges: &HashSet<EdgeIndex>,
    ) -> Option<Candidate> {
        let allowed = EdgeFiltered::from_fn(&self.graph, |edge: EdgeReference<f64>| {
            !banned_edges.contains(&edge.id())
                && !banned_nodes.contains(&edge.source())
                && !banned_nodes.contains(&edge.target())
        });

        let (_, nodes) = astar(&allowed, source, |node| node == target, |edge| *edge.weight(), |_| 0.0)?;

        let edges = nodes
            .windows(2)
            .map(|pair| self.graph.find_edge(pair[0], pair[1]))
            .collect::<Option<Vec<EdgeIndex>>>()?;
        let cost = self.path_cost(&edges);

        Some(Candidate { nodes, edges, cost })
    }

    fn path_cost(&self, edges: &[EdgeIndex]) -> f64 {
        edges.iter().map(|edge| self.graph[*edge]).sum()
    }

    fn rank(&self, a: &Candidate, b: &Candidate) -> Ordering {
        a.cost.total_cmp(&b.cost).then_with(|| {
            let a_names = a.nodes.iter().map(|idx| self.graph[*idx].name());
            let b_names = b.nodes.iter().map(|idx| self.graph[*idx].name());
            a_names.cmp(b_names)
        })
    }

    fn weighted_path(&self, path: &Candidate) -> WeightedPath {
        WeightedPath {
            individuals: path
                .nodes
                .iter()
                .map(|idx| self.graph[*idx].clone())
                .collect(),
            weights: path.edges.iter().map(|edge| self.graph[*edge]).collect(),
        }
    }
}
