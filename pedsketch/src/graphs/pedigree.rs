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

use color_eyre::Result;
use indexmap::IndexSet;
use serde::Serialize;

use crate::graphs::relation_graph::RelationGraph;

const GRAPH_ATTRS: [(&str, &str); 4] = [
    ("rankdir", "TB"),
    ("splines", "ortho"),
    ("ratio", "auto"),
    ("mincross", "2.0"),
];

const NODE_ATTRS: &str = "fontname=Sans, shape=record";

/// Receives the individuals and relationships of a pedigree
pub trait PedigreeSink {
    fn add_individual(&mut self, name: &str);
    fn add_relationship(&mut self, indv1: &str, indv2: &str);
}

/// Hand every edge of the graph to the sink, registering both individuals before the edge.
/// Individuals left without any relationship follow the edges.
pub fn emit_pedigree<S: PedigreeSink>(graph: &RelationGraph, sink: &mut S) {
    for (indv1, indv2, _) in graph.weighted_edges() {
        sink.add_individual(indv1.name());
        sink.add_individual(indv2.name());
        sink.add_relationship(indv1.name(), indv2.name());
    }

    for individual in graph.nodes() {
        if graph.neighbors(individual.name()).is_empty() {
            sink.add_individual(individual.name());
        }
    }
}

/// Undirected pedigree sketch, individuals and relationships in emission order
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Pedigree {
    pub nodes: IndexSet<String>,
    pub edges: Vec<(String, String)>,
}

impl PedigreeSink for Pedigree {
    fn add_individual(&mut self, name: &str) {
        if !self.nodes.contains(name) {
            self.nodes.insert(name.to_string());
        }
    }

    fn add_relationship(&mut self, indv1: &str, indv2: &str) {
        self.edges.push((indv1.to_string(), indv2.to_string()));
    }
}

impl Pedigree {
    pub fn from_graph(graph: &RelationGraph) -> Self {
        let mut pedigree = Self::default();
        emit_pedigree(graph, &mut pedigree);
        pedigree
    }

    /// Graphviz representation
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph pedigree {\n");

        for (attr, value) in GRAPH_ATTRS {
            dot.push_str(&format!("\t{attr}={value};\n"));
        }

        for node in &self.nodes {
            dot.push_str(&format!("\t{} [{NODE_ATTRS}];\n", quote_id(node)));
        }

        for (indv1, indv2) in &self.edges {
            dot.push_str(&format!("\t{} -- {};\n", quote_id(indv1), quote_id(indv2)));
        }

        dot.push_str("}\n");
        dot
    }

    pub fn write_csv<W: std::io::Write>(&self, mut writer: csv::Writer<W>) -> Result<()> {
        writer.write_record(["indv1", "indv2"])?;

        for (indv1, indv2) in &self.edges {
            writer.write_record([indv1, indv2])?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn quote_id(id: &str) -> String {
    format!("\"{}\"", id.replace('"', "\\\""))
}
