//! Directed link-graph projection over a vault's notes.
//!
//! Advisory navigation aid: nodes are note titles (unresolved link targets
//! included, since the note may be created later), edges are extracted
//! references. Rendered as Graphviz DOT for external tooling.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::index::StoredLink;

/// In-memory graph of note relationships.
pub struct LinkGraph {
    graph: DiGraph<String, &'static str>,
    nodes: HashMap<String, NodeIndex>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self { graph: DiGraph::new(), nodes: HashMap::new() }
    }

    /// Build a vault's graph from its indexed titles and stored edges.
    pub fn from_vault(titles: &[String], edges: &[StoredLink]) -> Self {
        let mut g = Self::new();
        for title in titles {
            g.add_note(title);
        }
        for edge in edges {
            g.add_link(&edge.source, &edge.target);
        }
        g
    }

    /// Ensure a node exists for the title. Idempotent.
    pub fn add_note(&mut self, title: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(title) {
            return idx;
        }
        let idx = self.graph.add_node(title.to_string());
        self.nodes.insert(title.to_string(), idx);
        idx
    }

    /// Add a directed edge, creating endpoints as needed.
    pub fn add_link(&mut self, from: &str, to: &str) {
        let from = self.add_note(from);
        let to = self.add_note(to);
        self.graph.add_edge(from, to, "");
    }

    pub fn note_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Render as Graphviz DOT.
    pub fn render_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }
}

impl Default for LinkGraph {
    fn default() -> Self {
        Self::new()
    }
}
