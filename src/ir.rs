//! Activity-diagram IR: node kinds and the control-flow graph they form.
//!
//! The graph is append-only. Emitters number nodes `N0..Nk` by insertion
//! order, so indices must stay stable; nothing is ever removed.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// UML activity node kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "lowercase")]
pub enum ActivityNode {
    Initial,
    Final,
    Action(String),
    Decision(String),
    Merge,
}

/// Branch label on an edge leaving a decision node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeLabel {
    Yes,
    No,
}

impl EdgeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeLabel::Yes => "yes",
            EdgeLabel::No => "no",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type NodeId = NodeIndex;

/// Control-flow graph for one function, as an activity diagram.
#[derive(Debug, Clone, Default)]
pub struct ActivityGraph {
    graph: DiGraph<ActivityNode, Option<EdgeLabel>>,
}

impl ActivityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: ActivityNode) -> NodeId {
        self.graph.add_node(node)
    }

    pub fn link(&mut self, from: NodeId, to: NodeId) {
        self.graph.add_edge(from, to, None);
    }

    pub fn link_labeled(&mut self, from: NodeId, to: NodeId, label: EdgeLabel) {
        self.graph.add_edge(from, to, Some(label));
    }

    pub fn link_opt(&mut self, from: NodeId, to: NodeId, label: Option<EdgeLabel>) {
        self.graph.add_edge(from, to, label);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes with their ordinal, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, &ActivityNode)> + '_ {
        self.graph.node_indices().map(|i| (i.index(), &self.graph[i]))
    }

    /// Edges as `(from, to, label)` ordinal triples, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Option<EdgeLabel>)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Serializable view of the graph, used by the JSON emitter.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().map(|(_, n)| n.clone()).collect(),
            edges: self
                .edges()
                .map(|(from, to, label)| EdgeSnapshot { from, to, label })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<ActivityNode>,
    pub edges: Vec<EdgeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub from: usize,
    pub to: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<EdgeLabel>,
}
