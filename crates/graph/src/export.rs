use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::types::{ComponentNode, DependencyGraph};

/// Serializable node/edge lists for external renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<ComponentNode>,
    pub edges: Vec<GraphEdge>,

    /// dependsOn entries dropped because an endpoint was undefined
    pub dangling_edges: usize,
}

/// One `dependsOn` relation, by `bom-ref`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

impl DependencyGraph {
    /// Node and edge lists in insertion order
    #[must_use]
    pub fn export(&self) -> GraphExport {
        let nodes = self.graph.node_weights().cloned().collect();
        let edges = self
            .graph
            .edge_references()
            .map(|edge| GraphEdge {
                from: self.graph[edge.source()].reference.clone(),
                to: self.graph[edge.target()].reference.clone(),
            })
            .collect();

        GraphExport {
            nodes,
            edges,
            dangling_edges: self.dangling_edges,
        }
    }

    /// Graphviz DOT rendering with component labels
    #[must_use]
    pub fn to_dot(&self) -> String {
        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (_, node)| format!("label=\"{}\"", node.label.replace('"', "\\\"")),
        );
        format!("{dot:?}")
    }
}
