use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A component node keyed by its `bom-ref`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Document-unique reference (`bom-ref`)
    pub reference: String,

    /// Display label: `name (version)`, or `ROOT: name` for the root
    pub label: String,

    /// Component name
    pub name: String,

    /// Component version, when the document carries one
    pub version: Option<String>,

    /// Package URL, when the document carries one
    pub purl: Option<String>,

    /// Whether this is the document's metadata root component
    pub is_root: bool,
}

/// Dependency graph of one SBOM document
pub struct DependencyGraph {
    /// Directed graph (component -> component it depends on)
    pub graph: DiGraph<ComponentNode, ()>,

    /// bom-ref -> NodeIndex mapping for fast lookup
    ref_index: HashMap<String, NodeIndex>,

    /// dependsOn entries dropped because an endpoint was undefined
    pub dangling_edges: usize,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            ref_index: HashMap::new(),
            dangling_edges: 0,
        }
    }

    /// Add a component node.
    ///
    /// A later definition of the same `bom-ref` replaces the earlier node's
    /// data but keeps its index and edges.
    pub fn add_component(&mut self, node: ComponentNode) -> NodeIndex {
        if let Some(&idx) = self.ref_index.get(&node.reference) {
            self.graph[idx] = node;
            return idx;
        }

        let reference = node.reference.clone();
        let idx = self.graph.add_node(node);
        self.ref_index.insert(reference, idx);
        idx
    }

    /// Add a dependency edge.
    ///
    /// The edge is only added when both endpoints are defined components;
    /// dangling references are counted instead.
    pub fn add_dependency(&mut self, from_ref: &str, to_ref: &str) -> bool {
        match (self.find(from_ref), self.find(to_ref)) {
            (Some(from), Some(to)) => {
                self.graph.add_edge(from, to, ());
                true
            }
            _ => {
                log::debug!("Skipping dangling dependency {from_ref} -> {to_ref}");
                self.dangling_edges += 1;
                false
            }
        }
    }

    /// Find a node by its `bom-ref`
    #[must_use]
    pub fn find(&self, reference: &str) -> Option<NodeIndex> {
        self.ref_index.get(reference).copied()
    }

    /// The metadata root component, when the document had one
    #[must_use]
    pub fn root(&self) -> Option<&ComponentNode> {
        self.graph.node_weights().find(|node| node.is_root)
    }

    /// All component nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ComponentNode> {
        self.graph.node_weights()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
