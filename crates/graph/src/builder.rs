use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::{ComponentNode, DependencyGraph};

/// Build a dependency graph from one parsed SBOM document.
///
/// Follows the CycloneDX field layout (`metadata.component`,
/// `components[]`, `dependencies[]`) but tolerates missing pieces: entries
/// without a usable `bom-ref` are skipped, and edges are only added between
/// components the document actually defines.
#[must_use]
pub fn build_dependency_graph(document: &Value) -> DependencyGraph {
    let mut graph = DependencyGraph::new();

    // Phase 1: nodes
    if let Some(component) = document.pointer("/metadata/component") {
        if let Some(node) = component_node(component, true) {
            graph.add_component(node);
        }
    }

    if let Some(components) = document.get("components").and_then(Value::as_array) {
        for component in components {
            match component_node(component, false) {
                Some(node) => {
                    graph.add_component(node);
                }
                None => log::debug!("Skipping component without bom-ref"),
            }
        }
    }

    // Phase 2: edges
    if let Some(dependencies) = document.get("dependencies").and_then(Value::as_array) {
        for dependency in dependencies {
            let Some(parent) = dependency.get("ref").and_then(Value::as_str) else {
                continue;
            };
            if let Some(children) = dependency.get("dependsOn").and_then(Value::as_array) {
                for child in children.iter().filter_map(Value::as_str) {
                    graph.add_dependency(parent, child);
                }
            }
        }
    }

    graph
}

/// Read, parse and graph one document from disk
pub fn load_dependency_graph(path: impl AsRef<Path>) -> Result<DependencyGraph> {
    let source = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&source)?;
    Ok(build_dependency_graph(&document))
}

fn component_node(component: &Value, is_root: bool) -> Option<ComponentNode> {
    let reference = component.get("bom-ref").and_then(Value::as_str)?.to_string();
    let name = component
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(if is_root { "Root" } else { "" })
        .to_string();
    let version = component
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string);
    let purl = component
        .get("purl")
        .and_then(Value::as_str)
        .map(str::to_string);

    let label = if is_root {
        format!("ROOT: {name}")
    } else {
        match &version {
            Some(version) => format!("{name} ({version})"),
            None => name.clone(),
        }
    };

    Some(ComponentNode {
        reference,
        label,
        name,
        version,
        purl,
        is_root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn cyclonedx_fixture() -> Value {
        json!({
            "metadata": {
                "component": {"bom-ref": "root", "name": "app", "version": "1.0"}
            },
            "components": [
                {"bom-ref": "pkg:foo", "name": "libfoo", "version": "1.0", "purl": "pkg:generic/libfoo@1.0"},
                {"bom-ref": "pkg:bar", "name": "libbar"},
                {"name": "no-ref-component"}
            ],
            "dependencies": [
                {"ref": "root", "dependsOn": ["pkg:foo", "pkg:bar"]},
                {"ref": "pkg:foo", "dependsOn": ["pkg:missing"]},
                {"dependsOn": ["pkg:foo"]}
            ]
        })
    }

    #[test]
    fn builds_nodes_and_edges_from_cyclonedx_layout() {
        let graph = build_dependency_graph(&cyclonedx_fixture());

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dangling_edges, 1);

        let root = graph.root().unwrap();
        assert_eq!(root.label, "ROOT: app");
        assert_eq!(root.reference, "root");

        let foo = graph.find("pkg:foo").unwrap();
        assert_eq!(graph.graph[foo].label, "libfoo (1.0)");
        assert_eq!(
            graph.graph[foo].purl.as_deref(),
            Some("pkg:generic/libfoo@1.0")
        );

        let bar = graph.find("pkg:bar").unwrap();
        assert_eq!(graph.graph[bar].label, "libbar");
    }

    #[test]
    fn documents_without_graph_fields_yield_empty_graphs() {
        let graph = build_dependency_graph(&json!({"name": "not-cyclonedx"}));
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn loads_documents_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("sbom.json");
        std::fs::write(&path, cyclonedx_fixture().to_string()).unwrap();

        let graph = load_dependency_graph(&path).unwrap();
        assert_eq!(graph.node_count(), 3);

        assert!(load_dependency_graph(temp.path().join("missing.json")).is_err());
    }
}
