//! # SBOM Scout Graph
//!
//! Dependency-graph construction for CycloneDX-shaped SBOM documents.
//!
//! Builds a directed [`petgraph`] graph of components keyed by `bom-ref`,
//! with the metadata root component flagged, and exports it as Graphviz DOT
//! or as plain node/edge lists for external interactive renderers. The
//! rendering itself stays outside this crate.

mod builder;
mod error;
mod export;
mod types;

pub use builder::{build_dependency_graph, load_dependency_graph};
pub use error::{GraphError, Result};
pub use export::{GraphEdge, GraphExport};
pub use types::{ComponentNode, DependencyGraph};
