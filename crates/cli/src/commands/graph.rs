use anyhow::{Context, Result};
use sbomscout_graph::load_dependency_graph;
use std::fs;
use std::path::Path;

use crate::flags::GraphFormat;

pub(crate) fn run(file: &Path, format: GraphFormat, out: Option<&Path>) -> Result<()> {
    let graph = load_dependency_graph(file)
        .with_context(|| format!("graphing {}", file.display()))?;

    if graph.dangling_edges > 0 {
        log::warn!(
            "{} dependsOn entries referenced undefined components",
            graph.dangling_edges
        );
    }

    let rendered = match format {
        GraphFormat::Dot => graph.to_dot(),
        GraphFormat::Json => serde_json::to_string_pretty(&graph.export())?,
    };

    match out {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
