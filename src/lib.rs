pub mod error;
pub mod graph;
pub mod mst;
pub mod weight;
pub(crate) mod binary_minheap;

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::sync::Arc;

use crate::graph::CsrGraph;

/// File extension of edge list files
pub const GRAPH_FILE_EXT: &str = ".edges";

/// Load all available graphs from `graphs_path`.
/// Returns a `HashMap` with entries that allow to access shared references to the graphs
/// by their respective names if the operation succeeds, or an `Err` otherwise.
pub fn load_graphs(graphs_path: &str) -> Result<HashMap<String, Arc<CsrGraph<f64>>>, Box<dyn Error>> {
    // Collect names and paths of files containing graphs
    let mut graph_data = Vec::new();
    for entry in fs::read_dir(graphs_path)? {
        let path = entry?.path();
        let graph_name = match path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(GRAPH_FILE_EXT)) {
            Some(graph_name) => graph_name.to_string(),
            None => continue
        };
        match path.to_str() {
            Some(graph_path) => graph_data.push((graph_name, graph_path.to_string())),
            None => log::warn!("Skipping graph with invalid unicode path: {}", graph_name)
        }
    }

    // Parse and load graphs into a map
    let mut graphs = HashMap::with_capacity(graph_data.len());
    for (graph_name, graph_path) in graph_data {
        match CsrGraph::parse_from_file(&graph_path) {
            Ok(graph) => {
                log::info!("Loaded graph: {}", &graph_name);
                graphs.insert(graph_name, Arc::new(graph));
            }
            Err(err) => {
                log::warn!("Failed to parse graph: {}", &graph_name);
                return Err(err.into());
            }
        };
    }

    Ok(graphs)
}
