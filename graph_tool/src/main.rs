use std::env;

use csrmst_lib::graph::{EdgeList, ParseError};

/// Given arguments look like: "path/graphname.edges path/new_graphname.edges". Parses "graphname.edges",
/// which may hold directed or duplicated entries, creates an undirected graph and writes it in "new_graphname.edges".
fn main() -> Result<(), ParseError> {
    // Initialize logger
    env::set_var("RUST_LOG", "debug");
    env::set_var("RUST_BACKTRACE", "1");
    env_logger::init();

    let args: Vec<_> = env::args().collect();

    if args.len() < 3 {
        let err = "Missing argument: path to new undirected graph file";
        log::error!("{}", err);
        panic!("{}", err);
    }

    let in_graph = args[1].to_string();
    let out_graph = args[2].to_string();

    let graph = EdgeList::<f64>::parse_from_file(&in_graph)?;
    log::debug!("Parsed {} entries from {}", graph.entries.len(), &in_graph);

    let undirected = graph.symmetrize();
    let num_components = undirected.to_graph()?.num_components();
    log::debug!("Symmetrized graph has {} entries and {} component(s)",
                undirected.entries.len(), num_components);

    undirected.write_to_file(&out_graph)?;
    log::info!("Wrote undirected graph to {}", &out_graph);

    Ok(())
}
