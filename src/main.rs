use std::{env, path::Path, process};

use serde::Serialize;

use csrmst_lib::graph::CsrGraph;
use csrmst_lib::mst::{mst_with_settings, MSTSettings, SpanningForest};

/// Result of one MST computation as printed to stdout
#[derive(Serialize)]
struct MSTResponse<'a> {
    graph_name: &'a str,
    num_nodes: usize,
    num_components: usize,
    settings: &'a MSTSettings,
    total_weight: f64,
    forest: SpanningForest<f64>,
}

/// Print usage information and exit with an error code
fn usage(err: &str) -> ! {
    log::error!("{}", err);
    eprintln!("Usage: csrmst --graph <file or directory> [--root <vertex>] [--full]");
    process::exit(2);
}

/// Parse command line arguments into the graph path and the MST settings
fn parse_args(args: &[String]) -> (String, MSTSettings) {
    let mut graph_path = None;
    let mut settings = MSTSettings::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--graph" => {
                let path = args.get(i + 1)
                    .unwrap_or_else(|| usage("Missing value for argument: --graph"));
                graph_path = Some(path.clone());
                i += 2;
            }
            "--root" => {
                settings.start_vertex = args.get(i + 1)
                    .and_then(|root| root.parse().ok())
                    .unwrap_or_else(|| usage("Invalid argument: --root"));
                i += 2;
            }
            "--full" => {
                settings.full = true;
                i += 1;
            }
            arg => usage(&format!("Unknown argument: {}", arg))
        }
    }

    match graph_path {
        Some(graph_path) => (graph_path, settings),
        None => usage("Missing required argument: --graph")
    }
}

/// Compute the MST of `graph` and print it as JSON
fn run(graph_name: &str, graph: &CsrGraph<f64>, settings: &MSTSettings) -> Result<(), Box<dyn std::error::Error>> {
    let num_components = graph.num_components();
    log::info!("Graph {} has {} nodes, {} entries and {} component(s)",
               graph_name, graph.num_nodes(), graph.num_edges(), num_components);

    let forest = mst_with_settings(graph, settings)?;
    let response = MSTResponse {
        graph_name,
        num_nodes: graph.num_nodes(),
        num_components,
        settings,
        total_weight: forest.total_weight(),
        forest,
    };
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}

fn main() {
    // Initialize logger
    env::set_var("RUST_LOG", "info");
    env::set_var("RUST_BACKTRACE", "1");
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    let (graph_path, settings) = parse_args(&args);
    log::info!("Computing spanning trees with the following settings: {:?}", &settings);

    let result: Result<(), Box<dyn std::error::Error>> = if Path::new(&graph_path).is_dir() {
        csrmst_lib::load_graphs(&graph_path).and_then(|graphs| {
            let mut names: Vec<_> = graphs.keys().cloned().collect();
            names.sort();
            for name in names {
                run(&name, &graphs[&name], &settings)?;
            }
            Ok(())
        })
    } else {
        match CsrGraph::<f64>::parse_from_file(&graph_path) {
            Ok(graph) => run(&graph_path, &graph, &settings),
            Err(err) => Err(err.into())
        }
    };

    if let Err(err) = result {
        log::error!("{}", err);
        process::exit(1);
    }
}
