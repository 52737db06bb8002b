use std::env;
use std::time::Instant;

use rand::prelude::*;

use csrmst_lib::graph::CsrGraph;
use csrmst_lib::mst::{mst_with_settings, MSTSettings};

#[derive(Debug)]
struct BenchResults {
    avg_tree_edges: f64,
    avg_total_weight: f64,
    avg_components: f64,
    avg_millis: f64,
}

fn main() {
    // Initialize logger
    env::set_var("RUST_LOG", "info");
    env::set_var("RUST_BACKTRACE", "1");
    env_logger::init();

    let args: Vec<_> = env::args().collect();

    if !args.contains(&"--nodes".to_string()) {
        let err = "Missing required argument: --nodes";
        log::error!("{}", err);
        panic!("{}", err);
    } else if !args.contains(&"--edges".to_string()) {
        let err = "Missing required argument: --edges";
        log::error!("{}", err);
        panic!("{}", err);
    }

    let mut settings = MSTSettings::default();
    let mut num_nodes: usize = 0;
    let mut num_edges: usize = 0;
    let mut max_weight: u32 = 1000;
    let mut loop_count: usize = 1;
    let mut seed: u64 = 0;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--full" => {
                settings.full = true;
                i += 1;
                continue;
            }
            "--nodes" => {
                num_nodes = args[i+1].parse()
                    .expect("Invalid argument: nodes");
            }
            "--edges" => {
                num_edges = args[i+1].parse()
                    .expect("Invalid argument: edges");
            }
            "--max-weight" => {
                max_weight = args[i+1].parse()
                    .expect("Invalid argument: max_weight");
            }
            "--loop" => {
                loop_count = args[i+1].parse()
                    .expect("Invalid argument: loop_count");
            }
            "--seed" => {
                seed = args[i+1].parse()
                    .expect("Invalid argument: seed");
            }
            _ => {
                panic!("Unknown argument: {}", &args[i]);
            }
        }
        i += 2;
    }

    log::info!("Benchmarking random graphs with {} nodes and {} edges", num_nodes, num_edges);
    log::info!("Settings: {:?}, loop count: {}", &settings, loop_count);
    log::info!("Starting benchmarks");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sum_tree_edges = 0;
    let mut sum_total_weight = 0.0;
    let mut sum_components = 0;
    let mut sum_millis = 0.0;
    for _ in 0..loop_count {
        let graph = CsrGraph::<f64>::random(num_nodes, num_edges, max_weight, &mut rng)
            .expect("Failed to generate random graph");
        if num_nodes > 0 {
            settings.start_vertex = rng.gen_range(1..=num_nodes);
        }

        let start = Instant::now();
        let forest = mst_with_settings(&graph, &settings)
            .expect("Failed to compute spanning tree");
        sum_millis += start.elapsed().as_secs_f64() * 1000.0;

        sum_tree_edges += forest.len();
        sum_total_weight += forest.total_weight();
        sum_components += graph.num_components();
    }

    let bench_results = BenchResults {
        avg_tree_edges: sum_tree_edges as f64 / loop_count as f64,
        avg_total_weight: sum_total_weight / loop_count as f64,
        avg_components: sum_components as f64 / loop_count as f64,
        avg_millis: sum_millis / loop_count as f64,
    };

    log::info!("Benchmark results:\n{:#?}", bench_results);
}
