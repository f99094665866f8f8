#[macro_use] extern crate log;
extern crate simplelog;
extern crate serde_json;
extern crate partial_mst;

use serde_json::Value;
use simplelog::*;
use std::env;
use std::fs::File;
use std::io::Read;
use std::process;

use partial_mst::Graph;

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config {time: None, level: None, target: None, location: None, time_format: None});

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: partial_mst <graph.json>");
            process::exit(2);
        }
    };

    let graph = match load_graph(&path) {
        Ok(graph) => graph,
        Err(message) => {
            eprintln!("{}: {}", path, message);
            process::exit(1);
        }
    };
    info!("loaded {}: {} vertices", path, graph.vertex_count());

    let (mut list, mut links) = partial_mst::initialize(&graph);
    for tree in &list {
        debug!(
            "fragment rooted at {} with {} candidate arcs",
            graph.name(tree.root()),
            tree.arc_count()
        );
    }

    match partial_mst::execute(&mut list, &mut links) {
        Ok(arcs) => {
            let mut total = 0;
            for arc in &arcs {
                println!(
                    "{} {} {}",
                    graph.name(arc.v1),
                    graph.name(arc.v2),
                    arc.weight
                );
                total += arc.weight;
            }
            println!("total weight: {}", total);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn load_graph(path: &str) -> Result<Graph, String> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|err| err.to_string())?;
    let json: Value = serde_json::from_str(&contents).map_err(|err| err.to_string())?;
    Graph::from_json(&json).map_err(|err| err.to_string())
}
