mod doc;
mod provenance;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ncst::api::{
    draw_convex_polygon_graph, draw_random_graph, find_polygon_ncst, visualize_run,
    ConvexPolygonCfg, Graph, Outcome, RandomGraphCfg, ReplayToken, Search, SearchCfg,
};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use doc::{write_json, GraphDoc, JsonDump, SolveDoc};

#[derive(Parser)]
#[command(name = "ncst-cli")]
#[command(about = "Non-crossing spanning trees and forests of geometric graphs")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    Ncst,
    Bncf,
    Polygon,
}

impl Algo {
    fn name(self) -> &'static str {
        match self {
            Algo::Ncst => "ncst",
            Algo::Bncf => "bncf",
            Algo::Polygon => "polygon",
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Solve a graph document and write the result with a provenance sidecar
    Solve {
        #[arg(long, value_enum)]
        algo: Algo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Worker threads for branch-and-bound (0 = rayon default)
        #[arg(long, default_value_t = 0)]
        threads: usize,
        /// Progress log interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        progress_ms: u64,
        /// Write input and result graphs as JSON under this directory
        #[arg(long)]
        dump_dir: Option<PathBuf>,
    },
    /// Write a random graph document
    Generate {
        #[arg(long)]
        vertices: usize,
        #[arg(long)]
        edges: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Vertices on a regular polygon with boundary edges and `edges` chords
        #[arg(long)]
        convex: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Solve {
            algo,
            input,
            out,
            threads,
            progress_ms,
            dump_dir,
        } => {
            let cfg = SearchCfg {
                threads,
                progress_interval: Duration::from_millis(progress_ms.max(1)),
                ..SearchCfg::default()
            };
            solve(algo, &input, &out, cfg, dump_dir.as_deref())
        }
        Action::Generate {
            vertices,
            edges,
            seed,
            convex,
            out,
        } => generate(vertices, edges, seed, convex, &out),
        Action::Report => report(),
    }
}

fn solve(
    algo: Algo,
    input: &Path,
    out: &Path,
    cfg: SearchCfg,
    dump_dir: Option<&Path>,
) -> Result<()> {
    tracing::info!(algo = algo.name(), input = %input.display(), out = %out.display(), "solve");
    let doc = GraphDoc::read(input)?;
    let graph = doc.to_graph()?;
    tracing::info!(%graph, "input graph");
    let result = run_algo(algo, &graph, doc.polygon.as_deref(), cfg)?;
    if let Some(dir) = dump_dir {
        let mut dump = JsonDump::new(dir);
        visualize_run(&mut dump, algo.name(), &graph, result.as_ref());
        if let Some(e) = dump.errors.into_iter().next() {
            return Err(e.context("dumping graphs"));
        }
    }
    let solved = SolveDoc {
        algo: algo.name().to_string(),
        found: result.is_some(),
        graph: result.as_ref().map(GraphDoc::from_graph::<i64>),
    };
    write_json(out, &solved)?;
    let sidecar = provenance::write_sidecar(
        out,
        json!({
            "algo": algo.name(),
            "input": input.to_string_lossy(),
            "threads": cfg.threads,
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "intersection_index": graph.intersection_index(),
        }),
    )?;
    tracing::info!(found = solved.found, sidecar = %sidecar.display(), "done");
    Ok(())
}

/// `None` when no tree exists; BNCF always yields a forest.
fn run_algo(
    algo: Algo,
    graph: &Graph<i64>,
    polygon: Option<&[i64]>,
    cfg: SearchCfg,
) -> Result<Option<Graph<i64>>> {
    let search = Search::new(cfg);
    let outcome = match algo {
        Algo::Ncst => search.ncst(graph)?,
        Algo::Bncf => Outcome::Found(search.bncf(graph)?),
        Algo::Polygon => {
            let polygon =
                polygon.ok_or_else(|| anyhow!("--algo polygon needs a `polygon` field"))?;
            find_polygon_ncst(graph, polygon).context("polygon search")?
        }
    };
    Ok(outcome.found())
}

fn generate(vertices: usize, edges: usize, seed: u64, convex: bool, out: &Path) -> Result<()> {
    if vertices == 0 {
        bail!("--vertices must be positive");
    }
    let tok = ReplayToken { seed, index: 0 };
    let doc = if convex {
        let cfg = ConvexPolygonCfg {
            vertices,
            chords: edges,
            ..ConvexPolygonCfg::default()
        };
        let (g, order) = draw_convex_polygon_graph(cfg, tok);
        let mut doc = GraphDoc::from_graph(&g);
        doc.polygon = Some(order.into_iter().map(i64::from).collect());
        doc
    } else {
        let cfg = RandomGraphCfg {
            vertices,
            edges,
            ..RandomGraphCfg::default()
        };
        GraphDoc::from_graph(&draw_random_graph(cfg, tok))
    };
    tracing::info!(vertices, edges = doc.edges.len(), convex, out = %out.display(), "generate");
    write_json(out, &doc)?;
    provenance::write_sidecar(
        out,
        json!({ "vertices": vertices, "edges": edges, "seed": seed, "convex": convex }),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::report_block())?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_then_solve_each_algo() {
        let dir = tempdir().unwrap();
        let graph_path = dir.path().join("convex.json");
        generate(7, 5, 3, true, &graph_path).unwrap();
        assert!(dir.path().join("convex.provenance.json").exists());
        for algo in [Algo::Ncst, Algo::Bncf, Algo::Polygon] {
            let out = dir.path().join(format!("{}.json", algo.name()));
            solve(algo, &graph_path, &out, SearchCfg::default(), None).unwrap();
            let parsed: SolveDoc = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
            // Boundary edges are present, so a tree always exists.
            assert!(parsed.found, "{}", algo.name());
            assert_eq!(parsed.graph.unwrap().edges.len(), 6);
        }
    }

    #[test]
    fn polygon_needs_an_order() {
        let dir = tempdir().unwrap();
        let graph_path = dir.path().join("scatter.json");
        generate(6, 8, 1, false, &graph_path).unwrap();
        let out = dir.path().join("out.json");
        let err = solve(Algo::Polygon, &graph_path, &out, SearchCfg::default(), None);
        assert!(err.is_err());
    }

    #[test]
    fn crossing_pair_has_no_tree_but_a_forest() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("x.json");
        let input_doc = GraphDoc {
            vertices: vec![
                doc::VertexDoc { id: 1, x: 0.0, y: 0.0 },
                doc::VertexDoc { id: 2, x: 1.0, y: 1.0 },
                doc::VertexDoc { id: 3, x: 0.0, y: 1.0 },
                doc::VertexDoc { id: 4, x: 1.0, y: 0.0 },
            ],
            edges: vec![[1, 2], [3, 4]],
            polygon: None,
        };
        write_json(&input, &input_doc).unwrap();
        let dump = dir.path().join("dump");
        let out = dir.path().join("ncst.json");
        solve(Algo::Ncst, &input, &out, SearchCfg::default(), Some(&dump)).unwrap();
        let parsed: SolveDoc = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert!(!parsed.found && parsed.graph.is_none());
        assert!(dump.join("ncst_graph.json").exists());
        assert!(!dump.join("ncst_result.json").exists());
        let out = dir.path().join("bncf.json");
        solve(Algo::Bncf, &input, &out, SearchCfg::default(), None).unwrap();
        let parsed: SolveDoc = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed.graph.unwrap().edges.len(), 1);
    }
}
