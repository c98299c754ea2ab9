use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use monochain::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Containment comparison and sample generation")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Time the chain-search structure against the half-plane reference
    /// scan and check that the two response sequences are equal
    Compare {
        /// Points drawn for the polygon's convex hull
        #[arg(long, default_value_t = 50_000)]
        vertices: usize,
        /// Query points
        #[arg(long, default_value_t = 1_000_000)]
        points: usize,
        /// Side of the [0, scale]² sampling square
        #[arg(long, default_value_t = 500_000.0)]
        scale: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a random convex polygon as a JSON vertex list
    Gen {
        #[arg(long, default_value_t = 64)]
        vertices: usize,
        #[arg(long, default_value_t = 1_000.0)]
        scale: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compare {
            vertices,
            points,
            scale,
            seed,
            out,
        } => compare(vertices, points, scale, seed, out),
        Action::Gen {
            vertices,
            scale,
            seed,
        } => gen(vertices, scale, seed),
    }
}

fn compare(vertices: usize, points: usize, scale: f64, seed: u64, out: Option<String>) -> Result<()> {
    let ring = draw_convex_polygon(vertices, scale, ReplayToken { seed, index: 0 })
        .context("hull of the random points degenerated below a triangle")?;
    let queries = draw_points_uniform(points, scale, ReplayToken { seed, index: 1 });
    tracing::info!(
        drawn = vertices,
        hull_vertices = ring.len(),
        queries = queries.len(),
        scale,
        seed,
        "generated inputs"
    );

    let t = Instant::now();
    let oracle = HalfPlaneOracle::new(&ring);
    let reference: Vec<bool> = queries.iter().map(|&q| oracle.contains(q)).collect();
    let reference_s = t.elapsed().as_secs_f64();
    tracing::info!(elapsed_s = reference_s, "half-plane scan");

    let t = Instant::now();
    let poly = ConvexPolygon::new(&ring).context("polygon rejected at construction")?;
    let responses: Vec<bool> = queries.iter().map(|&q| poly.contains(q)).collect();
    let chain_s = t.elapsed().as_secs_f64();
    tracing::info!(elapsed_s = chain_s, "chain search (incl. preprocessing)");

    let mismatches = reference
        .iter()
        .zip(&responses)
        .filter(|(a, b)| a != b)
        .count();
    let inside = responses.iter().filter(|&&b| b).count();
    tracing::info!(mismatches, inside, equal = mismatches == 0, "compared");

    let report = serde_json::json!({
        "params": {
            "vertices": vertices,
            "points": points,
            "scale": scale,
            "seed": seed,
        },
        "hull_vertices": ring.len(),
        "inside": inside,
        "half_plane_s": reference_s,
        "chain_search_s": chain_s,
        "mismatches": mismatches,
        "equal": mismatches == 0,
    });
    match out {
        Some(path) => {
            let out_path = Path::new(&path);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)?;
            tracing::info!(path, "report written");
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    anyhow::ensure!(mismatches == 0, "{mismatches} responses disagree");
    Ok(())
}

fn gen(vertices: usize, scale: f64, seed: u64) -> Result<()> {
    let ring = draw_convex_polygon(vertices, scale, ReplayToken { seed, index: 0 })
        .context("hull of the random points degenerated below a triangle")?;
    let verts: Vec<[f64; 2]> = ring.iter().map(|p| [p.x, p.y]).collect();
    println!("{}", serde_json::to_string_pretty(&serde_json::json!(verts))?);
    Ok(())
}
