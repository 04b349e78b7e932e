use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use points_io::{read_points_csv, to_pairs, write_points_csv};
use provenance::{report_block, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Run planar geometry routines on CSV point clouds")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point cloud, written as JSON
    Hull {
        #[arg(long, default_value = "graham")]
        algo: HullAlgo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Diameter of the cloud (hull + rotating calipers)
    Diameter {
        #[arg(long)]
        input: PathBuf,
    },
    /// Delaunay triangulation, written as JSON
    Delaunay {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Closest pair of points
    Closest {
        #[arg(long)]
        input: PathBuf,
    },
    /// Axis-aligned bounding box
    Bbox {
        #[arg(long)]
        input: PathBuf,
    },
    /// Draw a seeded random cloud and write it as CSV
    Gen {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value = "square")]
        shape: Shape,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct HullOut {
    algo: String,
    vertices: Vec<[f64; 2]>,
    area: f64,
    perimeter: f64,
    diameter: f64,
}

#[derive(Serialize)]
struct TriangleOut {
    a: [f64; 2],
    b: [f64; 2],
    c: [f64; 2],
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Hull { algo, input, out } => hull(algo, &input, &out, tag),
        Action::Diameter { input } => diameter_cmd(&input, tag),
        Action::Delaunay { input, out } => delaunay(&input, &out, tag),
        Action::Closest { input } => closest(&input, tag),
        Action::Bbox { input } => bbox(&input, tag),
        Action::Gen {
            count,
            shape,
            half_extent,
            seed,
            index,
            out,
        } => gen_points(
            PointCloudCfg {
                count,
                shape,
                half_extent,
            },
            ReplayToken { seed, index },
            &out,
            tag,
        ),
        Action::Report => report(tag),
    }
}

fn hull(algo: HullAlgo, input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(%algo, input = %input.display(), out = %out.display(), tag = ?tag, "hull");
    let points = read_points_csv(input)?;
    let h = algo.compute(&points);
    tracing::info!(points = points.len(), vertices = h.len(), "hull_done");
    let body = HullOut {
        algo: algo.to_string(),
        vertices: to_pairs(h.vertices()),
        area: h.area(),
        perimeter: h.perimeter(),
        diameter: h.diameter(),
    };
    write_json(out, &body)?;
    let params = json!({
        "cmd": "hull",
        "algo": algo.to_string(),
        "input": input.display().to_string(),
    });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn diameter_cmd(input: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "diameter");
    let points = read_points_csv(input)?;
    let h = graham_scan(&points);
    let d = h.diameter();
    let pair = diameter_pair(h.vertices()).map(|(a, b)| to_pairs(&[a, b]));
    tracing::info!(points = points.len(), hull = h.len(), diameter = d, "diameter_done");
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "diameter": d, "pair": pair }))?
    );
    Ok(())
}

fn delaunay(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "delaunay");
    let points = read_points_csv(input)?;
    if points.len() < 3 {
        bail!(
            "delaunay needs at least 3 points, {} has {}",
            input.display(),
            points.len()
        );
    }
    let tris = triangulate(&points);
    tracing::info!(points = points.len(), triangles = tris.len(), "delaunay_done");
    let body: Vec<TriangleOut> = tris
        .iter()
        .map(|t| TriangleOut {
            a: [t.a.x, t.a.y],
            b: [t.b.x, t.b.y],
            c: [t.c.x, t.c.y],
        })
        .collect();
    write_json(out, &body)?;
    let params = json!({ "cmd": "delaunay", "input": input.display().to_string() });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn closest(input: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "closest");
    let points = read_points_csv(input)?;
    let Some((a, b, d)) = closest_pair_points(&points) else {
        bail!(
            "closest pair needs at least 2 points, {} has {}",
            input.display(),
            points.len()
        );
    };
    tracing::info!(points = points.len(), distance = d, "closest_done");
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "distance": d, "pair": to_pairs(&[a, b]) }))?
    );
    Ok(())
}

fn bbox(input: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "bbox");
    let points = read_points_csv(input)?;
    let bb = aabb(&points);
    let (lo, hi) = bb.corners();
    tracing::info!(points = points.len(), width = bb.width(), height = bb.height(), "bbox_done");
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "min": [lo.x, lo.y],
            "max": [hi.x, hi.y],
        }))?
    );
    Ok(())
}

fn gen_points(cfg: PointCloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        shape = ?cfg.shape,
        half_extent = cfg.half_extent,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        tag = ?tag,
        "gen"
    );
    let points = draw_points(cfg, tok);
    write_points_csv(out, &points)?;
    let params = json!({
        "cmd": "gen",
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "half_extent": cfg.half_extent,
        "seed": tok.seed,
        "index": tok.index,
    });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_block(tag.as_deref())?)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, body: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(body)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
