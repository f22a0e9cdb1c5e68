//! polarray CLI — plan and build circular arrays from a TOML description.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polarray::{ArrayResult, CircularArray, TriangleMesh};
use std::path::PathBuf;

mod input;

#[derive(Parser)]
#[command(name = "polarray")]
#[command(about = "Circular (polar) array generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ring table and instance count for a parameter file
    Plan {
        /// Path to the TOML parameter file
        file: PathBuf,
    },
    /// Realize the array and write the result as binary STL
    Build {
        /// Path to the TOML parameter file
        file: PathBuf,
        /// Output STL path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { file } => plan(&file),
        Commands::Build { file, output } => build(&file, &output),
    }
}

fn load(file: &std::path::Path) -> Result<(CircularArray, TriangleMesh)> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let desc: input::ArrayFile = toml::from_str(&text)
        .with_context(|| format!("parsing {}", file.display()))?;
    let params = desc.to_parameters()?;
    if let Some(notice) = params.notice() {
        eprintln!("warning: {notice}");
    }
    let base = desc.base_mesh();
    Ok((CircularArray::new(params), base))
}

fn plan(file: &std::path::Path) -> Result<()> {
    let (array, _base) = load(file)?;
    let plan = array.plan();

    println!("{:>5}  {:>12}  {:>8}", "ring", "radius", "elements");
    for ring in &plan.rings {
        println!("{:>5}  {:>12.3}  {:>8}", ring.index, ring.radius, ring.count);
    }
    println!("total: {}", plan.summary());
    Ok(())
}

fn build(file: &std::path::Path, output: &std::path::Path) -> Result<()> {
    let (array, base) = load(file)?;
    let outcome = array.realize_mesh(&base)?;

    let mesh = match outcome.result {
        ArrayResult::Fused(mesh) => mesh,
        ArrayResult::Compound(shapes) => {
            let mut merged = TriangleMesh::new();
            for shape in &shapes {
                merged.merge(shape);
            }
            merged
        }
        ArrayResult::Linked(linked) => {
            // Linked arrays share geometry in memory; STL has no instancing,
            // so instantiate at export time.
            let mut merged = TriangleMesh::new();
            for (shape, transform) in linked.instances() {
                merged.merge(&shape.transformed(transform));
            }
            merged
        }
    };

    polarray::write_stl(&mesh, output)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "wrote {} ({} instances in {} rings, {} triangles)",
        output.display(),
        outcome.placements.len(),
        outcome.rings.len(),
        mesh.num_triangles()
    );
    Ok(())
}
