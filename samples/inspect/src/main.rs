use std::{fmt::Display, path::Path, process::ExitCode};

use clap::Parser;
use trimesh::{Float, ImportOptions, TriangleMesh};

mod cli;
use cli::*;

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_filter, cli.log_format);

    let options = cli.import_options();
    let mut failed = 0usize;
    for path in &cli.files {
        let res = if cli.double {
            inspect::<f64>(path, &options)
        } else {
            inspect::<f32>(path, &options)
        };
        if let Err(e) = res {
            tracing::error!(path = %path.display(), "{e}");
            failed += 1;
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        tracing::warn!(failed, total = cli.files.len(), "some files could not be imported");
        ExitCode::FAILURE
    }
}

/// Import a single file and print a summary of it to stdout.
fn inspect<Real: Float + Display>(
    path: &Path,
    options: &ImportOptions,
) -> Result<(), trimesh::error::Error> {
    let mesh = TriangleMesh::<Real>::load(path, options)?;
    println!("{}", path.display());
    println!("  triangles: {}", mesh.triangle_count());
    match (mesh.bounding_box(), mesh.bounding_sphere()) {
        (Some(aabb), Some(sphere)) => {
            println!("  box:       {} .. {}", aabb.mins, aabb.maxs);
            println!("  extents:   {}", aabb.extents().transpose());
            println!("  sphere:    {} r={}", sphere.center, sphere.radius);
        }
        _ => println!("  (empty)"),
    }
    Ok(())
}
