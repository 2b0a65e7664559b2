use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use trajectory_editor::cli::{Cli, Command, SimulateArgs};
use trajectory_editor::simulation::simulate;
use trajectory_editor::trajectory::{trajectory_file_name, Shape, Trajectory};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Interactive { objects } => trajectory_editor::app::run(objects, cli.trajectory_dir),
        Command::Simulate(args) => run_simulation(&args),
        Command::Shape { shape, object } => write_shape(shape, &object, &cli.trajectory_dir),
        Command::Info { path } => print_info(&path),
    }
}

fn load(path: &Path) -> Result<Trajectory> {
    let mut trajectory = Trajectory::new();
    trajectory
        .load_from_file(path)
        .with_context(|| format!("Failed to load trajectory {:?}", path))?;
    Ok(trajectory)
}

fn run_simulation(args: &SimulateArgs) -> Result<()> {
    let trajectory = match (&args.file, args.shape) {
        (Some(path), _) => load(path)?,
        (None, Some(shape)) => shape.build(),
        (None, None) => anyhow::bail!("Either --file or --shape is required"),
    };

    for sample in simulate(trajectory, args.dt, args.frames) {
        if args.json {
            println!("{}", serde_json::to_string(&sample)?);
        } else {
            println!(
                "{:>6} {:>8.3}s  seg {:<3} ({:.3}, {:.3}, {:.3})",
                sample.frame,
                sample.time,
                sample.segment,
                sample.position.x,
                sample.position.y,
                sample.position.z
            );
        }
    }

    Ok(())
}

fn write_shape(shape: Shape, object: &str, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;

    let path = dir.join(trajectory_file_name(object));
    shape
        .build()
        .save_to_file(&path)
        .with_context(|| format!("Failed to save trajectory {:?}", path))?;

    log::info!("Wrote {} trajectory to {:?}", shape.name(), path);
    Ok(())
}

fn print_info(path: &Path) -> Result<()> {
    let trajectory = load(path)?;
    println!("{}", serde_json::to_string_pretty(&trajectory.snapshot())?);
    Ok(())
}
