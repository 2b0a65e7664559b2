// cli.rs - Command-line interface configuration
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::trajectory::Shape;

#[derive(Parser, Debug, Clone)]
#[command(name = "trajectory-editor")]
#[command(about = "Keyframe trajectory editor", long_about = None)]
pub struct Cli {
    /// Directory holding trajectory_<object>.txt files
    #[arg(long, global = true, env = "TRAJECTORY_DIR", default_value = ".")]
    pub trajectory_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open a window and author trajectories with keyboard and mouse
    Interactive {
        /// Scene object to create; repeat for several objects
        #[arg(long = "object", default_value = "Suzanne")]
        objects: Vec<String>,
    },
    /// Play a trajectory headless and print the sampled positions
    Simulate(SimulateArgs),
    /// Write a preset shape as an object's trajectory file
    Shape {
        #[arg(value_enum)]
        shape: Shape,
        /// Object name used for the file name
        #[arg(long)]
        object: String,
    },
    /// Print a trajectory file as JSON
    Info { path: PathBuf },
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Trajectory file to play
    #[arg(long, conflicts_with = "shape", required_unless_present = "shape")]
    pub file: Option<PathBuf>,

    /// Preset shape to play instead of a file
    #[arg(long, value_enum)]
    pub shape: Option<Shape>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Emit one JSON object per frame instead of text
    #[arg(long, default_value = "false")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simulate_with_shape() {
        let cli = Cli::try_parse_from([
            "trajectory-editor",
            "simulate",
            "--shape",
            "square",
            "--frames",
            "10",
        ])
        .unwrap();

        match cli.command {
            Command::Simulate(args) => {
                assert_eq!(args.shape, Some(Shape::Square));
                assert_eq!(args.frames, 10);
                assert!(args.file.is_none());
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn simulate_needs_a_source() {
        assert!(Cli::try_parse_from(["trajectory-editor", "simulate"]).is_err());
        assert!(Cli::try_parse_from([
            "trajectory-editor",
            "simulate",
            "--shape",
            "circle",
            "--file",
            "a.txt",
        ])
        .is_err());
    }

    #[test]
    fn interactive_defaults_to_one_object() {
        let cli = Cli::try_parse_from(["trajectory-editor", "interactive"]).unwrap();
        match cli.command {
            Command::Interactive { objects } => assert_eq!(objects, vec!["Suzanne".to_string()]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn trajectory_dir_is_global() {
        let cli = Cli::try_parse_from([
            "trajectory-editor",
            "shape",
            "triangle",
            "--object",
            "Cube",
            "--trajectory-dir",
            "/tmp/paths",
        ])
        .unwrap();
        assert_eq!(cli.trajectory_dir, PathBuf::from("/tmp/paths"));
    }
}
