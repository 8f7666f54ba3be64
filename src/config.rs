use std::path::PathBuf;

use clap::Parser;

/// Float precision of the in-memory mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Precision {
    #[default]
    #[value(name = "f32")]
    Single,
    #[value(name = "f64")]
    Double,
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::Single => write!(f, "f32"),
            Precision::Double => write!(f, "f64"),
        }
    }
}

/// Fully resolved pipeline configuration (constructed from CLI args).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub precision: Precision,
    pub compute_normals: bool,
    pub json: bool,
    pub verbose: bool,
    pub threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            precision: Precision::default(),
            compute_normals: true,
            json: false,
            verbose: false,
            threads: None,
        }
    }
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "mesh-engine",
    about = "Load a triangle mesh, derive connectivity, bounds and vertex normals",
    version
)]
pub struct CliArgs {
    /// Input mesh (OBJ, TRI)
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Save the processed mesh to this path (OBJ, TRI)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Float precision: f32 or f64
    #[arg(long, value_enum, default_value = "f32")]
    pub precision: Precision,

    /// Skip vertex normal estimation
    #[arg(long)]
    pub no_normals: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Worker thread count (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<CliArgs> for PipelineConfig {
    fn from(args: CliArgs) -> Self {
        PipelineConfig {
            input: args.input,
            output: args.output,
            precision: args.precision,
            compute_normals: !args.no_normals,
            json: args.json,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}
