use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{PipelineConfig, Precision};
use crate::error::Result;
use crate::formats::MeshFormat;
use crate::mesh::Mesh;
use crate::types::Real;

/// Summary of a completed pipeline run.
#[derive(Debug)]
pub struct ProcessingResult {
    pub summary: MeshSummary,
    pub duration: Duration,
}

/// Counts and bounds of the processed mesh.
#[derive(Debug, Clone, Serialize)]
pub struct MeshSummary {
    pub input: String,
    pub format: String,
    pub precision: String,
    pub vertices: usize,
    pub normals: usize,
    pub texcoords: usize,
    pub triangles: usize,
    pub connectivity_entries: usize,
    pub normals_computed: bool,
    pub bounds: Option<BoundsSummary>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundsSummary {
    pub min: [f64; 3],
    pub max: [f64; 3],
    pub center: [f64; 3],
    pub diagonal: f64,
}

impl MeshSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Pipeline orchestrator: load, derive normals, optionally save.
pub struct Pipeline;

impl Pipeline {
    pub fn run(config: &PipelineConfig) -> Result<ProcessingResult> {
        let start = Instant::now();

        info!(
            input = %config.input.display(),
            precision = %config.precision,
            "Starting pipeline"
        );

        let summary = match config.precision {
            Precision::Single => Self::process::<f32>(config)?,
            Precision::Double => Self::process::<f64>(config)?,
        };

        let duration = start.elapsed();
        info!(elapsed = ?duration, "Pipeline complete");

        Ok(ProcessingResult { summary, duration })
    }

    fn process<T: Real>(config: &PipelineConfig) -> Result<MeshSummary> {
        let format = MeshFormat::from_path(&config.input)?;

        info!("Stage 1/3: Load");
        let mut mesh = Mesh::<T>::from_file(&config.input)?;

        let mut normals_computed = false;
        if config.compute_normals {
            if mesh.connectivity().is_empty() {
                warn!(format = %format, "No connectivity; skipping vertex normals");
            } else {
                info!("Stage 2/3: Vertex normals");
                mesh.compute_vertex_normal();
                normals_computed = true;
            }
        }

        if let Some(output) = &config.output {
            info!("Stage 3/3: Save");
            mesh.save(output)?;
        }

        Ok(summarize(&mesh, config, format, normals_computed))
    }
}

fn summarize<T: Real>(
    mesh: &Mesh<T>,
    config: &PipelineConfig,
    format: MeshFormat,
    normals_computed: bool,
) -> MeshSummary {
    let bounds = mesh.bounding_box().map(|bb| BoundsSummary {
        min: bb.min.to_dvec3().to_array(),
        max: bb.max.to_dvec3().to_array(),
        center: bb.center.to_dvec3().to_array(),
        diagonal: bb.diagonal().as_f64(),
    });

    MeshSummary {
        input: config.input.display().to_string(),
        format: format.to_string(),
        precision: config.precision.to_string(),
        vertices: mesh.vertex_count(),
        normals: mesh.normals().len(),
        texcoords: mesh.texcoords().len(),
        triangles: mesh.triangle_count(),
        connectivity_entries: mesh.connectivity().total_entries(),
        normals_computed,
        bounds,
        output: config.output.as_ref().map(|p| p.display().to_string()),
    }
}

/// Print a human-readable summary.
pub fn print_summary(summary: &MeshSummary, duration: Duration) {
    println!("=== Mesh Summary ===");
    println!("  Input:     {}", summary.input);
    println!("  Format:    {} ({})", summary.format, summary.precision);
    println!("  Vertices:  {}", summary.vertices);
    println!("  Triangles: {}", summary.triangles);
    println!("  TexCoords: {}", summary.texcoords);
    println!(
        "  Normals:   {}{}",
        summary.normals,
        if summary.normals_computed { " (estimated)" } else { "" }
    );
    println!("  Connectivity entries: {}", summary.connectivity_entries);
    match &summary.bounds {
        Some(bb) => {
            println!(
                "  Bounding box: ({:.3}, {:.3}, {:.3}) → ({:.3}, {:.3}, {:.3})",
                bb.min[0], bb.min[1], bb.min[2], bb.max[0], bb.max[1], bb.max[2]
            );
            println!(
                "  Center:       ({:.3}, {:.3}, {:.3})",
                bb.center[0], bb.center[1], bb.center[2]
            );
            println!("  Diagonal:     {:.3}", bb.diagonal);
        }
        None => println!("  Bounding box: none (no vertices)"),
    }
    if let Some(output) = &summary.output {
        println!("  Saved to:  {output}");
    }
    println!("  Elapsed:   {:.3}s", duration.as_secs_f64());
}
