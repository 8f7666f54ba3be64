use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mesh_engine::config::{CliArgs, PipelineConfig};
use mesh_engine::pipeline::{self, Pipeline};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("mesh_engine=debug")
    } else {
        EnvFilter::new("mesh_engine=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config: PipelineConfig = args.into();

    // Configure rayon thread pool
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
    }

    match Pipeline::run(&config) {
        Ok(result) => {
            if config.json {
                let json = result
                    .summary
                    .to_json()
                    .context("Failed to serialize summary")?;
                println!("{json}");
            } else {
                pipeline::print_summary(&result.summary, result.duration);
            }
            Ok(())
        }
        Err(e) => {
            error!(%e, "Pipeline failed");
            Err(anyhow::anyhow!(e)).context("mesh-engine pipeline failed")
        }
    }
}
