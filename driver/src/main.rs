use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use workflow::config::ToolsConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Result inspection and experiment generation for the dhtf runs")]
struct Args {
    /// Load tool settings from YAML
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every per-seed result file of the timeout sweep
    Sweep {
        /// Directory the result paths are resolved against
        #[arg(long)]
        root: Option<PathBuf>,
        /// Warn and continue when a result file is missing
        #[arg(long, default_value_t = false)]
        skip_missing: bool,
    },
    /// Draw a task area set and write the client and server experiment files
    Generate {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        p_gen: Option<f64>,
        #[arg(long)]
        p_blue_server: Option<f64>,
        #[arg(long)]
        p_blue_client: Option<f64>,
        #[arg(long)]
        template: Option<PathBuf>,
        /// Also write a JSON summary of the drawn areas
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut config = ToolsConfig::load_or_default(args.config.as_deref())?;

    match args.command {
        Command::Sweep { root, skip_missing } => {
            if let Some(root) = root {
                config.sweep.root = root;
            }
            config.sweep.skip_missing |= skip_missing;
            Runner::new(config).sweep(io::stdout().lock())?;
        }
        Command::Generate {
            seed,
            p_gen,
            p_blue_server,
            p_blue_client,
            template,
            manifest,
        } => {
            let generator = &mut config.generator;
            generator.seed = seed.or(generator.seed);
            generator.p_gen = p_gen.unwrap_or(generator.p_gen);
            generator.p_blue_server = p_blue_server.unwrap_or(generator.p_blue_server);
            generator.p_blue_client = p_blue_client.unwrap_or(generator.p_blue_client);
            if let Some(template) = template {
                generator.template_path = template;
            }

            let report = Runner::new(config).generate(manifest.as_deref())?;
            println!(
                "Generated {} areas (seed {}) -> {}, {}",
                report.areas.len(),
                report.seed,
                report.client_output.display(),
                report.server_output.display()
            );
        }
    }

    Ok(())
}
