use anyhow::Context;
use clap::Parser;
use eligibility_corpus::DatasetPipeline;
use eligibility_corpus::utils::logging::{print_collection_summary, print_split_summary};

mod cli;

use crate::cli::Cli;

fn main() {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let pipeline = DatasetPipeline::new(cli.dataset_config())?;

    let summary = pipeline
        .run(&cli.trials, &cli.patients, &cli.output_prefix)
        .with_context(|| {
            format!(
                "Failed to build dataset from {} and {}",
                cli.trials.display(),
                cli.patients.display()
            )
        })?;

    print_collection_summary(summary.report.records, summary.report.trials);
    print_split_summary(&summary.statistics);

    if let Some(path) = &cli.summary_file {
        summary
            .statistics
            .save_to_file(path)
            .with_context(|| format!("Failed to save summary to {}", path.display()))?;
    }

    Ok(())
}
